use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::{Principal, Role};

/// HS256 key length in bytes. Secrets are padded or truncated to exactly this.
const KEY_LEN: usize = 32;
const KEY_PAD: u8 = b'X';

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String, // Subject (account email)
    pub role: Role,
    pub iat: i64, // Issued at timestamp
    pub exp: i64, // Expiration timestamp
    pub iss: String,
}

impl Claims {
    pub fn into_principal(self) -> Result<Principal, TokenError> {
        let issued_at = DateTime::<Utc>::from_timestamp(self.iat, 0).ok_or(TokenError::Malformed)?;
        let expires_at = DateTime::<Utc>::from_timestamp(self.exp, 0).ok_or(TokenError::Malformed)?;
        Ok(Principal::new(self.sub, self.role, issued_at, expires_at))
    }
}

/// Why a credential was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    BadSignature,
}

/// JWT Service - issues and validates credentials
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl: Duration,
}

impl JwtService {
    /// Create a service from the configured secret.
    ///
    /// The same secret always yields the same key, so credentials survive restarts.
    pub fn new(secret: &str, issuer: impl Into<String>, ttl: Duration) -> Self {
        let key = derive_key(secret);
        Self {
            encoding_key: EncodingKey::from_secret(&key),
            decoding_key: DecodingKey::from_secret(&key),
            issuer: issuer.into(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a credential valid from now for the configured TTL
    pub fn issue(&self, subject: &str, role: Role) -> anyhow::Result<String> {
        self.issue_at(subject, role, Utc::now())
    }

    /// Issue a credential as if the clock read `issued_at`
    pub fn issue_at(
        &self,
        subject: &str,
        role: Role,
        issued_at: DateTime<Utc>,
    ) -> anyhow::Result<String> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .filter(|expires_at| *expires_at > issued_at)
            .ok_or_else(|| anyhow::anyhow!("Credential lifetime {} is out of range", self.ttl))?;

        let claims = Claims {
            sub: subject.to_string(),
            role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify signature, issuer and expiry.
    ///
    /// Never panics; anything that is not a structurally sound JWT is `Malformed`.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        check_structure(token)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            })?;

        // jsonwebtoken accepts exp == now; a credential is only live while exp is in the future
        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        self.validate(token).map(|claims| claims.sub)
    }

    pub fn extract_role(&self, token: &str) -> Result<Role, TokenError> {
        self.validate(token).map(|claims| claims.role)
    }

    /// Validate and turn the credential into a request principal
    pub fn resolve(&self, token: &str) -> Result<Principal, TokenError> {
        self.validate(token)?.into_principal()
    }
}

/// Pad with 'X' or truncate to exactly `KEY_LEN` bytes
fn derive_key(secret: &str) -> Vec<u8> {
    let mut key = secret.as_bytes().to_vec();
    key.resize(KEY_LEN, KEY_PAD);
    key
}

/// Three segments, a decodable header, and a base64url JSON object payload
fn check_structure(token: &str) -> Result<(), TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
        return Err(TokenError::Malformed);
    }

    decode_header(token).map_err(|_| TokenError::Malformed)?;

    let payload = URL_SAFE_NO_PAD
        .decode(segments[1])
        .map_err(|_| TokenError::Malformed)?;
    match serde_json::from_slice::<serde_json::Value>(&payload) {
        Ok(serde_json::Value::Object(_)) => Ok(()),
        _ => Err(TokenError::Malformed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test_secret_key", "test_issuer", Duration::days(30))
    }

    /// Replace the first character of the signature segment
    fn tamper_signature(token: &str) -> String {
        let (head, signature) = token.rsplit_once('.').unwrap();
        let mut chars: Vec<char> = signature.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        format!("{}.{}", head, chars.into_iter().collect::<String>())
    }

    #[test]
    fn test_issue_and_validate_roundtrip() {
        let service = service();
        let token = service.issue("alice@x.com", Role::Owner).unwrap();

        let claims = service.validate(&token).unwrap();
        assert_eq!(claims.sub, "alice@x.com");
        assert_eq!(claims.role, Role::Owner);
        assert_eq!(claims.iss, "test_issuer");
        assert_eq!(claims.exp - claims.iat, Duration::days(30).num_seconds());

        assert_eq!(service.extract_subject(&token).unwrap(), "alice@x.com");
        assert_eq!(service.extract_role(&token).unwrap(), Role::Owner);
    }

    #[test]
    fn test_out_of_range_ttl_is_an_error() {
        let service = JwtService::new("k", "i", Duration::seconds(9_000_000_000_000));
        assert!(service.issue("alice@x.com", Role::Owner).is_err());

        let service = JwtService::new("k", "i", Duration::zero());
        assert!(service.issue("alice@x.com", Role::Owner).is_err());

        let service = JwtService::new("k", "i", Duration::seconds(-60));
        assert!(service.issue("alice@x.com", Role::Owner).is_err());
    }

    #[test]
    fn test_resolve_builds_principal() {
        let service = service();
        let token = service.issue("s@campus.edu", Role::Student).unwrap();

        let principal = service.resolve(&token).unwrap();
        assert_eq!(principal.subject(), "s@campus.edu");
        assert_eq!(principal.role(), Role::Student);
        assert!(principal.expires_at() > principal.issued_at());
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let service = service();
        let token = service.issue("alice@x.com", Role::Owner).unwrap();

        let result = service.validate(&tamper_signature(&token));
        assert_eq!(result, Err(TokenError::BadSignature));
    }

    #[test]
    fn test_wrong_secret_is_bad_signature() {
        let other = JwtService::new("another_secret", "test_issuer", Duration::days(30));
        let token = other.issue("alice@x.com", Role::Owner).unwrap();

        assert_eq!(service().validate(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_expired_token() {
        let service = service();
        let token = service
            .issue_at("alice@x.com", Role::Owner, Utc::now() - Duration::days(31))
            .unwrap();

        assert_eq!(service.validate(&token), Err(TokenError::Expired));
        assert_eq!(service.extract_subject(&token), Err(TokenError::Expired));
        assert_eq!(service.extract_role(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_malformed_tokens() {
        let service = service();
        for garbage in ["", "invalid_token", "a.b", "a.b.c", "a..c", "x.y.z.w", "ey.ey.ey"] {
            assert_eq!(
                service.validate(garbage),
                Err(TokenError::Malformed),
                "input: {:?}",
                garbage
            );
        }
    }

    #[test]
    fn test_non_object_payload_is_malformed() {
        let service = service();
        let token = service.issue("alice@x.com", Role::Owner).unwrap();
        let segments: Vec<&str> = token.split('.').collect();
        let payload = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
        let forged = format!("{}.{}.{}", segments[0], payload, segments[2]);

        assert_eq!(service.validate(&forged), Err(TokenError::Malformed));
    }

    #[test]
    fn test_issuer_mismatch_rejected() {
        let foreign = JwtService::new("test_secret_key", "someone_else", Duration::days(30));
        let token = foreign.issue("alice@x.com", Role::Admin).unwrap();

        assert!(service().validate(&token).is_err());
    }

    #[test]
    fn test_key_derivation_is_stable() {
        assert_eq!(derive_key("short").len(), KEY_LEN);
        assert!(derive_key("short").ends_with(b"XXXX"));
        assert_eq!(derive_key(&"k".repeat(64)), vec![b'k'; KEY_LEN]);

        // Two services from the same secret accept each other's credentials
        let a = JwtService::new("restart-me", "test_issuer", Duration::days(1));
        let b = JwtService::new("restart-me", "test_issuer", Duration::days(1));
        let token = a.issue("alice@x.com", Role::Student).unwrap();
        assert!(b.validate(&token).is_ok());
    }

    #[test]
    fn test_padding_makes_prefix_secrets_equivalent() {
        // "abc" pads to "abcXXX..." so an explicit "abcX" secret derives the same key
        let a = JwtService::new("abc", "test_issuer", Duration::days(1));
        let b = JwtService::new("abcX", "test_issuer", Duration::days(1));
        let token = a.issue("alice@x.com", Role::Student).unwrap();
        assert!(b.validate(&token).is_ok());
    }
}
