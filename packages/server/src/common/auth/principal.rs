use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of account roles. Fixed at registration, no hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Student,
    Owner,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Owner => "OWNER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Invalid role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Case-insensitive: registration forms send "owner" as often as "OWNER".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STUDENT" => Ok(Role::Student),
            "OWNER" => Ok(Role::Owner),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

// Stored as TEXT ('STUDENT' | 'OWNER' | 'ADMIN').

impl sqlx::Type<Postgres> for Role {
    fn type_info() -> PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl sqlx::Encode<'_, Postgres> for Role {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&str as sqlx::Encode<Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl sqlx::Decode<'_, Postgres> for Role {
    fn decode(value: PgValueRef<'_>) -> Result<Self, BoxDynError> {
        let raw = <&str as sqlx::Decode<Postgres>>::decode(value)?;
        Ok(raw.parse::<Role>()?)
    }
}

/// The resolved identity for one request.
///
/// Built only from a validated credential; fields are private so nothing downstream can
/// promote a principal to a different role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    subject: String,
    role: Role,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Principal {
    pub fn new(
        subject: impl Into<String>,
        role: Role,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            subject: subject.into(),
            role,
            issued_at,
            expires_at,
        }
    }

    /// The account email the credential was issued for.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("owner".parse::<Role>().unwrap(), Role::Owner);
        assert_eq!(" Student ".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        let err = "chef".parse::<Role>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid role: chef");
    }

    #[test]
    fn test_role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"OWNER\"");
    }
}
