use crate::common::Principal;
use crate::domains::auth::{JwtService, TokenError};
use crate::server::access::RouteTable;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum::{middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;

/// JWT authentication middleware
///
/// Extracts the bearer token from the Authorization header, validates it, and adds the
/// resulting `Principal` to request extensions. Missing or invalid tokens never fail the
/// request here: it continues anonymously and the access gate decides what that means.
/// Paths the route table marks anonymous are passed through without reading the header.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    routes: Arc<RouteTable>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if !routes.access_for(&path).reads_credentials() {
        return next.run(request).await;
    }

    match resolve_principal(request.headers(), &jwt_service) {
        Ok(Some(principal)) => {
            debug!(
                path = %path,
                subject = principal.subject(),
                role = %principal.role(),
                "Authenticated request"
            );
            request.extensions_mut().insert(principal);
        }
        Ok(None) => debug!(path = %path, "No bearer credential"),
        Err(e) => debug!(path = %path, error = %e, "Rejected bearer credential"),
    }

    next.run(request).await
}

/// Pull the token out of `Authorization: Bearer <token>`; any other scheme counts as absent
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// `Ok(None)` when there is no credential, `Err` when there is one and it is bad
pub fn resolve_principal(
    headers: &HeaderMap,
    jwt_service: &JwtService,
) -> Result<Option<Principal>, TokenError> {
    match bearer_token(headers) {
        Some(token) => jwt_service.resolve(token).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Role;
    use axum::http::HeaderValue;
    use chrono::Duration;

    fn service() -> JwtService {
        JwtService::new("test_secret", "test_issuer", Duration::days(30))
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let jwt_service = service();
        let token = jwt_service.issue("alice@x.com", Role::Owner).unwrap();

        let principal = resolve_principal(&headers(&format!("Bearer {}", token)), &jwt_service)
            .unwrap()
            .unwrap();
        assert_eq!(principal.subject(), "alice@x.com");
        assert_eq!(principal.role(), Role::Owner);
    }

    #[test]
    fn test_raw_token_without_scheme_is_ignored() {
        let jwt_service = service();
        let token = jwt_service.issue("alice@x.com", Role::Owner).unwrap();

        assert!(resolve_principal(&headers(&token), &jwt_service)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_other_scheme_is_ignored() {
        let jwt_service = service();
        assert!(resolve_principal(&headers("Basic YWxpY2U6cHc="), &jwt_service)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_no_auth_header() {
        let jwt_service = service();
        assert!(resolve_principal(&HeaderMap::new(), &jwt_service)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_invalid_token() {
        let jwt_service = service();
        let result = resolve_principal(&headers("Bearer invalid_token"), &jwt_service);
        assert_eq!(result.unwrap_err(), TokenError::Malformed);
    }
}
