use crate::common::auth::guard;
use crate::common::{AppError, AuthError, Principal};
use crate::server::access::{Access, RouteTable};
use axum::{
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::warn;

/// Enforces the route table's requirement for the request path.
///
/// Runs after `jwt_auth_middleware`, so a `Principal` in extensions means the credential
/// was valid. Handlers still apply their own role and ownership checks.
pub async fn access_gate_middleware(
    routes: Arc<RouteTable>,
    request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let path = request.uri().path();
    let access = routes.access_for(path);
    let principal = request.extensions().get::<Principal>();

    if let Err(e) = check_access(access, principal) {
        match &e {
            AuthError::AuthenticationRequired => {
                warn!(path = %path, required = ?access, "Unauthenticated request refused")
            }
            AuthError::Forbidden(denial) => warn!(
                path = %path,
                subject = principal.map(Principal::subject).unwrap_or_default(),
                role = principal.map(|p| p.role().as_str()).unwrap_or_default(),
                required = ?access,
                error = %denial,
                "Request refused by route table"
            ),
        }
        return AppError::from(e).into_response();
    }

    next.run(request).await
}

pub fn check_access(access: Access, principal: Option<&Principal>) -> Result<(), AuthError> {
    match access {
        Access::Anonymous | Access::Public => Ok(()),
        Access::Authenticated => guard::require_principal(principal).map(|_| ()),
        Access::Role(role) => guard::require_role(principal, role).map(|_| ()),
    }
}
