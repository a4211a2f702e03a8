use axum::{
    extract::Extension,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};

use crate::common::{AppError, AuthError};
use crate::domains::auth::actions;
use crate::domains::auth::data::{IssuanceData, LoginInput, RegisterInput, TokenCheckData};
use crate::server::app::AxumAppState;
use crate::server::extractors::ApiJson;
use crate::server::middleware::resolve_principal;

pub fn router() -> Router {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/test-token", get(test_token_handler))
}

pub async fn register_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(input): ApiJson<RegisterInput>,
) -> Result<Json<IssuanceData>, AppError> {
    Ok(Json(actions::register_user(input, &state.server_deps).await?))
}

pub async fn login_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(input): ApiJson<LoginInput>,
) -> Result<Json<IssuanceData>, AppError> {
    Ok(Json(actions::login_user(input, &state.server_deps).await?))
}

/// Validates the caller's own bearer credential.
///
/// `/api/auth/` is never touched by the resolver middleware, so the header is read here.
pub async fn test_token_handler(
    Extension(state): Extension<AxumAppState>,
    headers: HeaderMap,
) -> Result<Json<TokenCheckData>, AppError> {
    let principal = resolve_principal(&headers, &state.server_deps.jwt_service)?
        .ok_or(AuthError::AuthenticationRequired)?;

    Ok(Json(TokenCheckData {
        message: "Token is valid".to_string(),
        email: principal.subject().to_string(),
        role: principal.role(),
        is_valid: true,
    }))
}
