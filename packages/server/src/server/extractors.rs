//! Request extractors shared by the route handlers

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query},
    http::request::Parts,
    Json,
};

use crate::common::{AppError, AuthError, Principal};

/// The principal resolved by `jwt_auth_middleware`; 401 when there is none
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(CurrentPrincipal)
            .ok_or_else(|| AuthError::AuthenticationRequired.into())
    }
}

/// The principal when one was resolved; never rejects
#[derive(Debug, Clone)]
pub struct MaybePrincipal(pub Option<Principal>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybePrincipal
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybePrincipal(parts.extensions.get::<Principal>().cloned()))
    }
}

/// `Json` whose rejection renders as `{ "error": ... }`
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `Path` whose rejection renders as `{ "error": ... }`
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `Query` whose rejection renders as `{ "error": ... }`
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
