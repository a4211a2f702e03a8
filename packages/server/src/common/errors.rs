use super::AuthError;
use crate::domains::auth::TokenError;
use crate::domains::restaurants::ApprovalError;
use crate::kernel::StoreError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use thiserror::Error;
use tracing::debug;

/// Every failure a request can end in. Rendered as `{ "error": ... }` by the HTTP layer.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("{} not found", what))
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationRequired => AppError::Unauthenticated(err.to_string()),
            AuthError::Forbidden(_) => AppError::Forbidden(err.to_string()),
        }
    }
}

/// Token failures all collapse to 401; the kind only matters for logs.
impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::Unauthenticated(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(constraint) => {
                debug!(constraint = %constraint, "Unique constraint violated");
                AppError::Conflict("Resource already exists".to_string())
            }
            StoreError::Other(e) => AppError::Internal(e),
        }
    }
}

impl From<ApprovalError> for AppError {
    fn from(err: ApprovalError) -> Self {
        AppError::Conflict(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Denial, Role};

    #[test]
    fn test_auth_errors_keep_401_403_split() {
        assert!(matches!(
            AppError::from(AuthError::AuthenticationRequired),
            AppError::Unauthenticated(_)
        ));
        assert!(matches!(
            AppError::from(AuthError::Forbidden(Denial::WrongRole {
                required: Role::Admin,
                actual: Role::Owner
            })),
            AppError::Forbidden(_)
        ));
    }

    #[test]
    fn test_unique_violation_is_conflict() {
        let err = AppError::from(StoreError::UniqueViolation("users_email_key".into()));
        assert!(matches!(&err, AppError::Conflict(msg) if msg == "Resource already exists"));
        assert!(!err.to_string().contains("users_email_key"));
    }
}
