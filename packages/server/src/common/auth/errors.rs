use super::Role;
use thiserror::Error;

/// Why an authenticated principal was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    WrongRole { required: Role, actual: Role },
    NotOwner,
}

impl std::fmt::Display for Denial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Denial::WrongRole { required, .. } => write!(f, "{} role required", required),
            Denial::NotOwner => write!(f, "You do not own this resource"),
        }
    }
}

/// Authorization errors.
///
/// `AuthenticationRequired` means there is no principal at all; `Forbidden` means there is one
/// and it is not enough. The HTTP layer keeps the two apart (401 vs 403).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Access denied: {0}")]
    Forbidden(Denial),
}
