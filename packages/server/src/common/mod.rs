// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod errors;
pub mod id;
pub mod sql;

pub use auth::{Actor, AuthError, Capability, Denial, Principal, Role};
pub use entity_ids::*;
pub use errors::AppError;
pub use id::Id;
