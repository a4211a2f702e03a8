//! Auth domain - accounts, credentials and password handling
//!
//! Responsibilities:
//! - Registration and login (email + password, Argon2 hashes)
//! - JWT issuance and validation
//! - Default administrator seeding
//! - Admin-side account management

pub mod actions;
pub mod data;
pub mod jwt;
pub mod models;
pub mod password;

pub use jwt::{Claims, JwtService, TokenError};
pub use models::User;
pub use password::Argon2PasswordHasher;
