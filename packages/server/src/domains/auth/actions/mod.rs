//! Auth domain actions - business logic functions
//!
//! Actions are async functions called directly from the HTTP handlers.

mod admin;
mod bootstrap;
mod login;
mod register;

pub use admin::{delete_user, list_users};
pub use bootstrap::ensure_default_admin;
pub use login::login_user;
pub use register::register_user;
