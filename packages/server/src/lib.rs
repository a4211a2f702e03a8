// Campus Eats - API Core
//
// Backend for the campus food-ordering marketplace (students, restaurant owners, admins).
// The interesting part is the auth layer: token issuance/validation, per-request principal
// resolution, role and ownership checks, and the restaurant approval workflow.
// Everything else is store plumbing behind the traits in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
