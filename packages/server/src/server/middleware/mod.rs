// HTTP middleware
pub mod access_gate;
pub mod jwt_auth;

pub use access_gate::*;
pub use jwt_auth::*;
