// HTTP server setup (Axum)
pub mod access;
pub mod app;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

pub use access::{Access, PathPattern, RouteTable};
pub use app::*;
