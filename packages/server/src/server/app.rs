//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware, Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::common::AppError;
use crate::kernel::ServerDeps;
use crate::server::access::RouteTable;
use crate::server::middleware::{access_gate_middleware, jwt_auth_middleware};
use crate::server::routes::{admin, auth, dishes, feedback, health, owner, restaurants};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub server_deps: Arc<ServerDeps>,
    pub routes: Arc<RouteTable>,
}

/// Build the Axum application router
pub fn build_app(server_deps: ServerDeps, allowed_origins: &[String]) -> Router {
    let routes = Arc::new(RouteTable::standard());
    let jwt_service = server_deps.jwt_service.clone();

    let app_state = AxumAppState {
        server_deps: Arc::new(server_deps),
        routes: routes.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(parse_origins(allowed_origins)))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true);

    let routes_for_resolver = routes.clone();
    let routes_for_gate = routes;

    Router::new()
        .merge(health::router())
        .nest("/api/auth", auth::router())
        .nest("/api/restaurants", restaurants::router())
        .nest("/api/dishes", dishes::router())
        .nest("/api/owner", owner::router())
        .nest("/api/admin", admin::router())
        .nest("/api/feedback", feedback::router())
        .fallback(not_found_handler)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            access_gate_middleware(routes_for_gate.clone(), req, next)
        })) // Route table enforcement
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), routes_for_resolver.clone(), req, next)
        })) // JWT authentication
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn not_found_handler() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}
