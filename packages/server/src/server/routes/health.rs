use axum::{extract::Extension, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::time::Duration;

use crate::server::app::AxumAppState;

const BANNER: &str = "Campus Eats API is running";

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    database: DatabaseHealth,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/test", get(test_handler))
        .route("/api/test/auth", get(auth_test_handler))
}

pub async fn root_handler() -> &'static str {
    BANNER
}

/// Health check endpoint
///
/// Returns 200 OK when the store answers within five seconds, 503 Service Unavailable
/// otherwise.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = match tokio::time::timeout(
        Duration::from_secs(5),
        state.server_deps.users.ping(),
    )
    .await
    {
        Ok(Ok(())) => DatabaseHealth {
            status: "ok".to_string(),
            error: None,
        },
        Ok(Err(e)) => DatabaseHealth {
            status: "error".to_string(),
            error: Some(format!("Query failed: {}", e)),
        },
        Err(_) => DatabaseHealth {
            status: "error".to_string(),
            error: Some("Query timeout (>5s)".to_string()),
        },
    };

    let healthy = database.status == "ok";
    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
            database,
        }),
    )
}

pub async fn test_handler() -> &'static str {
    tracing::debug!("Test endpoint called");
    "Backend is working"
}

pub async fn auth_test_handler() -> &'static str {
    tracing::debug!("Auth test endpoint called");
    "Auth test endpoint is working"
}
