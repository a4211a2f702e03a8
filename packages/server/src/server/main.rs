// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use campus_eats::domains::auth::actions::ensure_default_admin;
use campus_eats::domains::auth::JwtService;
use campus_eats::kernel::ServerDeps;
use campus_eats::{server::build_app, Config};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,campus_eats=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Campus Eats API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt_secret,
        config.jwt_issuer.clone(),
        chrono::Duration::seconds(config.jwt_ttl_secs),
    ));
    let server_deps = ServerDeps::postgres(pool, jwt_service);

    // Seed the administrator account on first boot
    ensure_default_admin(&config.admin_seed, &server_deps)
        .await
        .context("Failed to ensure default admin")?;

    // Build application
    let app = build_app(server_deps, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
