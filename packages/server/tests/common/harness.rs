//! Test harness for HTTP-level integration tests.
//!
//! Each test gets its own in-memory store and router, so tests never share state. The
//! seeded administrator from `AdminSeed::default()` is created on setup.

use std::sync::Arc;

use axum::Router;
use campus_eats::config::AdminSeed;
use campus_eats::domains::auth::actions::ensure_default_admin;
use campus_eats::domains::auth::JwtService;
use campus_eats::kernel::{InMemoryStore, MockPasswordHasher, ServerDeps};
use campus_eats::server::build_app;
use test_context::AsyncTestContext;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_ISSUER: &str = "campus-eats";

/// Test harness that owns a router wired to in-memory dependencies.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let response = ctx.get("/health", None).await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestHarness {
    pub app: Router,
    pub deps: ServerDeps,
    pub store: Arc<InMemoryStore>,
    pub jwt_service: Arc<JwtService>,
    pub admin_seed: AdminSeed,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await
    }

    async fn teardown(self) {
        // Store is dropped with the harness
    }
}

impl TestHarness {
    pub async fn new() -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let store = Arc::new(InMemoryStore::new());
        let jwt_service = Arc::new(JwtService::new(
            TEST_SECRET,
            TEST_ISSUER,
            chrono::Duration::days(30),
        ));
        let deps = ServerDeps::in_memory(
            store.clone(),
            Arc::new(MockPasswordHasher),
            jwt_service.clone(),
        );

        let admin_seed = AdminSeed::default();
        ensure_default_admin(&admin_seed, &deps)
            .await
            .expect("Failed to seed default admin");

        let app = build_app(deps.clone(), &["http://localhost:3000".to_string()]);

        Self {
            app,
            deps,
            store,
            jwt_service,
            admin_seed,
        }
    }
}
