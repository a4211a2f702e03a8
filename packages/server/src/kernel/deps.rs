//! Server dependencies for actions (using traits for testability)
//!
//! Every store sits behind a trait so the same actions run against Postgres in production
//! and against `InMemoryStore` in tests.

use sqlx::PgPool;
use std::sync::Arc;

use crate::domains::auth::{Argon2PasswordHasher, JwtService};
use crate::kernel::{
    BaseDishStore, BaseFeedbackStore, BasePasswordHasher, BaseRestaurantStore, BaseUserDirectory,
    InMemoryStore, PostgresStore,
};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub users: Arc<dyn BaseUserDirectory>,
    pub restaurants: Arc<dyn BaseRestaurantStore>,
    pub dishes: Arc<dyn BaseDishStore>,
    pub feedback: Arc<dyn BaseFeedbackStore>,
    pub password_hasher: Arc<dyn BasePasswordHasher>,
    /// JWT service for token issuance and validation
    pub jwt_service: Arc<JwtService>,
}

impl ServerDeps {
    /// Production wiring: one Postgres store behind every trait
    pub fn postgres(pool: PgPool, jwt_service: Arc<JwtService>) -> Self {
        let store = Arc::new(PostgresStore::new(pool));
        Self {
            users: store.clone(),
            restaurants: store.clone(),
            dishes: store.clone(),
            feedback: store,
            password_hasher: Arc::new(Argon2PasswordHasher),
            jwt_service,
        }
    }

    /// Everything in memory; hashing is pluggable so tests can skip Argon2's cost
    pub fn in_memory(
        store: Arc<InMemoryStore>,
        password_hasher: Arc<dyn BasePasswordHasher>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            users: store.clone(),
            restaurants: store.clone(),
            dishes: store.clone(),
            feedback: store,
            password_hasher,
            jwt_service,
        }
    }
}
