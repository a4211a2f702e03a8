//! Default administrator seeding

use tracing::info;

use crate::common::{AppError, Role};
use crate::config::AdminSeed;
use crate::domains::auth::models::User;
use crate::domains::auth::password::hash_password;
use crate::kernel::{ServerDeps, StoreError};

/// Create the seed administrator unless an account with its email already exists.
///
/// Safe to run on every boot. Returns true when an account was created.
pub async fn ensure_default_admin(seed: &AdminSeed, deps: &ServerDeps) -> Result<bool, AppError> {
    if deps.users.find_by_email(&seed.email).await?.is_some() {
        info!(email = %seed.email, "Default admin already present");
        return Ok(false);
    }

    let password_hash = hash_password(&deps.password_hasher, &seed.password).await?;
    let admin = User::new(
        seed.name.clone(),
        seed.email.clone(),
        password_hash,
        Role::Admin,
        None,
    );

    match deps.users.insert_user(admin).await {
        Ok(admin) => {
            info!(user_id = %admin.id, email = %admin.email, "Default admin created");
            Ok(true)
        }
        // Another instance seeded it between our read and write
        Err(StoreError::UniqueViolation(_)) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
