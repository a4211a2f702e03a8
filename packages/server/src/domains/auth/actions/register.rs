//! Register action

use tracing::info;

use crate::common::auth::ParseRoleError;
use crate::common::{AppError, Role};
use crate::domains::auth::data::{IssuanceData, RegisterInput, UserData};
use crate::domains::auth::models::User;
use crate::domains::auth::password::hash_password;
use crate::kernel::{ServerDeps, StoreError};

const DUPLICATE_EMAIL: &str = "User already exists with this email";

/// Create an account and hand back a credential for it.
///
/// Owners must leave a phone number. Administrator accounts are only ever seeded, never
/// self-registered.
pub async fn register_user(input: RegisterInput, deps: &ServerDeps) -> Result<IssuanceData, AppError> {
    let email = input.email.trim().to_string();
    if email.is_empty() || input.password.is_empty() || input.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Email, password and name are required".to_string(),
        ));
    }

    if deps.users.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
    }

    let role: Role = input
        .role
        .parse()
        .map_err(|e: ParseRoleError| AppError::Validation(e.to_string()))?;

    let phone_number = input
        .phone_number
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());

    match role {
        Role::Owner if phone_number.is_none() => {
            return Err(AppError::Validation(
                "Phone number is required for restaurant owners".to_string(),
            ));
        }
        Role::Admin => {
            return Err(AppError::Forbidden(
                "Administrator accounts cannot be self-registered".to_string(),
            ));
        }
        _ => {}
    }

    let password_hash = hash_password(&deps.password_hasher, &input.password).await?;
    let user = User::new(input.name, email, password_hash, role, phone_number);

    // The pre-check above races with concurrent registrations; the unique constraint decides
    let user = deps.users.insert_user(user).await.map_err(|e| match e {
        StoreError::UniqueViolation(_) => AppError::Conflict(DUPLICATE_EMAIL.to_string()),
        other => other.into(),
    })?;

    let token = deps.jwt_service.issue(&user.email, user.role)?;

    info!(user_id = %user.id, role = %user.role, "User registered");

    Ok(IssuanceData {
        token,
        user: UserData::from(&user),
        message: "Registration successful".to_string(),
    })
}
