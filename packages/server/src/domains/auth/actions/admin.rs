//! Admin account management actions

use tracing::info;

use crate::common::auth::guard;
use crate::common::{AppError, Principal, Role, UserId};
use crate::domains::auth::data::{UserDeletedData, UserData};
use crate::kernel::ServerDeps;

pub async fn list_users(principal: &Principal, deps: &ServerDeps) -> Result<Vec<UserData>, AppError> {
    guard::require_role(Some(principal), Role::Admin)?;

    let users = deps.users.list_users().await?;
    Ok(users.iter().map(UserData::from).collect())
}

/// Delete a student or owner. An owner's restaurants, their dishes and all related feedback
/// go with them. Administrator accounts cannot be deleted.
pub async fn delete_user(
    user_id: UserId,
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<UserDeletedData, AppError> {
    guard::require_role(Some(principal), Role::Admin)?;

    let user = deps
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    if user.role == Role::Admin {
        return Err(AppError::Validation(
            "Cannot delete administrator account".to_string(),
        ));
    }

    if !deps.users.delete_user(user.id).await? {
        return Err(AppError::not_found("User"));
    }

    info!(user_id = %user.id, role = %user.role, by = %principal.subject(), "User deleted");

    Ok(UserDeletedData {
        message: format!("User deleted successfully: {}", user.name),
        deleted_user_id: user.id,
    })
}
