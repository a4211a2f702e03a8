//! Login action

use tracing::{debug, info};

use crate::common::AppError;
use crate::domains::auth::data::{IssuanceData, LoginInput, UserData};
use crate::domains::auth::password::verify_password;
use crate::kernel::ServerDeps;

/// Same message for unknown email and wrong password
const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn login_user(input: LoginInput, deps: &ServerDeps) -> Result<IssuanceData, AppError> {
    let email = input.email.trim();

    let Some(user) = deps.users.find_by_email(email).await? else {
        debug!("Login for unknown email");
        return Err(AppError::Unauthenticated(INVALID_CREDENTIALS.to_string()));
    };

    if !verify_password(&deps.password_hasher, &input.password, &user.password_hash).await? {
        debug!(user_id = %user.id, "Login with wrong password");
        return Err(AppError::Unauthenticated(INVALID_CREDENTIALS.to_string()));
    }

    let token = deps.jwt_service.issue(&user.email, user.role)?;

    info!(user_id = %user.id, role = %user.role, "User logged in");

    Ok(IssuanceData {
        token,
        user: UserData::from(&user),
        message: "Login successful".to_string(),
    })
}
