use serde::{Deserialize, Serialize};

use crate::common::{Role, UserId};
use crate::domains::auth::models::User;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    /// Free text so an unknown role is a validation error rather than a JSON rejection
    pub role: String,
    pub name: String,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Public view of an account; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub name: String,
    pub phone_number: Option<String>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            name: user.name.clone(),
            phone_number: user.phone_number.clone(),
        }
    }
}

/// Response to a successful register or login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuanceData {
    pub token: String,
    pub user: UserData,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCheckData {
    pub message: String,
    pub email: String,
    pub role: Role,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDeletedData {
    pub message: String,
    pub deleted_user_id: UserId,
}
