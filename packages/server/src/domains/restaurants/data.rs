use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{RestaurantId, UserId};
use crate::domains::auth::models::User;
use crate::domains::restaurants::models::{Restaurant, RestaurantStatus};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantInput {
    pub name: String,
    pub address: Option<String>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantData {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub address: Option<String>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub status: RestaurantStatus,
    pub owner_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl From<Restaurant> for RestaurantData {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            restaurant_id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            opening_time: restaurant.opening_time,
            closing_time: restaurant.closing_time,
            status: restaurant.status,
            owner_id: restaurant.owner_id,
            created_at: restaurant.created_at,
        }
    }
}

/// Owner contact details shown to admins
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnerInfo {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<&User> for OwnerInfo {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone_number.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminRestaurantData {
    #[serde(flatten)]
    pub restaurant: RestaurantData,
    pub owner: Option<OwnerInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreatedData {
    pub message: String,
    pub restaurant: RestaurantData,
}

/// Response to approve/reject
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalData {
    pub message: String,
    pub restaurant_id: RestaurantId,
    pub restaurant_name: String,
    pub status: RestaurantStatus,
}
