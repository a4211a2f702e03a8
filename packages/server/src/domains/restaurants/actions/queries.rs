//! Restaurant query actions
//!
//! Public reads only ever see APPROVED restaurants; owner and admin reads are unfiltered.

use std::collections::HashMap;

use crate::common::auth::guard;
use crate::common::{Actor, AppError, Principal, RestaurantId, Role, UserId};
use crate::domains::auth::models::User;
use crate::domains::restaurants::data::{AdminRestaurantData, OwnerInfo, RestaurantData};
use crate::domains::restaurants::models::{Restaurant, RestaurantStatus};
use crate::kernel::ServerDeps;

pub async fn my_restaurants(
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<Vec<RestaurantData>, AppError> {
    guard::require_role(Some(principal), Role::Owner)?;
    let actor = Actor::resolve(principal, deps.users.as_ref()).await?;

    let restaurants = deps.restaurants.restaurants_by_owner(actor.user_id()).await?;
    Ok(restaurants.into_iter().map(Into::into).collect())
}

/// Admin approval queue
pub async fn pending_restaurants(
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<Vec<AdminRestaurantData>, AppError> {
    guard::require_role(Some(principal), Role::Admin)?;

    let restaurants = deps
        .restaurants
        .restaurants_by_status(RestaurantStatus::Pending)
        .await?;
    with_owners(restaurants, deps).await
}

pub async fn all_restaurants(
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<Vec<AdminRestaurantData>, AppError> {
    guard::require_role(Some(principal), Role::Admin)?;

    let restaurants = deps.restaurants.all_restaurants().await?;
    with_owners(restaurants, deps).await
}

pub async fn approved_restaurants(deps: &ServerDeps) -> Result<Vec<RestaurantData>, AppError> {
    let restaurants = deps
        .restaurants
        .restaurants_by_status(RestaurantStatus::Approved)
        .await?;
    Ok(restaurants.into_iter().map(Into::into).collect())
}

/// A restaurant that is not approved does not exist as far as the public is concerned
pub async fn approved_restaurant(
    restaurant_id: RestaurantId,
    deps: &ServerDeps,
) -> Result<RestaurantData, AppError> {
    deps.restaurants
        .find_restaurant(restaurant_id)
        .await?
        .filter(Restaurant::is_approved)
        .map(Into::into)
        .ok_or_else(|| AppError::not_found("Restaurant"))
}

pub async fn search_restaurants(
    name: &str,
    deps: &ServerDeps,
) -> Result<Vec<RestaurantData>, AppError> {
    let restaurants = deps
        .restaurants
        .search_restaurants(name.trim(), RestaurantStatus::Approved)
        .await?;
    Ok(restaurants.into_iter().map(Into::into).collect())
}

/// Attach owner contact details, looking each owner up once
async fn with_owners(
    restaurants: Vec<Restaurant>,
    deps: &ServerDeps,
) -> Result<Vec<AdminRestaurantData>, AppError> {
    let mut owners: HashMap<UserId, Option<User>> = HashMap::new();
    let mut out = Vec::with_capacity(restaurants.len());

    for restaurant in restaurants {
        let owner = match restaurant.owner_id {
            Some(owner_id) => {
                if !owners.contains_key(&owner_id) {
                    let user = deps.users.find_by_id(owner_id).await?;
                    owners.insert(owner_id, user);
                }
                owners
                    .get(&owner_id)
                    .and_then(|user| user.as_ref())
                    .map(OwnerInfo::from)
            }
            None => None,
        };

        out.push(AdminRestaurantData {
            restaurant: restaurant.into(),
            owner,
        });
    }

    Ok(out)
}
