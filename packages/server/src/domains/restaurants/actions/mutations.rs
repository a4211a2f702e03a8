//! Restaurant mutation actions
//!
//! Creation always lands in PENDING; only an admin decision moves a restaurant out of it.

use tracing::info;

use crate::common::auth::guard;
use crate::common::{Actor, AppError, Principal, RestaurantId, Role, UserId};
use crate::domains::restaurants::approval::{transition, ApprovalDecision, Transition};
use crate::domains::restaurants::data::{
    ApprovalData, RestaurantCreatedData, RestaurantData, RestaurantInput,
};
use crate::domains::restaurants::models::Restaurant;
use crate::kernel::ServerDeps;

fn build(input: RestaurantInput, owner_id: Option<UserId>) -> Result<Restaurant, AppError> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Restaurant name is required".to_string()));
    }
    Ok(Restaurant::new(
        owner_id,
        name,
        input.address,
        input.opening_time,
        input.closing_time,
    ))
}

/// Owner adds a restaurant under their own account
pub async fn create_restaurant(
    input: RestaurantInput,
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<RestaurantCreatedData, AppError> {
    guard::require_role(Some(principal), Role::Owner)?;
    let actor = Actor::resolve(principal, deps.users.as_ref()).await?;

    let restaurant = build(input, Some(actor.user_id()))?;
    let restaurant = deps.restaurants.insert_restaurant(restaurant).await?;

    info!(restaurant_id = %restaurant.id, owner_id = %actor.user_id(), "Restaurant created (pending)");

    Ok(RestaurantCreatedData {
        message: "Restaurant added successfully".to_string(),
        restaurant: restaurant.into(),
    })
}

/// Anonymous registration; the restaurant has no owner account
pub async fn register_restaurant(
    input: RestaurantInput,
    deps: &ServerDeps,
) -> Result<RestaurantData, AppError> {
    let restaurant = build(input, None)?;
    let restaurant = deps.restaurants.insert_restaurant(restaurant).await?;

    info!(restaurant_id = %restaurant.id, "Ownerless restaurant registered (pending)");

    Ok(restaurant.into())
}

pub async fn approve_restaurant(
    restaurant_id: RestaurantId,
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<ApprovalData, AppError> {
    decide(restaurant_id, ApprovalDecision::Approve, principal, deps).await
}

pub async fn reject_restaurant(
    restaurant_id: RestaurantId,
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<ApprovalData, AppError> {
    decide(restaurant_id, ApprovalDecision::Reject, principal, deps).await
}

/// Read, decide, write. Concurrent decisions are last-writer-wins.
async fn decide(
    restaurant_id: RestaurantId,
    decision: ApprovalDecision,
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<ApprovalData, AppError> {
    guard::require_role(Some(principal), Role::Admin)?;

    let restaurant = deps
        .restaurants
        .find_restaurant(restaurant_id)
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant"))?;

    let restaurant = match transition(restaurant.status, decision)? {
        Transition::Applied { from, to } => {
            let updated = deps
                .restaurants
                .set_restaurant_status(restaurant.id, to)
                .await?
                .ok_or_else(|| AppError::not_found("Restaurant"))?;
            info!(
                restaurant_id = %updated.id,
                from = %from,
                to = %to,
                by = %principal.subject(),
                "Restaurant status changed"
            );
            updated
        }
        Transition::Unchanged(status) => {
            info!(restaurant_id = %restaurant.id, status = %status, "Restaurant already in requested state");
            restaurant
        }
    };

    let message = match decision {
        ApprovalDecision::Approve => format!("Restaurant approved successfully: {}", restaurant.name),
        ApprovalDecision::Reject => format!("Restaurant rejected: {}", restaurant.name),
    };

    Ok(ApprovalData {
        message,
        restaurant_id: restaurant.id,
        restaurant_name: restaurant.name,
        status: restaurant.status,
    })
}
