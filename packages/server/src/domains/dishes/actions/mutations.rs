//! Dish mutation actions (owners only, ownership-checked)

use chrono::Utc;
use tracing::info;

use crate::common::auth::guard;
use crate::common::{Actor, AppError, DishId, Principal, RestaurantId, Role};
use crate::domains::dishes::data::{DishChangedData, DishInput, UpdateDishInput};
use crate::domains::dishes::models::Dish;
use crate::domains::dishes::ownership::load_owned_dish;
use crate::domains::restaurants::ownership::load_owned_restaurant;
use crate::kernel::ServerDeps;

fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::Validation(
            "Price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

async fn owner_actor(principal: &Principal, deps: &ServerDeps) -> Result<Actor, AppError> {
    guard::require_role(Some(principal), Role::Owner)?;
    Actor::resolve(principal, deps.users.as_ref()).await
}

/// Add a dish to one of the caller's restaurants. Allowed while the restaurant is still
/// pending; the dish only becomes publicly visible once it is approved.
pub async fn add_dish(
    restaurant_id: RestaurantId,
    input: DishInput,
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<DishChangedData, AppError> {
    let actor = owner_actor(principal, deps).await?;
    let restaurant = load_owned_restaurant(restaurant_id, &actor, deps).await?;

    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Dish name is required".to_string()));
    }
    validate_price(input.price)?;

    let dish = Dish {
        id: DishId::new(),
        restaurant_id: restaurant.id,
        name,
        category: input.category,
        price: input.price,
        quantity: input.quantity,
        availability: input.availability,
        notes: input.notes,
        created_at: Utc::now(),
    };
    let dish = deps.dishes.insert_dish(dish).await?;

    info!(dish_id = %dish.id, restaurant_id = %restaurant.id, "Dish added");

    Ok(DishChangedData {
        message: "Dish added successfully".to_string(),
        dish: Some(dish.into()),
    })
}

pub async fn update_dish(
    dish_id: DishId,
    input: UpdateDishInput,
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<DishChangedData, AppError> {
    let actor = owner_actor(principal, deps).await?;
    let (dish, _) = load_owned_dish(dish_id, &actor, deps).await?;

    if let Some(price) = input.price {
        validate_price(price)?;
    }
    if input.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::Validation("Dish name cannot be blank".to_string()));
    }

    let updated = deps
        .dishes
        .update_dish(dish.id, input.into())
        .await?
        .ok_or_else(|| AppError::not_found("Dish"))?;

    info!(dish_id = %updated.id, "Dish updated");

    Ok(DishChangedData {
        message: "Dish updated successfully".to_string(),
        dish: Some(updated.into()),
    })
}

pub async fn delete_dish(
    dish_id: DishId,
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<DishChangedData, AppError> {
    let actor = owner_actor(principal, deps).await?;
    let (dish, _) = load_owned_dish(dish_id, &actor, deps).await?;

    if !deps.dishes.delete_dish(dish.id).await? {
        return Err(AppError::not_found("Dish"));
    }

    info!(dish_id = %dish.id, "Dish deleted");

    Ok(DishChangedData {
        message: "Dish deleted successfully".to_string(),
        dish: None,
    })
}
