use crate::common::{Actor, AppError, Capability, DishId};
use crate::domains::dishes::models::Dish;
use crate::domains::restaurants::models::Restaurant;
use crate::kernel::ServerDeps;

/// Walk dish -> restaurant -> owner and require the actor at the end of the chain.
///
/// A dish whose restaurant row is gone is treated as missing.
pub async fn load_owned_dish(
    dish_id: DishId,
    actor: &Actor,
    deps: &ServerDeps,
) -> Result<(Dish, Restaurant), AppError> {
    let dish = deps
        .dishes
        .find_dish(dish_id)
        .await?
        .ok_or_else(|| AppError::not_found("Dish"))?;

    let restaurant = deps
        .restaurants
        .find_restaurant(dish.restaurant_id)
        .await?
        .ok_or_else(|| AppError::not_found("Dish"))?;

    actor.can(Capability::Own(restaurant.owner_id)).check()?;

    Ok((dish, restaurant))
}
