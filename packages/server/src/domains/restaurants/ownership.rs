use crate::common::{Actor, AppError, Capability, RestaurantId};
use crate::domains::restaurants::models::Restaurant;
use crate::kernel::ServerDeps;

/// Load a restaurant the actor owns. Missing is NotFound; someone else's is Forbidden.
pub async fn load_owned_restaurant(
    restaurant_id: RestaurantId,
    actor: &Actor,
    deps: &ServerDeps,
) -> Result<Restaurant, AppError> {
    let restaurant = deps
        .restaurants
        .find_restaurant(restaurant_id)
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant"))?;

    actor.can(Capability::Own(restaurant.owner_id)).check()?;

    Ok(restaurant)
}
