//! Feedback query actions

use crate::common::auth::guard;
use crate::common::{Actor, AppError, DishId, Principal, RestaurantId, Role};
use crate::domains::feedback::data::{DishRatingData, FeedbackData, RestaurantFeedbackData};
use crate::domains::restaurants::ownership::load_owned_restaurant;
use crate::kernel::ServerDeps;

/// Mean of the ratings rounded to one decimal; 0.0 when there are none
pub fn average_rating(ratings: impl IntoIterator<Item = i32>) -> f64 {
    let (sum, count) = ratings
        .into_iter()
        .fold((0i64, 0u32), |(sum, count), r| (sum + i64::from(r), count + 1));
    if count == 0 {
        return 0.0;
    }
    round_one_decimal(sum as f64 / f64::from(count))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub async fn my_feedback(
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<Vec<FeedbackData>, AppError> {
    guard::require_role(Some(principal), Role::Student)?;
    let actor = Actor::resolve(principal, deps.users.as_ref()).await?;

    let views = deps.feedback.feedback_by_student(actor.user_id()).await?;
    Ok(views.into_iter().map(FeedbackData::for_student).collect())
}

/// Feedback summary for one of the caller's restaurants
pub async fn restaurant_feedback(
    restaurant_id: RestaurantId,
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<RestaurantFeedbackData, AppError> {
    guard::require_role(Some(principal), Role::Owner)?;
    let actor = Actor::resolve(principal, deps.users.as_ref()).await?;
    let restaurant = load_owned_restaurant(restaurant_id, &actor, deps).await?;

    let views = deps.feedback.feedback_for_restaurant(restaurant.id).await?;
    let average = average_rating(views.iter().map(|v| v.feedback.rating));

    Ok(RestaurantFeedbackData {
        restaurant_name: restaurant.name,
        total_feedback: views.len(),
        average_rating: average,
        feedback: views.into_iter().map(FeedbackData::for_owner).collect(),
    })
}

pub async fn all_feedback(
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<Vec<FeedbackData>, AppError> {
    guard::require_role(Some(principal), Role::Admin)?;

    let views = deps.feedback.all_feedback().await?;
    Ok(views.into_iter().map(FeedbackData::full).collect())
}

/// Public rating summary for a dish
pub async fn dish_rating(dish_id: DishId, deps: &ServerDeps) -> Result<DishRatingData, AppError> {
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

    let feedback = deps.feedback.feedback_for_dish(dish.id).await?;

    Ok(DishRatingData {
        dish_id: dish.id,
        dish_name: dish.name,
        average_rating: average_rating(feedback.iter().map(|f| f.rating)),
        rating_count: feedback.len(),
        restaurant_name: restaurant.name,
    })
}
