//! Submit feedback action

use tracing::info;

use crate::common::auth::guard;
use crate::common::{Actor, AppError, DishId, Principal, Role};
use crate::domains::feedback::data::{FeedbackInput, FeedbackSubmittedData};
use crate::domains::feedback::models::{Feedback, MAX_COMMENT_LEN, MAX_RATING, MIN_RATING};
use crate::kernel::{ServerDeps, StoreError};

const ALREADY_RATED: &str = "You have already given feedback for this dish";

pub fn validate_rating(rating: i32) -> Result<(), AppError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::Validation(format!(
            "Rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        )));
    }
    Ok(())
}

/// One rating per student per dish.
///
/// Checks run in order: role, rating bounds, dish exists, no earlier rating. The insert
/// itself is guarded by the (student, dish) unique constraint, which also maps to Conflict.
pub async fn submit_feedback(
    dish_id: DishId,
    input: FeedbackInput,
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<FeedbackSubmittedData, AppError> {
    guard::require_role(Some(principal), Role::Student)?;
    validate_rating(input.rating)?;

    let comment = input
        .comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    if comment
        .as_ref()
        .is_some_and(|c| c.chars().count() > MAX_COMMENT_LEN)
    {
        return Err(AppError::Validation(format!(
            "Comment must be at most {} characters",
            MAX_COMMENT_LEN
        )));
    }

    let actor = Actor::resolve(principal, deps.users.as_ref()).await?;

    let dish = deps
        .dishes
        .find_dish(dish_id)
        .await?
        .ok_or_else(|| AppError::not_found("Dish"))?;

    if deps.feedback.feedback_exists(actor.user_id(), dish.id).await? {
        return Err(AppError::Conflict(ALREADY_RATED.to_string()));
    }

    let feedback = Feedback::new(actor.user_id(), dish.id, input.rating, comment);
    let feedback = deps
        .feedback
        .insert_feedback(feedback)
        .await
        .map_err(|e| match e {
            StoreError::UniqueViolation(_) => AppError::Conflict(ALREADY_RATED.to_string()),
            other => other.into(),
        })?;

    info!(
        feedback_id = %feedback.id,
        dish_id = %dish.id,
        student_id = %actor.user_id(),
        rating = feedback.rating,
        "Feedback submitted"
    );

    Ok(FeedbackSubmittedData {
        message: "Feedback submitted successfully".to_string(),
        feedback_id: feedback.id,
        rating: feedback.rating,
    })
}
