use axum::{
    extract::Extension,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use crate::common::{AppError, DishId, RestaurantId};
use crate::domains::feedback::actions;
use crate::domains::feedback::data::{
    DishRatingData, FeedbackData, FeedbackInput, FeedbackSubmittedData, RestaurantFeedbackData,
};
use crate::server::app::AxumAppState;
use crate::server::extractors::{ApiJson, ApiPath, CurrentPrincipal, MaybePrincipal};

pub fn router() -> Router {
    Router::new()
        .route("/student/dishes/:dish_id/add", post(submit_handler))
        .route("/student/my-feedback", get(my_feedback_handler))
        .route(
            "/owner/restaurants/:restaurant_id/feedback",
            get(restaurant_feedback_handler),
        )
        .route("/admin/all", get(all_feedback_handler))
        .route("/dishes/:dish_id/rating", get(dish_rating_handler))
}

pub async fn submit_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ApiPath(dish_id): ApiPath<DishId>,
    ApiJson(input): ApiJson<FeedbackInput>,
) -> Result<Json<FeedbackSubmittedData>, AppError> {
    Ok(Json(
        actions::submit_feedback(dish_id, input, &principal, &state.server_deps).await?,
    ))
}

pub async fn my_feedback_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<FeedbackData>>, AppError> {
    Ok(Json(
        actions::my_feedback(&principal, &state.server_deps).await?,
    ))
}

pub async fn restaurant_feedback_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ApiPath(restaurant_id): ApiPath<RestaurantId>,
) -> Result<Json<RestaurantFeedbackData>, AppError> {
    Ok(Json(
        actions::restaurant_feedback(restaurant_id, &principal, &state.server_deps).await?,
    ))
}

pub async fn all_feedback_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<FeedbackData>>, AppError> {
    Ok(Json(
        actions::all_feedback(&principal, &state.server_deps).await?,
    ))
}

pub async fn dish_rating_handler(
    Extension(state): Extension<AxumAppState>,
    MaybePrincipal(viewer): MaybePrincipal,
    ApiPath(dish_id): ApiPath<DishId>,
) -> Result<Json<DishRatingData>, AppError> {
    debug!(
        dish_id = %dish_id,
        viewer = viewer.as_ref().map(|p| p.subject()).unwrap_or("anonymous"),
        "Dish rating requested"
    );
    Ok(Json(actions::dish_rating(dish_id, &state.server_deps).await?))
}
