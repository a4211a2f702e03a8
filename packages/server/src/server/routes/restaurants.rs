use axum::{
    extract::Extension,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::common::{AppError, RestaurantId};
use crate::domains::restaurants::actions;
use crate::domains::restaurants::data::{RestaurantData, RestaurantInput};
use crate::server::app::AxumAppState;
use crate::server::extractors::{ApiJson, ApiPath, ApiQuery};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/register", post(register_handler))
        .route("/approved", get(approved_handler))
        .route("/search", get(search_handler))
        .route("/:restaurant_id", get(restaurant_handler))
}

/// Public registration path; the restaurant has no owner and waits for approval
pub async fn register_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(input): ApiJson<RestaurantInput>,
) -> Result<Json<RestaurantData>, AppError> {
    Ok(Json(
        actions::register_restaurant(input, &state.server_deps).await?,
    ))
}

pub async fn approved_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<RestaurantData>>, AppError> {
    Ok(Json(actions::approved_restaurants(&state.server_deps).await?))
}

pub async fn search_handler(
    Extension(state): Extension<AxumAppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<Vec<RestaurantData>>, AppError> {
    Ok(Json(
        actions::search_restaurants(&params.name, &state.server_deps).await?,
    ))
}

pub async fn restaurant_handler(
    Extension(state): Extension<AxumAppState>,
    ApiPath(restaurant_id): ApiPath<RestaurantId>,
) -> Result<Json<RestaurantData>, AppError> {
    Ok(Json(
        actions::approved_restaurant(restaurant_id, &state.server_deps).await?,
    ))
}
