//! Owner endpoints. The route table already requires the OWNER role; the actions recheck
//! it and resolve ownership of the restaurant or dish being touched.

use axum::{
    extract::Extension,
    routing::{get, put},
    Json, Router,
};

use crate::common::{AppError, DishId, RestaurantId};
use crate::domains::dishes::actions as dish_actions;
use crate::domains::dishes::data::{DishChangedData, DishData, DishInput, UpdateDishInput};
use crate::domains::restaurants::actions as restaurant_actions;
use crate::domains::restaurants::data::{RestaurantCreatedData, RestaurantData, RestaurantInput};
use crate::server::app::AxumAppState;
use crate::server::extractors::{ApiJson, ApiPath, CurrentPrincipal};

pub fn router() -> Router {
    Router::new()
        .route(
            "/restaurants",
            get(my_restaurants_handler).post(create_restaurant_handler),
        )
        .route(
            "/restaurants/:restaurant_id/dishes",
            get(restaurant_dishes_handler).post(add_dish_handler),
        )
        .route(
            "/dishes/:dish_id",
            put(update_dish_handler).delete(delete_dish_handler),
        )
}

pub async fn create_restaurant_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ApiJson(input): ApiJson<RestaurantInput>,
) -> Result<Json<RestaurantCreatedData>, AppError> {
    Ok(Json(
        restaurant_actions::create_restaurant(input, &principal, &state.server_deps).await?,
    ))
}

pub async fn my_restaurants_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<RestaurantData>>, AppError> {
    Ok(Json(
        restaurant_actions::my_restaurants(&principal, &state.server_deps).await?,
    ))
}

pub async fn add_dish_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ApiPath(restaurant_id): ApiPath<RestaurantId>,
    ApiJson(input): ApiJson<DishInput>,
) -> Result<Json<DishChangedData>, AppError> {
    Ok(Json(
        dish_actions::add_dish(restaurant_id, input, &principal, &state.server_deps).await?,
    ))
}

pub async fn restaurant_dishes_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ApiPath(restaurant_id): ApiPath<RestaurantId>,
) -> Result<Json<Vec<DishData>>, AppError> {
    Ok(Json(
        dish_actions::restaurant_dishes(restaurant_id, &principal, &state.server_deps).await?,
    ))
}

pub async fn update_dish_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ApiPath(dish_id): ApiPath<DishId>,
    ApiJson(input): ApiJson<UpdateDishInput>,
) -> Result<Json<DishChangedData>, AppError> {
    Ok(Json(
        dish_actions::update_dish(dish_id, input, &principal, &state.server_deps).await?,
    ))
}

pub async fn delete_dish_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ApiPath(dish_id): ApiPath<DishId>,
) -> Result<Json<DishChangedData>, AppError> {
    Ok(Json(
        dish_actions::delete_dish(dish_id, &principal, &state.server_deps).await?,
    ))
}
