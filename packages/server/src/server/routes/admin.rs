use axum::{
    extract::Extension,
    routing::{delete, get, post},
    Json, Router,
};

use crate::common::{AppError, RestaurantId, UserId};
use crate::domains::auth::actions as auth_actions;
use crate::domains::auth::data::{UserData, UserDeletedData};
use crate::domains::restaurants::actions as restaurant_actions;
use crate::domains::restaurants::data::{AdminRestaurantData, ApprovalData};
use crate::server::app::AxumAppState;
use crate::server::extractors::{ApiPath, CurrentPrincipal};

pub fn router() -> Router {
    Router::new()
        .route("/restaurants/pending", get(pending_restaurants_handler))
        .route("/restaurants", get(all_restaurants_handler))
        .route("/restaurants/:restaurant_id/approve", post(approve_handler))
        .route("/restaurants/:restaurant_id/reject", post(reject_handler))
        .route("/users", get(list_users_handler))
        .route("/users/:user_id", delete(delete_user_handler))
}

pub async fn pending_restaurants_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<AdminRestaurantData>>, AppError> {
    Ok(Json(
        restaurant_actions::pending_restaurants(&principal, &state.server_deps).await?,
    ))
}

pub async fn all_restaurants_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<AdminRestaurantData>>, AppError> {
    Ok(Json(
        restaurant_actions::all_restaurants(&principal, &state.server_deps).await?,
    ))
}

pub async fn approve_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ApiPath(restaurant_id): ApiPath<RestaurantId>,
) -> Result<Json<ApprovalData>, AppError> {
    Ok(Json(
        restaurant_actions::approve_restaurant(restaurant_id, &principal, &state.server_deps)
            .await?,
    ))
}

pub async fn reject_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ApiPath(restaurant_id): ApiPath<RestaurantId>,
) -> Result<Json<ApprovalData>, AppError> {
    Ok(Json(
        restaurant_actions::reject_restaurant(restaurant_id, &principal, &state.server_deps)
            .await?,
    ))
}

pub async fn list_users_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<UserData>>, AppError> {
    Ok(Json(
        auth_actions::list_users(&principal, &state.server_deps).await?,
    ))
}

pub async fn delete_user_handler(
    Extension(state): Extension<AxumAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    ApiPath(user_id): ApiPath<UserId>,
) -> Result<Json<UserDeletedData>, AppError> {
    Ok(Json(
        auth_actions::delete_user(user_id, &principal, &state.server_deps).await?,
    ))
}
