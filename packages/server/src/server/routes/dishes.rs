//! Public dish searches. Every query only sees dishes of approved restaurants.

use axum::{extract::Extension, routing::get, Json, Router};
use serde::Deserialize;

use crate::common::AppError;
use crate::domains::dishes::actions::{self, DishQuery};
use crate::domains::dishes::data::DishData;
use crate::server::app::AxumAppState;
use crate::server::extractors::{ApiPath, ApiQuery};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeParams {
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategoryParams {
    pub max_price: f64,
    pub category: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTimingParams {
    pub max_price: f64,
    pub timing: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryTimingParams {
    pub category: String,
    pub timing: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/all", get(all_handler))
        .route("/budget/:max_price", get(budget_handler))
        .route("/category/:category", get(category_handler))
        .route("/available", get(available_handler))
        .route("/popular", get(popular_handler))
        .route("/price-range", get(price_range_handler))
        .route("/search/budget-category", get(budget_category_handler))
        .route("/search/budget-timing", get(budget_timing_handler))
        .route("/search/category-timing", get(category_timing_handler))
        .route("/restaurant/:restaurant_name", get(restaurant_handler))
}

async fn run(state: &AxumAppState, query: DishQuery) -> Result<Json<Vec<DishData>>, AppError> {
    Ok(Json(actions::search_dishes(query, &state.server_deps).await?))
}

pub async fn all_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<DishData>>, AppError> {
    run(&state, DishQuery::All).await
}

pub async fn budget_handler(
    Extension(state): Extension<AxumAppState>,
    ApiPath(max_price): ApiPath<f64>,
) -> Result<Json<Vec<DishData>>, AppError> {
    run(&state, DishQuery::Budget { max_price }).await
}

pub async fn category_handler(
    Extension(state): Extension<AxumAppState>,
    ApiPath(category): ApiPath<String>,
) -> Result<Json<Vec<DishData>>, AppError> {
    run(&state, DishQuery::Category { category }).await
}

pub async fn available_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<DishData>>, AppError> {
    run(&state, DishQuery::Available).await
}

pub async fn popular_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<DishData>>, AppError> {
    run(&state, DishQuery::Popular).await
}

pub async fn price_range_handler(
    Extension(state): Extension<AxumAppState>,
    ApiQuery(params): ApiQuery<PriceRangeParams>,
) -> Result<Json<Vec<DishData>>, AppError> {
    run(
        &state,
        DishQuery::PriceRange {
            min_price: params.min_price,
            max_price: params.max_price,
        },
    )
    .await
}

pub async fn budget_category_handler(
    Extension(state): Extension<AxumAppState>,
    ApiQuery(params): ApiQuery<BudgetCategoryParams>,
) -> Result<Json<Vec<DishData>>, AppError> {
    run(
        &state,
        DishQuery::BudgetCategory {
            max_price: params.max_price,
            category: params.category,
        },
    )
    .await
}

pub async fn budget_timing_handler(
    Extension(state): Extension<AxumAppState>,
    ApiQuery(params): ApiQuery<BudgetTimingParams>,
) -> Result<Json<Vec<DishData>>, AppError> {
    run(
        &state,
        DishQuery::BudgetTiming {
            max_price: params.max_price,
            timing: params.timing,
        },
    )
    .await
}

pub async fn category_timing_handler(
    Extension(state): Extension<AxumAppState>,
    ApiQuery(params): ApiQuery<CategoryTimingParams>,
) -> Result<Json<Vec<DishData>>, AppError> {
    run(
        &state,
        DishQuery::CategoryTiming {
            category: params.category,
            timing: params.timing,
        },
    )
    .await
}

pub async fn restaurant_handler(
    Extension(state): Extension<AxumAppState>,
    ApiPath(name): ApiPath<String>,
) -> Result<Json<Vec<DishData>>, AppError> {
    run(&state, DishQuery::Restaurant { name }).await
}
