//! Dish query actions

use crate::common::auth::guard;
use crate::common::{Actor, AppError, Principal, RestaurantId, Role};
use crate::domains::dishes::data::DishData;
use crate::domains::dishes::models::{DishFilter, DishVisibility};
use crate::domains::restaurants::ownership::load_owned_restaurant;
use crate::kernel::ServerDeps;

/// Dishes cheaper than this count as popular
pub const POPULAR_PRICE_LIMIT: f64 = 150.0;

/// The public dish searches. All of them are limited to approved restaurants.
#[derive(Debug, Clone, PartialEq)]
pub enum DishQuery {
    All,
    Budget { max_price: f64 },
    Category { category: String },
    Available,
    /// Available and under `POPULAR_PRICE_LIMIT`, cheapest first
    Popular,
    PriceRange { min_price: f64, max_price: f64 },
    BudgetCategory { max_price: f64, category: String },
    BudgetTiming { max_price: f64, timing: String },
    CategoryTiming { category: String, timing: String },
    Restaurant { name: String },
}

impl DishQuery {
    pub fn into_filter(self) -> DishFilter {
        let base = DishFilter {
            visibility: DishVisibility::ApprovedOnly,
            ..Default::default()
        };

        match self {
            DishQuery::All => base,
            DishQuery::Budget { max_price } => DishFilter {
                max_price: Some(max_price),
                ..base
            },
            DishQuery::Category { category } => DishFilter {
                category: Some(category),
                ..base
            },
            DishQuery::Available => DishFilter {
                available_only: true,
                ..base
            },
            DishQuery::Popular => DishFilter {
                available_only: true,
                price_below: Some(POPULAR_PRICE_LIMIT),
                cheapest_first: true,
                ..base
            },
            DishQuery::PriceRange {
                min_price,
                max_price,
            } => DishFilter {
                min_price: Some(min_price),
                max_price: Some(max_price),
                ..base
            },
            DishQuery::BudgetCategory {
                max_price,
                category,
            } => DishFilter {
                max_price: Some(max_price),
                category: Some(category),
                ..base
            },
            DishQuery::BudgetTiming { max_price, timing } => DishFilter {
                max_price: Some(max_price),
                timing: Some(timing),
                ..base
            },
            DishQuery::CategoryTiming { category, timing } => DishFilter {
                category: Some(category),
                timing: Some(timing),
                ..base
            },
            DishQuery::Restaurant { name } => DishFilter {
                restaurant_name: Some(name),
                ..base
            },
        }
    }
}

pub async fn search_dishes(query: DishQuery, deps: &ServerDeps) -> Result<Vec<DishData>, AppError> {
    if let DishQuery::PriceRange {
        min_price,
        max_price,
    } = query
    {
        if min_price > max_price {
            return Err(AppError::Validation(
                "minPrice must not exceed maxPrice".to_string(),
            ));
        }
    }

    let dishes = deps.dishes.search_dishes(&query.into_filter()).await?;
    Ok(dishes.into_iter().map(Into::into).collect())
}

/// Owner view of one of their restaurants' menus, regardless of approval status
pub async fn restaurant_dishes(
    restaurant_id: RestaurantId,
    principal: &Principal,
    deps: &ServerDeps,
) -> Result<Vec<DishData>, AppError> {
    guard::require_role(Some(principal), Role::Owner)?;
    let actor = Actor::resolve(principal, deps.users.as_ref()).await?;
    let restaurant = load_owned_restaurant(restaurant_id, &actor, deps).await?;

    let filter = DishFilter {
        visibility: DishVisibility::Unfiltered,
        restaurant_id: Some(restaurant.id),
        ..Default::default()
    };
    let dishes = deps.dishes.search_dishes(&filter).await?;
    Ok(dishes.into_iter().map(Into::into).collect())
}
