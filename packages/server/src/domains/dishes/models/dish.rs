use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::common::sql::escape_like;
use crate::common::{DishId, RestaurantId};
use crate::domains::restaurants::models::RestaurantStatus;

/// Availability value that marks a dish as orderable
pub const AVAILABLE: &str = "Available";

/// Dish model
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Dish {
    pub id: DishId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub quantity: Option<String>,
    pub availability: Option<String>,
    /// Free text; timing search looks for words like "breakfast" here
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A dish joined with the restaurant it belongs to
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct DishListing {
    #[sqlx(flatten)]
    pub dish: Dish,
    pub restaurant_name: String,
    pub restaurant_status: RestaurantStatus,
}

/// Partial update; `None` leaves the column alone
#[derive(Debug, Clone, Default)]
pub struct UpdateDish {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<String>,
    pub availability: Option<String>,
    pub notes: Option<String>,
}

/// Which restaurants a dish search may draw from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DishVisibility {
    /// Students and anonymous callers only ever see approved restaurants
    #[default]
    ApprovedOnly,
    Unfiltered,
}

/// Dish search criteria. Every set field narrows the result.
#[derive(Debug, Clone, Default)]
pub struct DishFilter {
    pub visibility: DishVisibility,
    pub restaurant_id: Option<RestaurantId>,
    /// Case-insensitive substring of the restaurant name
    pub restaurant_name: Option<String>,
    /// Case-insensitive exact category
    pub category: Option<String>,
    /// Case-insensitive substring of the notes
    pub timing: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Strict upper bound
    pub price_below: Option<f64>,
    pub available_only: bool,
    pub cheapest_first: bool,
}

impl DishFilter {
    /// In-memory evaluation of the same predicate the SQL search builds
    pub fn matches(&self, listing: &DishListing) -> bool {
        let dish = &listing.dish;

        if self.visibility == DishVisibility::ApprovedOnly
            && listing.restaurant_status != RestaurantStatus::Approved
        {
            return false;
        }
        if self.restaurant_id.is_some_and(|id| id != dish.restaurant_id) {
            return false;
        }
        if let Some(name) = &self.restaurant_name {
            if !contains_ignore_case(&listing.restaurant_name, name) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            match &dish.category {
                Some(c) if c.eq_ignore_ascii_case(category) => {}
                _ => return false,
            }
        }
        if let Some(timing) = &self.timing {
            match &dish.notes {
                Some(notes) if contains_ignore_case(notes, timing) => {}
                _ => return false,
            }
        }
        if self.min_price.is_some_and(|min| dish.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| dish.price > max) {
            return false;
        }
        if self.price_below.is_some_and(|bound| dish.price >= bound) {
            return false;
        }
        if self.available_only && dish.availability.as_deref() != Some(AVAILABLE) {
            return false;
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Dish {
    pub async fn find_by_id(id: DishId, pool: &PgPool) -> Result<Option<Self>> {
        let dish = sqlx::query_as::<_, Self>("SELECT * FROM dishes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(dish)
    }

    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        let dish = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO dishes (id, restaurant_id, name, category, price, quantity, availability, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(self.restaurant_id)
        .bind(&self.name)
        .bind(&self.category)
        .bind(self.price)
        .bind(&self.quantity)
        .bind(&self.availability)
        .bind(&self.notes)
        .bind(self.created_at)
        .fetch_one(pool)
        .await?;
        Ok(dish)
    }

    pub async fn update(id: DishId, input: &UpdateDish, pool: &PgPool) -> Result<Option<Self>> {
        let dish = sqlx::query_as::<_, Self>(
            r#"
            UPDATE dishes SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                price = COALESCE($4, price),
                quantity = COALESCE($5, quantity),
                availability = COALESCE($6, availability),
                notes = COALESCE($7, notes)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.category)
        .bind(input.price)
        .bind(&input.quantity)
        .bind(&input.availability)
        .bind(&input.notes)
        .fetch_optional(pool)
        .await?;
        Ok(dish)
    }

    pub async fn delete(id: DishId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM dishes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Run a filtered search joined against restaurants
    pub async fn search(filter: &DishFilter, pool: &PgPool) -> Result<Vec<DishListing>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            r#"
            SELECT d.*, r.name AS restaurant_name, r.status AS restaurant_status
            FROM dishes d
            JOIN restaurants r ON r.id = d.restaurant_id
            WHERE 1=1
            "#,
        );

        if filter.visibility == DishVisibility::ApprovedOnly {
            query.push(" AND r.status = ");
            query.push_bind(RestaurantStatus::Approved);
        }
        if let Some(id) = filter.restaurant_id {
            query.push(" AND d.restaurant_id = ");
            query.push_bind(id);
        }
        if let Some(name) = &filter.restaurant_name {
            query.push(" AND r.name ILIKE '%' || ");
            query.push_bind(escape_like(name));
            query.push(r" || '%' ESCAPE '\'");
        }
        if let Some(category) = &filter.category {
            query.push(" AND LOWER(d.category) = LOWER(");
            query.push_bind(category.clone());
            query.push(")");
        }
        if let Some(timing) = &filter.timing {
            query.push(" AND d.notes ILIKE '%' || ");
            query.push_bind(escape_like(timing));
            query.push(r" || '%' ESCAPE '\'");
        }
        if let Some(min) = filter.min_price {
            query.push(" AND d.price >= ");
            query.push_bind(min);
        }
        if let Some(max) = filter.max_price {
            query.push(" AND d.price <= ");
            query.push_bind(max);
        }
        if let Some(bound) = filter.price_below {
            query.push(" AND d.price < ");
            query.push_bind(bound);
        }
        if filter.available_only {
            query.push(" AND d.availability = ");
            query.push_bind(AVAILABLE);
        }

        if filter.cheapest_first {
            query.push(" ORDER BY d.price ASC, d.created_at");
        } else {
            query.push(" ORDER BY d.created_at");
        }

        let dishes = query
            .build_query_as::<DishListing>()
            .fetch_all(pool)
            .await?;
        Ok(dishes)
    }
}
