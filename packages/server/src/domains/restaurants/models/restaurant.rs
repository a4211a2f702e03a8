use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::sql::escape_like;
use crate::common::{RestaurantId, UserId};

/// Restaurant status enum for type-safe querying
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RestaurantStatus {
    Pending,
    Approved,
    Rejected,
}

impl RestaurantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestaurantStatus::Pending => "PENDING",
            RestaurantStatus::Approved => "APPROVED",
            RestaurantStatus::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for RestaurantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RestaurantStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PENDING" => Ok(RestaurantStatus::Pending),
            "APPROVED" => Ok(RestaurantStatus::Approved),
            "REJECTED" => Ok(RestaurantStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid restaurant status: {}", s)),
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for RestaurantStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl sqlx::Encode<'_, sqlx::Postgres> for RestaurantStatus {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> std::result::Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl sqlx::Decode<'_, sqlx::Postgres> for RestaurantStatus {
    fn decode(
        value: sqlx::postgres::PgValueRef<'_>,
    ) -> std::result::Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(raw.parse::<RestaurantStatus>()?)
    }
}

/// Restaurant model
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Restaurant {
    pub id: RestaurantId,
    /// None for restaurants registered through the public path
    pub owner_id: Option<UserId>,
    pub name: String,
    pub address: Option<String>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub status: RestaurantStatus,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    /// Every restaurant starts out pending review
    pub fn new(
        owner_id: Option<UserId>,
        name: String,
        address: Option<String>,
        opening_time: Option<String>,
        closing_time: Option<String>,
    ) -> Self {
        Self {
            id: RestaurantId::new(),
            owner_id,
            name,
            address,
            opening_time,
            closing_time,
            status: RestaurantStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == RestaurantStatus::Approved
    }

    pub async fn find_by_id(id: RestaurantId, pool: &PgPool) -> Result<Option<Self>> {
        let restaurant = sqlx::query_as::<_, Self>("SELECT * FROM restaurants WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(restaurant)
    }

    pub async fn find_by_owner(owner_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        let restaurants = sqlx::query_as::<_, Self>(
            "SELECT * FROM restaurants WHERE owner_id = $1 ORDER BY created_at",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;
        Ok(restaurants)
    }

    pub async fn find_by_status(status: RestaurantStatus, pool: &PgPool) -> Result<Vec<Self>> {
        let restaurants = sqlx::query_as::<_, Self>(
            "SELECT * FROM restaurants WHERE status = $1 ORDER BY created_at",
        )
        .bind(status)
        .fetch_all(pool)
        .await?;
        Ok(restaurants)
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let restaurants =
            sqlx::query_as::<_, Self>("SELECT * FROM restaurants ORDER BY created_at")
                .fetch_all(pool)
                .await?;
        Ok(restaurants)
    }

    /// Case-insensitive name search within one status
    pub async fn search_by_name(
        query: &str,
        status: RestaurantStatus,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let restaurants = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM restaurants
            WHERE status = $1 AND name ILIKE '%' || $2 || '%' ESCAPE '\'
            ORDER BY name
            "#,
        )
        .bind(status)
        .bind(escape_like(query))
        .fetch_all(pool)
        .await?;
        Ok(restaurants)
    }

    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        let restaurant = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO restaurants (id, owner_id, name, address, opening_time, closing_time, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(self.owner_id)
        .bind(&self.name)
        .bind(&self.address)
        .bind(&self.opening_time)
        .bind(&self.closing_time)
        .bind(self.status)
        .bind(self.created_at)
        .fetch_one(pool)
        .await?;
        Ok(restaurant)
    }

    /// Overwrite the status; returns None when the restaurant does not exist
    pub async fn set_status(
        id: RestaurantId,
        status: RestaurantStatus,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let restaurant = sqlx::query_as::<_, Self>(
            "UPDATE restaurants SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(pool)
        .await?;
        Ok(restaurant)
    }
}
