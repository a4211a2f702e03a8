use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{Role, UserId};

/// A single account record; the role decides what it may do.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    /// Required for owners, optional otherwise
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        role: Role,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
            role,
            phone_number,
            created_at: Utc::now(),
        }
    }

    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(id: UserId, pool: &PgPool) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let users = sqlx::query_as::<_, Self>("SELECT * FROM users ORDER BY created_at")
            .fetch_all(pool)
            .await?;
        Ok(users)
    }

    /// Insert; a taken email surfaces as the `users_email_key` unique violation
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        let user = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO users (id, name, email, password_hash, role, phone_number, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.password_hash)
        .bind(self.role)
        .bind(&self.phone_number)
        .bind(self.created_at)
        .fetch_one(pool)
        .await?;
        Ok(user)
    }

    /// Restaurants, dishes and feedback go with the user (ON DELETE CASCADE)
    pub async fn delete(id: UserId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
