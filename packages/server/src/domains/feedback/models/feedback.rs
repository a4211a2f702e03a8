use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{DishId, FeedbackId, RestaurantId, UserId};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;
pub const MAX_COMMENT_LEN: usize = 500;

/// One student's rating of one dish. (student_id, dish_id) is unique.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Feedback {
    pub id: FeedbackId,
    pub student_id: UserId,
    pub dish_id: DishId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Feedback with the names the listings display
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct FeedbackView {
    #[sqlx(flatten)]
    pub feedback: Feedback,
    pub student_name: String,
    pub dish_name: String,
    pub restaurant_id: RestaurantId,
    pub restaurant_name: String,
}

const VIEW_SELECT: &str = r#"
    SELECT f.*, u.name AS student_name, d.name AS dish_name,
           r.id AS restaurant_id, r.name AS restaurant_name
    FROM feedback f
    JOIN users u ON u.id = f.student_id
    JOIN dishes d ON d.id = f.dish_id
    JOIN restaurants r ON r.id = d.restaurant_id
"#;

impl Feedback {
    pub fn new(student_id: UserId, dish_id: DishId, rating: i32, comment: Option<String>) -> Self {
        Self {
            id: FeedbackId::new(),
            student_id,
            dish_id,
            rating,
            comment,
            created_at: Utc::now(),
        }
    }

    /// Insert; a second rating for the same pair fails on `feedback_student_dish_key`
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        let feedback = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO feedback (id, student_id, dish_id, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(self.student_id)
        .bind(self.dish_id)
        .bind(self.rating)
        .bind(&self.comment)
        .bind(self.created_at)
        .fetch_one(pool)
        .await?;
        Ok(feedback)
    }

    pub async fn exists_for(student_id: UserId, dish_id: DishId, pool: &PgPool) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM feedback WHERE student_id = $1 AND dish_id = $2)",
        )
        .bind(student_id)
        .bind(dish_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    pub async fn find_by_dish(dish_id: DishId, pool: &PgPool) -> Result<Vec<Self>> {
        let feedback = sqlx::query_as::<_, Self>(
            "SELECT * FROM feedback WHERE dish_id = $1 ORDER BY created_at",
        )
        .bind(dish_id)
        .fetch_all(pool)
        .await?;
        Ok(feedback)
    }

    pub async fn views_by_student(student_id: UserId, pool: &PgPool) -> Result<Vec<FeedbackView>> {
        let sql = format!("{} WHERE f.student_id = $1 ORDER BY f.created_at DESC", VIEW_SELECT);
        let views = sqlx::query_as::<_, FeedbackView>(&sql)
            .bind(student_id)
            .fetch_all(pool)
            .await?;
        Ok(views)
    }

    pub async fn views_by_restaurant(
        restaurant_id: RestaurantId,
        pool: &PgPool,
    ) -> Result<Vec<FeedbackView>> {
        let sql = format!("{} WHERE r.id = $1 ORDER BY f.created_at DESC", VIEW_SELECT);
        let views = sqlx::query_as::<_, FeedbackView>(&sql)
            .bind(restaurant_id)
            .fetch_all(pool)
            .await?;
        Ok(views)
    }

    pub async fn all_views(pool: &PgPool) -> Result<Vec<FeedbackView>> {
        let sql = format!("{} ORDER BY f.created_at DESC", VIEW_SELECT);
        let views = sqlx::query_as::<_, FeedbackView>(&sql).fetch_all(pool).await?;
        Ok(views)
    }
}
