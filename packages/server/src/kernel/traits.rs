// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Authorization, approval and feedback rules live in the domain actions that call these.
//
// Naming convention: Base* for trait names (e.g., BaseUserDirectory, BaseDishStore)

use async_trait::async_trait;
use thiserror::Error;

use crate::common::{DishId, RestaurantId, UserId};
use crate::domains::auth::models::User;
use crate::domains::dishes::models::{Dish, DishFilter, DishListing, UpdateDish};
use crate::domains::feedback::models::{Feedback, FeedbackView};
use crate::domains::restaurants::models::{Restaurant, RestaurantStatus};

// =============================================================================
// Store errors
// =============================================================================

#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique constraint rejected the write; carries the constraint name
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error(transparent)]
    Other(anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(sqlx::Error::Database(db)) = err.downcast_ref::<sqlx::Error>() {
            if db.is_unique_violation() {
                let constraint = db.constraint().unwrap_or("unique constraint").to_string();
                return StoreError::UniqueViolation(constraint);
            }
        }
        StoreError::Other(err)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::from(anyhow::Error::from(err))
    }
}

// =============================================================================
// User Directory Trait
// =============================================================================

#[async_trait]
pub trait BaseUserDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Fails with `UniqueViolation` when the email is taken
    async fn insert_user(&self, user: User) -> StoreResult<User>;

    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Removes the user and everything that hangs off them. Returns false if absent.
    async fn delete_user(&self, id: UserId) -> StoreResult<bool>;

    /// Liveness probe for the health endpoint
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

// =============================================================================
// Restaurant Store Trait
// =============================================================================

#[async_trait]
pub trait BaseRestaurantStore: Send + Sync {
    async fn insert_restaurant(&self, restaurant: Restaurant) -> StoreResult<Restaurant>;

    async fn find_restaurant(&self, id: RestaurantId) -> StoreResult<Option<Restaurant>>;

    async fn restaurants_by_owner(&self, owner_id: UserId) -> StoreResult<Vec<Restaurant>>;

    async fn restaurants_by_status(&self, status: RestaurantStatus)
        -> StoreResult<Vec<Restaurant>>;

    async fn all_restaurants(&self) -> StoreResult<Vec<Restaurant>>;

    async fn search_restaurants(
        &self,
        name: &str,
        status: RestaurantStatus,
    ) -> StoreResult<Vec<Restaurant>>;

    /// Unconditional write; returns None if the restaurant does not exist
    async fn set_restaurant_status(
        &self,
        id: RestaurantId,
        status: RestaurantStatus,
    ) -> StoreResult<Option<Restaurant>>;
}

// =============================================================================
// Dish Store Trait
// =============================================================================

#[async_trait]
pub trait BaseDishStore: Send + Sync {
    async fn insert_dish(&self, dish: Dish) -> StoreResult<Dish>;

    async fn find_dish(&self, id: DishId) -> StoreResult<Option<Dish>>;

    async fn update_dish(&self, id: DishId, update: UpdateDish) -> StoreResult<Option<Dish>>;

    async fn delete_dish(&self, id: DishId) -> StoreResult<bool>;

    async fn search_dishes(&self, filter: &DishFilter) -> StoreResult<Vec<DishListing>>;
}

// =============================================================================
// Feedback Store Trait
// =============================================================================

#[async_trait]
pub trait BaseFeedbackStore: Send + Sync {
    /// Fails with `UniqueViolation` when the student already rated the dish
    async fn insert_feedback(&self, feedback: Feedback) -> StoreResult<Feedback>;

    async fn feedback_exists(&self, student_id: UserId, dish_id: DishId) -> StoreResult<bool>;

    async fn feedback_for_dish(&self, dish_id: DishId) -> StoreResult<Vec<Feedback>>;

    async fn feedback_by_student(&self, student_id: UserId) -> StoreResult<Vec<FeedbackView>>;

    async fn feedback_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> StoreResult<Vec<FeedbackView>>;

    async fn all_feedback(&self) -> StoreResult<Vec<FeedbackView>>;
}

// =============================================================================
// Password Hashing Trait
// =============================================================================

pub trait BasePasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> anyhow::Result<String>;

    /// False for a wrong password and for an unreadable hash alike
    fn verify(&self, password: &str, hash: &str) -> bool;
}
