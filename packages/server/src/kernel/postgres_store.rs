// PostgresStore - sqlx-backed implementation of every store trait
//
// Thin delegation to the model methods; anyhow errors become StoreError, which is where
// unique violations are recognised.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{
    BaseDishStore, BaseFeedbackStore, BaseRestaurantStore, BaseUserDirectory, StoreResult,
};
use crate::common::{DishId, RestaurantId, UserId};
use crate::domains::auth::models::User;
use crate::domains::dishes::models::{Dish, DishFilter, DishListing, UpdateDish};
use crate::domains::feedback::models::{Feedback, FeedbackView};
use crate::domains::restaurants::models::{Restaurant, RestaurantStatus};

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BaseUserDirectory for PostgresStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(User::find_by_email(email, &self.pool).await?)
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(User::find_by_id(id, &self.pool).await?)
    }

    async fn insert_user(&self, user: User) -> StoreResult<User> {
        Ok(user.insert(&self.pool).await?)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(User::find_all(&self.pool).await?)
    }

    async fn delete_user(&self, id: UserId) -> StoreResult<bool> {
        Ok(User::delete(id, &self.pool).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl BaseRestaurantStore for PostgresStore {
    async fn insert_restaurant(&self, restaurant: Restaurant) -> StoreResult<Restaurant> {
        Ok(restaurant.insert(&self.pool).await?)
    }

    async fn find_restaurant(&self, id: RestaurantId) -> StoreResult<Option<Restaurant>> {
        Ok(Restaurant::find_by_id(id, &self.pool).await?)
    }

    async fn restaurants_by_owner(&self, owner_id: UserId) -> StoreResult<Vec<Restaurant>> {
        Ok(Restaurant::find_by_owner(owner_id, &self.pool).await?)
    }

    async fn restaurants_by_status(
        &self,
        status: RestaurantStatus,
    ) -> StoreResult<Vec<Restaurant>> {
        Ok(Restaurant::find_by_status(status, &self.pool).await?)
    }

    async fn all_restaurants(&self) -> StoreResult<Vec<Restaurant>> {
        Ok(Restaurant::find_all(&self.pool).await?)
    }

    async fn search_restaurants(
        &self,
        name: &str,
        status: RestaurantStatus,
    ) -> StoreResult<Vec<Restaurant>> {
        Ok(Restaurant::search_by_name(name, status, &self.pool).await?)
    }

    async fn set_restaurant_status(
        &self,
        id: RestaurantId,
        status: RestaurantStatus,
    ) -> StoreResult<Option<Restaurant>> {
        Ok(Restaurant::set_status(id, status, &self.pool).await?)
    }
}

#[async_trait]
impl BaseDishStore for PostgresStore {
    async fn insert_dish(&self, dish: Dish) -> StoreResult<Dish> {
        Ok(dish.insert(&self.pool).await?)
    }

    async fn find_dish(&self, id: DishId) -> StoreResult<Option<Dish>> {
        Ok(Dish::find_by_id(id, &self.pool).await?)
    }

    async fn update_dish(&self, id: DishId, update: UpdateDish) -> StoreResult<Option<Dish>> {
        Ok(Dish::update(id, &update, &self.pool).await?)
    }

    async fn delete_dish(&self, id: DishId) -> StoreResult<bool> {
        Ok(Dish::delete(id, &self.pool).await?)
    }

    async fn search_dishes(&self, filter: &DishFilter) -> StoreResult<Vec<DishListing>> {
        Ok(Dish::search(filter, &self.pool).await?)
    }
}

#[async_trait]
impl BaseFeedbackStore for PostgresStore {
    async fn insert_feedback(&self, feedback: Feedback) -> StoreResult<Feedback> {
        Ok(feedback.insert(&self.pool).await?)
    }

    async fn feedback_exists(&self, student_id: UserId, dish_id: DishId) -> StoreResult<bool> {
        Ok(Feedback::exists_for(student_id, dish_id, &self.pool).await?)
    }

    async fn feedback_for_dish(&self, dish_id: DishId) -> StoreResult<Vec<Feedback>> {
        Ok(Feedback::find_by_dish(dish_id, &self.pool).await?)
    }

    async fn feedback_by_student(&self, student_id: UserId) -> StoreResult<Vec<FeedbackView>> {
        Ok(Feedback::views_by_student(student_id, &self.pool).await?)
    }

    async fn feedback_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> StoreResult<Vec<FeedbackView>> {
        Ok(Feedback::views_by_restaurant(restaurant_id, &self.pool).await?)
    }

    async fn all_feedback(&self) -> StoreResult<Vec<FeedbackView>> {
        Ok(Feedback::all_views(&self.pool).await?)
    }
}
