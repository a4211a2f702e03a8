// Test dependencies - in-memory implementations of the store traits
//
// InMemoryStore mirrors the schema's guarantees (unique email, one feedback per
// student and dish, cascading deletes) so tests exercise the same failure paths
// Postgres would produce.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{
    BaseDishStore, BaseFeedbackStore, BasePasswordHasher, BaseRestaurantStore, BaseUserDirectory,
    StoreError, StoreResult,
};
use crate::common::{DishId, FeedbackId, RestaurantId, UserId};
use crate::domains::auth::models::User;
use crate::domains::dishes::models::{Dish, DishFilter, DishListing, UpdateDish};
use crate::domains::feedback::models::{Feedback, FeedbackView};
use crate::domains::restaurants::models::{Restaurant, RestaurantStatus};

// =============================================================================
// In-memory store
// =============================================================================

#[derive(Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    restaurants: BTreeMap<RestaurantId, Restaurant>,
    dishes: BTreeMap<DishId, Dish>,
    feedback: BTreeMap<FeedbackId, Feedback>,
}

impl Tables {
    fn listing(&self, dish: &Dish) -> Option<DishListing> {
        let restaurant = self.restaurants.get(&dish.restaurant_id)?;
        Some(DishListing {
            dish: dish.clone(),
            restaurant_name: restaurant.name.clone(),
            restaurant_status: restaurant.status,
        })
    }

    fn view(&self, feedback: &Feedback) -> Option<FeedbackView> {
        let student = self.users.get(&feedback.student_id)?;
        let dish = self.dishes.get(&feedback.dish_id)?;
        let restaurant = self.restaurants.get(&dish.restaurant_id)?;
        Some(FeedbackView {
            feedback: feedback.clone(),
            student_name: student.name.clone(),
            dish_name: dish.name.clone(),
            restaurant_id: restaurant.id,
            restaurant_name: restaurant.name.clone(),
        })
    }

    /// Newest first, like the SQL views
    fn views<F>(&self, keep: F) -> Vec<FeedbackView>
    where
        F: Fn(&FeedbackView) -> bool,
    {
        let mut views: Vec<FeedbackView> = self
            .feedback
            .values()
            .filter_map(|f| self.view(f))
            .filter(|v| keep(v))
            .collect();
        views.sort_by(|a, b| b.feedback.created_at.cmp(&a.feedback.created_at));
        views
    }

    fn remove_dishes(&mut self, dish_ids: &[DishId]) {
        for id in dish_ids {
            self.dishes.remove(id);
        }
        self.feedback.retain(|_, f| !dish_ids.contains(&f.dish_id));
    }
}

/// Process-local store for tests and database-less runs
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseUserDirectory for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn insert_user(&self, user: User) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation("users_email_key".to_string()));
        }
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }

    async fn delete_user(&self, id: UserId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.users.remove(&id).is_none() {
            return Ok(false);
        }

        let owned: Vec<RestaurantId> = tables
            .restaurants
            .values()
            .filter(|r| r.owner_id == Some(id))
            .map(|r| r.id)
            .collect();
        let dishes: Vec<DishId> = tables
            .dishes
            .values()
            .filter(|d| owned.contains(&d.restaurant_id))
            .map(|d| d.id)
            .collect();

        tables.restaurants.retain(|rid, _| !owned.contains(rid));
        tables.remove_dishes(&dishes);
        tables.feedback.retain(|_, f| f.student_id != id);
        Ok(true)
    }
}

#[async_trait]
impl BaseRestaurantStore for InMemoryStore {
    async fn insert_restaurant(&self, restaurant: Restaurant) -> StoreResult<Restaurant> {
        let mut tables = self.tables.write().await;
        tables.restaurants.insert(restaurant.id, restaurant.clone());
        Ok(restaurant)
    }

    async fn find_restaurant(&self, id: RestaurantId) -> StoreResult<Option<Restaurant>> {
        Ok(self.tables.read().await.restaurants.get(&id).cloned())
    }

    async fn restaurants_by_owner(&self, owner_id: UserId) -> StoreResult<Vec<Restaurant>> {
        let tables = self.tables.read().await;
        Ok(tables
            .restaurants
            .values()
            .filter(|r| r.owner_id == Some(owner_id))
            .cloned()
            .collect())
    }

    async fn restaurants_by_status(
        &self,
        status: RestaurantStatus,
    ) -> StoreResult<Vec<Restaurant>> {
        let tables = self.tables.read().await;
        Ok(tables
            .restaurants
            .values()
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }

    async fn all_restaurants(&self) -> StoreResult<Vec<Restaurant>> {
        Ok(self.tables.read().await.restaurants.values().cloned().collect())
    }

    async fn search_restaurants(
        &self,
        name: &str,
        status: RestaurantStatus,
    ) -> StoreResult<Vec<Restaurant>> {
        let needle = name.to_lowercase();
        let tables = self.tables.read().await;
        let mut found: Vec<Restaurant> = tables
            .restaurants
            .values()
            .filter(|r| r.status == status && r.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }

    async fn set_restaurant_status(
        &self,
        id: RestaurantId,
        status: RestaurantStatus,
    ) -> StoreResult<Option<Restaurant>> {
        let mut tables = self.tables.write().await;
        Ok(tables.restaurants.get_mut(&id).map(|restaurant| {
            restaurant.status = status;
            restaurant.clone()
        }))
    }
}

#[async_trait]
impl BaseDishStore for InMemoryStore {
    async fn insert_dish(&self, dish: Dish) -> StoreResult<Dish> {
        let mut tables = self.tables.write().await;
        if !tables.restaurants.contains_key(&dish.restaurant_id) {
            return Err(StoreError::Other(anyhow::anyhow!(
                "dishes.restaurant_id references missing restaurant {}",
                dish.restaurant_id
            )));
        }
        tables.dishes.insert(dish.id, dish.clone());
        Ok(dish)
    }

    async fn find_dish(&self, id: DishId) -> StoreResult<Option<Dish>> {
        Ok(self.tables.read().await.dishes.get(&id).cloned())
    }

    async fn update_dish(&self, id: DishId, update: UpdateDish) -> StoreResult<Option<Dish>> {
        let mut tables = self.tables.write().await;
        let Some(dish) = tables.dishes.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            dish.name = name;
        }
        if let Some(category) = update.category {
            dish.category = Some(category);
        }
        if let Some(price) = update.price {
            dish.price = price;
        }
        if let Some(quantity) = update.quantity {
            dish.quantity = Some(quantity);
        }
        if let Some(availability) = update.availability {
            dish.availability = Some(availability);
        }
        if let Some(notes) = update.notes {
            dish.notes = Some(notes);
        }
        Ok(Some(dish.clone()))
    }

    async fn delete_dish(&self, id: DishId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.dishes.contains_key(&id) {
            return Ok(false);
        }
        tables.remove_dishes(&[id]);
        Ok(true)
    }

    async fn search_dishes(&self, filter: &DishFilter) -> StoreResult<Vec<DishListing>> {
        let tables = self.tables.read().await;
        let mut found: Vec<DishListing> = tables
            .dishes
            .values()
            .filter_map(|d| tables.listing(d))
            .filter(|l| filter.matches(l))
            .collect();
        if filter.cheapest_first {
            found.sort_by(|a, b| a.dish.price.total_cmp(&b.dish.price));
        }
        Ok(found)
    }
}

#[async_trait]
impl BaseFeedbackStore for InMemoryStore {
    async fn insert_feedback(&self, feedback: Feedback) -> StoreResult<Feedback> {
        let mut tables = self.tables.write().await;
        let duplicate = tables
            .feedback
            .values()
            .any(|f| f.student_id == feedback.student_id && f.dish_id == feedback.dish_id);
        if duplicate {
            return Err(StoreError::UniqueViolation(
                "feedback_student_dish_key".to_string(),
            ));
        }
        tables.feedback.insert(feedback.id, feedback.clone());
        Ok(feedback)
    }

    async fn feedback_exists(&self, student_id: UserId, dish_id: DishId) -> StoreResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .feedback
            .values()
            .any(|f| f.student_id == student_id && f.dish_id == dish_id))
    }

    async fn feedback_for_dish(&self, dish_id: DishId) -> StoreResult<Vec<Feedback>> {
        let tables = self.tables.read().await;
        Ok(tables
            .feedback
            .values()
            .filter(|f| f.dish_id == dish_id)
            .cloned()
            .collect())
    }

    async fn feedback_by_student(&self, student_id: UserId) -> StoreResult<Vec<FeedbackView>> {
        let tables = self.tables.read().await;
        Ok(tables.views(|v| v.feedback.student_id == student_id))
    }

    async fn feedback_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> StoreResult<Vec<FeedbackView>> {
        let tables = self.tables.read().await;
        Ok(tables.views(|v| v.restaurant_id == restaurant_id))
    }

    async fn all_feedback(&self) -> StoreResult<Vec<FeedbackView>> {
        let tables = self.tables.read().await;
        Ok(tables.views(|_| true))
    }
}

// =============================================================================
// Mock Password Hasher
// =============================================================================

/// Reversible "hash" so tests do not pay for Argon2
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPasswordHasher;

impl BasePasswordHasher for MockPasswordHasher {
    fn hash(&self, password: &str) -> anyhow::Result<String> {
        Ok(format!("plain${}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        hash.strip_prefix("plain$") == Some(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Role;

    fn user(email: &str, role: Role) -> User {
        User::new("Test".into(), email.into(), "plain$pw".into(), role, None)
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let store = InMemoryStore::new();
        store.insert_user(user("a@x.com", Role::Student)).await.unwrap();

        let err = store
            .insert_user(user("a@x.com", Role::Owner))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(c) if c == "users_email_key"));
    }

    #[tokio::test]
    async fn test_duplicate_feedback_is_unique_violation() {
        let store = InMemoryStore::new();
        let student = store.insert_user(user("s@x.com", Role::Student)).await.unwrap();
        let dish_id = DishId::new();

        store
            .insert_feedback(Feedback::new(student.id, dish_id, 4, None))
            .await
            .unwrap();
        let err = store
            .insert_feedback(Feedback::new(student.id, dish_id, 2, Some("again".into())))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(c) if c == "feedback_student_dish_key"));

        // A different dish is fine
        store
            .insert_feedback(Feedback::new(student.id, DishId::new(), 3, None))
            .await
            .unwrap();
        assert_eq!(store.tables.read().await.feedback.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_feedback_inserts_keep_one() {
        let store = InMemoryStore::new();
        let student_id = UserId::new();
        let dish_id = DishId::new();

        let (a, b) = tokio::join!(
            store.insert_feedback(Feedback::new(student_id, dish_id, 5, None)),
            store.insert_feedback(Feedback::new(student_id, dish_id, 1, None)),
        );

        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert!(matches!(a.err().or(b.err()), Some(StoreError::UniqueViolation(_))));
        assert_eq!(store.tables.read().await.feedback.len(), 1);
    }

    #[tokio::test]
    async fn test_deleting_owner_cascades() {
        let store = InMemoryStore::new();
        let owner = store.insert_user(user("o@x.com", Role::Owner)).await.unwrap();
        let student = store.insert_user(user("s@x.com", Role::Student)).await.unwrap();

        let restaurant = store
            .insert_restaurant(Restaurant::new(Some(owner.id), "Cafe A".into(), None, None, None))
            .await
            .unwrap();
        let dish = store
            .insert_dish(Dish {
                id: DishId::new(),
                restaurant_id: restaurant.id,
                name: "Idli".into(),
                category: None,
                price: 40.0,
                quantity: None,
                availability: None,
                notes: None,
                created_at: chrono::Utc::now(),
            })
            .await
            .unwrap();
        store
            .insert_feedback(Feedback::new(student.id, dish.id, 5, None))
            .await
            .unwrap();

        assert!(store.delete_user(owner.id).await.unwrap());

        assert!(store.find_restaurant(restaurant.id).await.unwrap().is_none());
        assert!(store.find_dish(dish.id).await.unwrap().is_none());
        assert!(store.all_feedback().await.unwrap().is_empty());
        assert!(store.find_by_id(student.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let store = InMemoryStore::new();
        for name in ["50%_off Grill", "50 Xoff Grill"] {
            let restaurant = store
                .insert_restaurant(Restaurant::new(None, name.into(), None, None, None))
                .await
                .unwrap();
            store
                .set_restaurant_status(restaurant.id, RestaurantStatus::Approved)
                .await
                .unwrap();
        }

        let found = store
            .search_restaurants("50%_off", RestaurantStatus::Approved)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "50%_off Grill");
    }

    #[test]
    fn test_mock_hasher() {
        let hash = MockPasswordHasher.hash("secret").unwrap();
        assert!(MockPasswordHasher.verify("secret", &hash));
        assert!(!MockPasswordHasher.verify("other", &hash));
    }
}
