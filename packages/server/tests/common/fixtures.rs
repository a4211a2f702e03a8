//! Test fixtures that create data through the public API.

use axum::http::StatusCode;
use serde_json::json;

use super::TestHarness;

impl TestHarness {
    /// Register an account and return its token
    pub async fn register(&self, email: &str, role: &str, phone: Option<&str>) -> String {
        let response = self
            .post(
                "/api/auth/register",
                None,
                json!({
                    "email": email,
                    "password": "secret-pw",
                    "name": email.split('@').next().unwrap_or(email),
                    "role": role,
                    "phoneNumber": phone,
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("token in response")
            .to_string()
    }

    pub async fn register_student(&self, email: &str) -> String {
        self.register(email, "STUDENT", None).await
    }

    pub async fn register_owner(&self, email: &str) -> String {
        self.register(email, "OWNER", Some("1234567890")).await
    }

    pub async fn admin_token(&self) -> String {
        let response = self
            .post(
                "/api/auth/login",
                None,
                json!({
                    "email": self.admin_seed.email,
                    "password": self.admin_seed.password,
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("token in response")
            .to_string()
    }

    /// Create a restaurant as the given owner; returns its id
    pub async fn create_restaurant(&self, owner_token: &str, name: &str) -> String {
        let response = self
            .post(
                "/api/owner/restaurants",
                Some(owner_token),
                json!({
                    "name": name,
                    "address": "1 Campus Way",
                    "openingTime": "08:00",
                    "closingTime": "20:00",
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["restaurant"]["restaurantId"]
            .as_str()
            .expect("restaurant id in response")
            .to_string()
    }

    pub async fn approve(&self, admin_token: &str, restaurant_id: &str) {
        let response = self
            .post_empty(
                &format!("/api/admin/restaurants/{}/approve", restaurant_id),
                Some(admin_token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    }

    /// Add a dish as the given owner; returns its id
    pub async fn add_dish(
        &self,
        owner_token: &str,
        restaurant_id: &str,
        name: &str,
        price: f64,
    ) -> String {
        let response = self
            .post(
                &format!("/api/owner/restaurants/{}/dishes", restaurant_id),
                Some(owner_token),
                json!({
                    "name": name,
                    "category": "Snacks",
                    "price": price,
                    "quantity": "1 plate",
                    "availability": "Available",
                    "notes": "lunch",
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["dish"]["dishId"]
            .as_str()
            .expect("dish id in response")
            .to_string()
    }
}
