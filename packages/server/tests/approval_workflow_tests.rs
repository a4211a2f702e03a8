//! Restaurant approval workflow and its effect on public visibility.

mod common;

use crate::common::TestHarness;
use axum::http::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn test_new_restaurants_start_pending(ctx: &TestHarness) {
    let owner = ctx.register_owner("owner@x.com").await;
    ctx.create_restaurant(&owner, "Pending Place").await;

    let admin = ctx.admin_token().await;
    let pending = ctx.get("/api/admin/restaurants/pending", Some(&admin)).await;
    assert_eq!(pending.status, StatusCode::OK);
    let pending = pending.body.as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["name"], "Pending Place");
    assert_eq!(pending[0]["status"], "PENDING");
    assert_eq!(pending[0]["owner"]["email"], "owner@x.com");
    assert_eq!(pending[0]["owner"]["phone"], "1234567890");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_public_registration_is_ownerless_and_pending(ctx: &TestHarness) {
    let response = ctx
        .post(
            "/api/restaurants/register",
            None,
            json!({ "name": "Walk-in Canteen" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["status"], "PENDING");
    assert!(response.body["ownerId"].is_null());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_pending_and_rejected_dishes_stay_hidden(ctx: &TestHarness) {
    let owner = ctx.register_owner("owner@x.com").await;
    let admin = ctx.admin_token().await;

    let approved = ctx.create_restaurant(&owner, "Open Kitchen").await;
    let pending = ctx.create_restaurant(&owner, "Not Yet").await;
    let rejected = ctx.create_restaurant(&owner, "Never").await;

    ctx.add_dish(&owner, &approved, "Visible Roll", 40.0).await;
    ctx.add_dish(&owner, &pending, "Hidden Roll", 40.0).await;
    ctx.add_dish(&owner, &rejected, "Gone Roll", 40.0).await;

    ctx.approve(&admin, &approved).await;
    let reject = ctx
        .post_empty(
            &format!("/api/admin/restaurants/{}/reject", rejected),
            Some(&admin),
        )
        .await;
    assert_eq!(reject.status, StatusCode::OK);
    assert_eq!(reject.body["status"], "REJECTED");
    assert_eq!(reject.body["message"], "Restaurant rejected: Never");

    for path in [
        "/api/dishes/all",
        "/api/dishes/available",
        "/api/dishes/popular",
        "/api/dishes/budget/100",
        "/api/dishes/category/snacks",
        "/api/dishes/price-range?minPrice=0&maxPrice=100",
        "/api/dishes/search/budget-category?maxPrice=100&category=Snacks",
        "/api/dishes/search/budget-timing?maxPrice=100&timing=lunch",
        "/api/dishes/search/category-timing?category=Snacks&timing=LUNCH",
    ] {
        let response = ctx.get(path, None).await;
        assert_eq!(response.status, StatusCode::OK, "{}: {:?}", path, response.body);
        let names: Vec<&str> = response
            .body
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|d| d["name"].as_str())
            .collect();
        assert_eq!(names, vec!["Visible Roll"], "{}", path);
    }

    // The owner still sees everything on their own menus
    let own = ctx
        .get(
            &format!("/api/owner/restaurants/{}/dishes", pending),
            Some(&owner),
        )
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body.as_array().unwrap().len(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_public_restaurant_reads_only_see_approved(ctx: &TestHarness) {
    let owner = ctx.register_owner("owner@x.com").await;
    let admin = ctx.admin_token().await;
    let approved = ctx.create_restaurant(&owner, "Green Bowl").await;
    let pending = ctx.create_restaurant(&owner, "Green Plate").await;
    ctx.approve(&admin, &approved).await;

    let listed = ctx.get("/api/restaurants/approved", None).await;
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let search = ctx.get("/api/restaurants/search?name=green", None).await;
    let names: Vec<&str> = search
        .body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Green Bowl"]);

    let visible = ctx
        .get(&format!("/api/restaurants/{}", approved), None)
        .await;
    assert_eq!(visible.status, StatusCode::OK);

    let hidden = ctx.get(&format!("/api/restaurants/{}", pending), None).await;
    assert_eq!(hidden.status, StatusCode::NOT_FOUND);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_repeat_decision_is_idempotent_and_reversal_conflicts(ctx: &TestHarness) {
    let owner = ctx.register_owner("owner@x.com").await;
    let admin = ctx.admin_token().await;
    let id = ctx.create_restaurant(&owner, "Twice Cafe").await;

    ctx.approve(&admin, &id).await;
    ctx.approve(&admin, &id).await;

    let reverse = ctx
        .post_empty(&format!("/api/admin/restaurants/{}/reject", id), Some(&admin))
        .await;
    assert_eq!(reverse.status, StatusCode::CONFLICT);

    let all = ctx.get("/api/admin/restaurants", Some(&admin)).await;
    assert_eq!(all.body[0]["status"], "APPROVED");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_approval_requires_admin(ctx: &TestHarness) {
    let owner = ctx.register_owner("owner@x.com").await;
    let id = ctx.create_restaurant(&owner, "Self Approved").await;
    let path = format!("/api/admin/restaurants/{}/approve", id);

    let as_owner = ctx.post_empty(&path, Some(&owner)).await;
    assert_eq!(as_owner.status, StatusCode::FORBIDDEN);

    let anonymous = ctx.post_empty(&path, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_unknown_restaurant_is_not_found(ctx: &TestHarness) {
    let admin = ctx.admin_token().await;
    let response = ctx
        .post_empty(
            "/api/admin/restaurants/0190a5b0-0000-7000-8000-000000000000/approve",
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let malformed = ctx
        .post_empty("/api/admin/restaurants/not-a-uuid/approve", Some(&admin))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}
