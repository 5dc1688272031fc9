//! HTTP-level CRUD tests for `/customers` against a real PostgreSQL database.
//!
//! These need `DATABASE_URL`; `#[sqlx::test]` creates a database per test.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete_auth, get, get_auth, post_auth, post_json, post_json_auth,
    put_json_auth, token_for,
};
use crm_core::access::CustomerAccessPolicy;
use serde_json::json;
use sqlx::PgPool;

fn acme() -> serde_json::Value {
    json!({
        "name": "Acme",
        "contactNumber": "555-0100",
        "email": "billing@acme.test",
        "creditLimit": 5000,
        "creditPeriod": "30 days",
        "discountType": "percentage",
        "discountValue": 5,
        "status": "active",
        "availability": true,
    })
}

/// Create a customer through the API and return its id.
async fn create_customer(pool: &PgPool, body: serde_json::Value) -> i64 {
    let app = build_test_app(pool.clone(), CustomerAccessPolicy::Open);
    let response = post_json(app, "/api/v1/customers", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_201_with_stored_record(pool: PgPool) {
    let app = build_test_app(pool, CustomerAccessPolicy::Open);
    let response = post_json(app, "/api/v1/customers", acme()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["data"]["id"].is_number());
    assert_eq!(json["data"]["name"], "Acme");
    assert_eq!(json["data"]["contactNumber"], "555-0100");
    assert_eq!(json["data"]["creditPeriod"], "30 days");
    assert_eq!(json["data"]["discountType"], "percentage");
    assert_eq!(json["data"]["creditLimit"], 5000.0);
    assert_eq!(json["data"]["availability"], true);
    assert!(json["data"].get("deletedAt").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_and_list_customers(pool: PgPool) {
    let id = create_customer(&pool, acme()).await;

    let app = build_test_app(pool.clone(), CustomerAccessPolicy::Open);
    let response = get(app, &format!("/api/v1/customers/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], id);

    let app = build_test_app(pool.clone(), CustomerAccessPolicy::Open);
    let response = get(app, "/api/v1/customers?status=active&search=acm").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = build_test_app(pool, CustomerAccessPolicy::Open);
    let response = get(app, "/api/v1/customers?status=inactive").await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn percent_search_matches_only_literal_percent(pool: PgPool) {
    create_customer(&pool, acme()).await;
    let mut globex = acme();
    globex["name"] = json!("Globex");
    create_customer(&pool, globex).await;

    let app = build_test_app(pool.clone(), CustomerAccessPolicy::Open);
    let response = get(app, "/api/v1/customers?search=%25").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

    let mut sale = acme();
    sale["name"] = json!("50% Off Outlet");
    create_customer(&pool, sale).await;

    let app = build_test_app(pool, CustomerAccessPolicy::Open);
    let response = get(app, "/api/v1/customers?search=%25").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["name"], "50% Off Outlet");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_customer_returns_404(pool: PgPool) {
    let app = build_test_app(pool, CustomerAccessPolicy::Open);
    let response = get(app, "/api/v1/customers/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_delete_and_restore(pool: PgPool) {
    let id = create_customer(&pool, acme()).await;
    let token = token_for(1, "admin");

    let mut changed = acme();
    changed["name"] = json!("Acme Holdings");
    changed["status"] = json!("inactive");
    let app = build_test_app(pool.clone(), CustomerAccessPolicy::Open);
    let response = put_json_auth(app, &format!("/api/v1/customers/{id}"), changed, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Acme Holdings");
    assert_eq!(json["data"]["status"], "inactive");

    let app = build_test_app(pool.clone(), CustomerAccessPolicy::Open);
    let response = delete_auth(app, &format!("/api/v1/customers/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool.clone(), CustomerAccessPolicy::Open);
    let response = get_auth(app, &format!("/api/v1/customers/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = build_test_app(pool.clone(), CustomerAccessPolicy::Open);
    let response = post_auth(app, &format!("/api/v1/customers/{id}/restore"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], id);

    // Restoring a live customer is a 404: nothing was deleted.
    let app = build_test_app(pool, CustomerAccessPolicy::Open);
    let response = post_auth(app, &format!("/api/v1/customers/{id}/restore"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn manager_policy_admits_manager_writes(pool: PgPool) {
    let app = build_test_app(pool, CustomerAccessPolicy::Manager);
    let token = token_for(3, "manager");
    let response = post_json_auth(app, "/api/v1/customers", acme(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
