/// Category endpoint tests

mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::json;

#[tokio::test]
async fn test_category_lifecycle() {
    let mut ctx = TestContext::new();
    let user = ctx.create_user().await;
    let token = ctx.token_for(&user.username);

    let (status, created) = ctx.post("/categories", Some(&token), json!({"name": "shoes"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "shoes");
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = ctx.get(&format!("/categories/{id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, renamed) = ctx
        .put(&format!("/categories/{id}"), Some(&token), json!({"name": "boots"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["id"], id);
    assert_eq!(renamed["name"], "boots");

    let (status, body) = ctx.delete(&format!("/categories/{id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = ctx.get(&format!("/categories/{id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_category_is_not_found() {
    let mut ctx = TestContext::new();
    let user = ctx.create_user().await;
    let token = ctx.token_for(&user.username);

    let (status, body) = ctx.get("/categories/99", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "category 99 not found");

    let (status, _) = ctx.put("/categories/99", Some(&token), json!({"name": "x"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = ctx.delete("/categories/99", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_category_input_validation() {
    let mut ctx = TestContext::new();
    let user = ctx.create_user().await;
    let token = ctx.token_for(&user.username);

    let (status, _) = ctx.post("/categories", Some(&token), json!({"name": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = ctx.post("/categories", Some(&token), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = ctx.get("/categories/0", Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = ctx.get("/categories/abc", Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_category_name_conflicts() {
    let mut ctx = TestContext::new();
    let user = ctx.create_user().await;
    let token = ctx.token_for(&user.username);
    let existing = ctx.create_category().await;

    let (status, _) = ctx
        .post("/categories", Some(&token), json!({"name": existing.name}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_categories_is_public_and_paginated() {
    let mut ctx = TestContext::new();
    let mut categories = Vec::new();
    for _ in 0..6 {
        categories.push(ctx.create_category().await);
    }

    let (status, body) = ctx.get("/categories?page_id=2&page_size=5", None).await;
    assert_eq!(status, StatusCode::OK);
    let page = body.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["id"], categories[5].id);

    let (status, _) = ctx.get("/categories?page_id=0&page_size=5", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = ctx.get("/categories", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_category_in_use_cannot_be_deleted() {
    let mut ctx = TestContext::new();
    let user = ctx.create_user().await;
    let token = ctx.token_for(&user.username);
    let category = ctx.create_category().await;
    ctx.create_product(&user, &category).await;

    let (status, body) = ctx
        .delete(&format!("/categories/{}", category.id), Some(&token))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");

    let (status, _) = ctx
        .get(&format!("/categories/{}", category.id), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
}
