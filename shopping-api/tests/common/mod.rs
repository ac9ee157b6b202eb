//! Common test utilities for API tests
//!
//! Each [`TestContext`] owns a fresh in-memory store and a router built
//! over it; requests are driven in-process with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::Value;
use shopping_api::{
    app::{build_router, AppState},
    config::Config,
};
use shopping_shared::{
    auth::{
        jwt::{create_token, Claims},
        password::hash_password,
    },
    fixtures,
    models::{
        category::Category,
        product::{CreateProduct, Product},
        user::{CreateUser, User},
    },
    store::{MemoryStore, Store},
};
use std::sync::Arc;
use tower::ServiceExt;

/// Signing key used by every test context
pub const TEST_SECRET: &str = "test-symmetric-key-of-at-least-32-chars";

/// Test context containing all necessary resources
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub app: Router,
    pub config: Config,
    pub rng: StdRng,
}

impl TestContext {
    /// Creates a context with an empty store and a fixed seed
    pub fn new() -> Self {
        Self::with_seed(7)
    }

    pub fn with_seed(seed: u64) -> Self {
        let config = Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgresql://unused/shopping_test".to_string()),
            "TOKEN_SYMMETRIC_KEY" => Some(TEST_SECRET.to_string()),
            _ => None,
        })
        .expect("test config");

        let store = Arc::new(MemoryStore::new());
        let app = build_router(AppState::new(store.clone(), config.clone()));

        Self {
            store,
            app,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Inserts a random user whose password hash is not a real hash
    pub async fn create_user(&mut self) -> User {
        self.store
            .create_user(CreateUser {
                username: fixtures::random_name(&mut self.rng),
                email: fixtures::random_email(&mut self.rng),
                hashed_password: "not-a-real-hash".to_string(),
            })
            .await
            .expect("create user")
    }

    /// Inserts a user that can log in with `password`
    pub async fn create_user_with_password(&mut self, password: &str) -> User {
        self.store
            .create_user(CreateUser {
                username: fixtures::random_name(&mut self.rng),
                email: fixtures::random_email(&mut self.rng),
                hashed_password: hash_password(password).expect("hash password"),
            })
            .await
            .expect("create user")
    }

    pub async fn create_category(&mut self) -> Category {
        let name = fixtures::random_string(&mut self.rng, 10);
        self.store
            .create_category(&name)
            .await
            .expect("create category")
    }

    pub async fn create_product(&mut self, owner: &User, category: &Category) -> Product {
        self.store
            .create_product(CreateProduct {
                name: fixtures::random_name(&mut self.rng),
                size: fixtures::random_product_size(&mut self.rng),
                weight: fixtures::random_product_weight(&mut self.rng),
                price: fixtures::random_product_price(&mut self.rng),
                user_id: owner.id,
                category_id: category.id,
            })
            .await
            .expect("create product")
    }

    /// Access token for `username`, whether or not such a user exists
    pub fn token_for(&self, username: &str) -> String {
        let claims = Claims::new(username, self.config.access_token_duration());
        create_token(&claims, TEST_SECRET).expect("create token")
    }

    /// Access token that expired a minute ago
    pub fn expired_token_for(&self, username: &str) -> String {
        let claims = Claims::new(username, Duration::minutes(-1));
        create_token(&claims, TEST_SECRET).expect("create token")
    }

    /// Sends a request and returns the status and decoded JSON body
    ///
    /// An empty body decodes as `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        self.send_request(request).await
    }

    /// Sends a prebuilt request
    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.expect("send request");
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, token, None).await
    }
}
