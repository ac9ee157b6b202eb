/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use shopping_api::{app::AppState, config::Config};
/// use shopping_shared::store::PgStore;
/// use sqlx::PgPool;
/// use std::sync::Arc;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(Arc::new(PgStore::new(pool)), config);
/// let app = shopping_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::auth::jwt_auth_layer, routes};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use shopping_shared::store::Store;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend
    pub store: Arc<dyn Store>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: Arc<dyn Store>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Symmetric key for token operations
    pub fn token_secret(&self) -> &str {
        &self.config.token.symmetric_key
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET    /health                 # Health check (public)
/// ├── POST   /users                  # Register (public)
/// ├── POST   /users/login            # Login (public)
/// ├── GET    /users/me               # Current user
/// ├── GET    /admin/users            # List users
/// ├── GET    /categories             # List categories (public)
/// ├── POST   /categories             # Create category
/// ├── GET    /categories/:id
/// ├── PUT    /categories/:id
/// ├── DELETE /categories/:id
/// ├── GET    /products               # List products (public)
/// ├── POST   /products               # Create product
/// ├── GET    /products/:id           # Owner only
/// ├── PUT    /products/:id           # Owner only
/// └── DELETE /products/:id           # Owner only
/// ```
///
/// Everything not marked public sits behind the bearer token layer.
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Authentication (per-route basis)
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/users", post(routes::users::create_user))
        .route("/users/login", post(routes::users::login_user))
        .route("/categories", get(routes::categories::list_categories))
        .route("/products", get(routes::products::list_products));

    let protected_routes = Router::new()
        .route("/users/me", get(routes::users::get_current_user))
        .route("/admin/users", get(routes::users::list_users))
        .route("/categories", post(routes::categories::create_category))
        .route(
            "/categories/:id",
            get(routes::categories::get_category)
                .put(routes::categories::update_category)
                .delete(routes::categories::delete_category),
        )
        .route("/products", post(routes::products::create_product))
        .route(
            "/products/:id",
            get(routes::products::get_product)
                .put(routes::products::update_product)
                .delete(routes::products::delete_product),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&state.config))
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.api.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600))
}
