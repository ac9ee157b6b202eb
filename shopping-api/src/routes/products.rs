/// Product endpoints
///
/// - `GET /products` - Public catalog, name and price only
/// - `POST /products` - Create; the caller becomes the owner
/// - `GET /products/:id` - Owner only
/// - `PUT /products/:id` - Owner only, partial update
/// - `DELETE /products/:id` - Owner only
///
/// # Ownership
///
/// Single-item operations go through [`load_owned_product`], which always
/// runs the same three steps in order:
///
/// 1. Load the product (`404` if absent)
/// 2. Load the caller's user row (`500` if absent)
/// 3. Compare owner and caller (`403` on mismatch)
///
/// Only then does the handler touch the store again or return the row.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{ValidJson, ValidPath, ValidQuery},
    routes::{
        params::{IdPath, ListQuery},
        resolve_caller,
    },
};
use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use shopping_shared::{
    auth::{
        authorization::{require_ownership, Action},
        middleware::AuthPayload,
    },
    models::{
        category::Category,
        product::{CreateProduct, Product, UpdateProduct},
    },
    store::StoreError,
};
use validator::Validate;

/// Create request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1 to 255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 8, message = "size must be 1 to 8 characters"))]
    pub size: String,

    /// Grams
    #[serde(default)]
    #[validate(range(min = 0, message = "weight must not be negative"))]
    pub weight: i64,

    /// Minor currency units
    #[validate(range(min = 1, message = "price must be at least 1"))]
    pub price: i64,

    #[validate(length(min = 1, message = "category_name is required"))]
    pub category_name: String,
}

/// Create response, with the category denormalized by name
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub id: i64,
    pub name: String,
    pub size: String,
    pub weight: i64,
    pub price: i64,
    pub category_name: String,
}

/// Partial update; absent fields keep their stored values
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1 to 255 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 8, message = "size must be 1 to 8 characters"))]
    pub size: Option<String>,

    #[validate(range(min = 0, message = "weight must not be negative"))]
    pub weight: Option<i64>,

    #[validate(range(min = 1, message = "price must be at least 1"))]
    pub price: Option<i64>,

    /// Moves the product to another existing category
    #[validate(length(min = 1, message = "category_name must not be empty"))]
    pub category_name: Option<String>,
}

/// Catalog entry
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub price: i64,
}

/// Looks up a category named in a request body
///
/// A name that doesn't exist is the client's mistake, so it is a 400.
async fn category_by_name(state: &AppState, name: &str) -> ApiResult<Category> {
    state
        .store
        .get_category_by_name(name)
        .await
        .map_err(|err| match err {
            StoreError::NotFound => {
                ApiError::BadRequest(format!("category {} does not exist", name))
            }
            other => other.into(),
        })
}

/// Loads a product and checks that the caller owns it
async fn load_owned_product(
    state: &AppState,
    auth: &AuthPayload,
    id: i64,
    action: Action,
) -> ApiResult<Product> {
    let product = state.store.get_product(id).await.map_err(|err| match err {
        StoreError::NotFound => ApiError::NotFound(format!("product {} not found", id)),
        other => other.into(),
    })?;

    let caller = resolve_caller(state, auth).await?;

    require_ownership(&product, &caller, action).inspect_err(|_| {
        tracing::warn!(
            product_id = product.id,
            caller_id = caller.id,
            action = %action,
            "Rejected access to product owned by another user"
        )
    })?;

    Ok(product)
}

/// Create a product owned by the caller
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed or unknown category
/// - `500 Internal Server Error`: Caller's user row missing, or store failure
pub async fn create_product(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthPayload>,
    ValidJson(req): ValidJson<CreateProductRequest>,
) -> ApiResult<Json<CreateProductResponse>> {
    let category = category_by_name(&state, &req.category_name).await?;
    let caller = resolve_caller(&state, &auth).await?;

    let product = state
        .store
        .create_product(CreateProduct {
            name: req.name,
            size: req.size,
            weight: req.weight,
            price: req.price,
            user_id: caller.id,
            category_id: category.id,
        })
        .await?;

    tracing::info!(
        product_id = product.id,
        user_id = caller.id,
        category_id = category.id,
        "Product created"
    );

    Ok(Json(CreateProductResponse {
        id: product.id,
        name: product.name,
        size: product.size,
        weight: product.weight,
        price: product.price,
        category_name: category.name,
    }))
}

pub async fn get_product(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthPayload>,
    ValidPath(path): ValidPath<IdPath>,
) -> ApiResult<Json<Product>> {
    let product = load_owned_product(&state, &auth, path.id, Action::View).await?;
    Ok(Json(product))
}

/// Public catalog listing
///
/// Pages past the end yield an empty array.
pub async fn list_products(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListQuery>,
) -> ApiResult<Json<Vec<ProductSummary>>> {
    let products = state.store.list_products(query.page()).await?;

    Ok(Json(
        products
            .into_iter()
            .map(|p| ProductSummary {
                name: p.name,
                price: p.price,
            })
            .collect(),
    ))
}

/// Update a product the caller owns
///
/// The owner and creation time are never changed.
pub async fn update_product(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthPayload>,
    ValidPath(path): ValidPath<IdPath>,
    ValidJson(req): ValidJson<UpdateProductRequest>,
) -> ApiResult<Json<Product>> {
    let product = load_owned_product(&state, &auth, path.id, Action::Update).await?;

    let category_id = match req.category_name.as_deref() {
        Some(name) => Some(category_by_name(&state, name).await?.id),
        None => None,
    };

    let updated = state
        .store
        .update_product(
            product.id,
            UpdateProduct {
                name: req.name,
                size: req.size,
                weight: req.weight,
                price: req.price,
                category_id,
            },
        )
        .await?;

    tracing::info!(product_id = updated.id, "Product updated");

    Ok(Json(updated))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthPayload>,
    ValidPath(path): ValidPath<IdPath>,
) -> ApiResult<StatusCode> {
    let product = load_owned_product(&state, &auth, path.id, Action::Delete).await?;

    state.store.delete_product(product.id).await?;

    tracing::info!(product_id = product.id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}
