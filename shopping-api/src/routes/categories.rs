/// Category endpoints
///
/// - `GET /categories` - Paginated list (public)
/// - `POST /categories` - Create
/// - `GET /categories/:id` - Fetch one
/// - `PUT /categories/:id` - Rename
/// - `DELETE /categories/:id` - Delete

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{ValidJson, ValidPath, ValidQuery},
    routes::params::{IdPath, ListQuery},
};
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use shopping_shared::{models::category::Category, store::StoreError};
use validator::Validate;

/// Body for create and rename
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: String,
}

fn not_found(id: i64) -> impl FnOnce(StoreError) -> ApiError {
    move |err| match err {
        StoreError::NotFound => ApiError::NotFound(format!("category {} not found", id)),
        other => other.into(),
    }
}

/// Create a category
///
/// # Errors
///
/// - `400 Bad Request`: Empty or over-long name
/// - `409 Conflict`: Name already taken
pub async fn create_category(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CategoryRequest>,
) -> ApiResult<Json<Category>> {
    let category = state.store.create_category(&req.name).await?;
    tracing::info!(category_id = category.id, name = %category.name, "Category created");
    Ok(Json(category))
}

pub async fn get_category(
    State(state): State<AppState>,
    ValidPath(path): ValidPath<IdPath>,
) -> ApiResult<Json<Category>> {
    let category = state
        .store
        .get_category(path.id)
        .await
        .map_err(not_found(path.id))?;
    Ok(Json(category))
}

pub async fn list_categories(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListQuery>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.store.list_categories(query.page()).await?;
    Ok(Json(categories))
}

pub async fn update_category(
    State(state): State<AppState>,
    ValidPath(path): ValidPath<IdPath>,
    ValidJson(req): ValidJson<CategoryRequest>,
) -> ApiResult<Json<Category>> {
    let category = state
        .store
        .update_category(path.id, &req.name)
        .await
        .map_err(not_found(path.id))?;
    Ok(Json(category))
}

/// Delete a category
///
/// A category still referenced by products cannot be deleted; that
/// surfaces as a 500.
pub async fn delete_category(
    State(state): State<AppState>,
    ValidPath(path): ValidPath<IdPath>,
) -> ApiResult<StatusCode> {
    state
        .store
        .delete_category(path.id)
        .await
        .map_err(not_found(path.id))?;
    tracing::info!(category_id = path.id, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}
