/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: Registration, login and user lookup
/// - `categories`: Category CRUD
/// - `products`: Product CRUD with owner checks
/// - `params`: Shared path and pagination parameters

pub mod categories;
pub mod health;
pub mod params;
pub mod products;
pub mod users;

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use shopping_shared::{auth::middleware::AuthPayload, models::user::User};

/// Loads the user behind an authenticated request
///
/// The token was already verified, so a missing user row means the
/// account vanished after issue and is treated as a server fault.
pub(crate) async fn resolve_caller(state: &AppState, auth: &AuthPayload) -> ApiResult<User> {
    state.store.get_user(&auth.username).await.map_err(|e| {
        ApiError::InternalError(format!(
            "Failed to load authenticated user {}: {}",
            auth.username, e
        ))
    })
}
