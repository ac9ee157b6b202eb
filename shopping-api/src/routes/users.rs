/// User endpoints
///
/// - `POST /users` - Register a new user
/// - `POST /users/login` - Exchange credentials for an access token
/// - `GET /users/me` - Current user (authenticated)
/// - `GET /admin/users` - Paginated user list (authenticated)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{ValidJson, ValidQuery},
    routes::{params::ListQuery, resolve_caller},
};
use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopping_shared::{
    auth::{
        jwt::{create_token, Claims},
        middleware::AuthPayload,
        password,
    },
    models::user::{CreateUser, User},
    store::StoreError,
};
use validator::{Validate, ValidationError};

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Letters and digits only
    #[validate(
        length(min = 3, max = 50, message = "username must be 3 to 50 characters"),
        custom(function = "validate_alphanumeric")
    )]
    pub username: String,

    #[validate(
        email(message = "invalid email format"),
        length(max = 255, message = "email must be at most 255 characters")
    )]
    pub email: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginUserRequest {
    #[validate(
        length(min = 3, max = 50, message = "username must be 3 to 50 characters"),
        custom(function = "validate_alphanumeric")
    )]
    pub username: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

/// Public view of a user
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub access_token_expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

fn validate_alphanumeric(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Ok(());
    }

    let mut err = ValidationError::new("alphanum");
    err.message = Some("username must contain only letters and digits".into());
    Err(err)
}

/// Register a new user
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `409 Conflict`: Username or email already taken
/// - `500 Internal Server Error`: Server error
pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let hashed_password = password::hash_password(&req.password)?;

    let user = state
        .store
        .create_user(CreateUser {
            username: req.username,
            email: req.email,
            hashed_password,
        })
        .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok(Json(user.into()))
}

/// Log in with username and password
///
/// Unknown usernames and wrong passwords both answer 401 with the same
/// message.
pub async fn login_user(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginUserRequest>,
) -> ApiResult<Json<LoginUserResponse>> {
    const INVALID_CREDENTIALS: &str = "invalid username or password";

    let user = match state.store.get_user(&req.username).await {
        Ok(user) => user,
        Err(StoreError::NotFound) => {
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    if !password::verify_password(&req.password, &user.hashed_password)? {
        tracing::debug!(username = %user.username, "Login rejected: wrong password");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let claims = Claims::new(user.username.clone(), state.config.access_token_duration());
    let access_token = create_token(&claims, state.token_secret())?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginUserResponse {
        access_token,
        access_token_expires_at: claims.expires_at(),
        user: user.into(),
    }))
}

/// Current user
pub async fn get_current_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthPayload>,
) -> ApiResult<Json<UserResponse>> {
    let user = resolve_caller(&state, &auth).await?;
    Ok(Json(user.into()))
}

/// Paginated list of users
pub async fn list_users(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListQuery>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.store.list_users(query.page()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
