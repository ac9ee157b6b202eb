/// Bearer token authentication
///
/// The HTTP layer hands the raw `Authorization` header to
/// [`authenticate`]; on success the resulting [`AuthPayload`] is stored in
/// the request extensions for handlers to pick up.
///
/// # Example
///
/// ```
/// use shopping_shared::auth::jwt::{create_token, Claims};
/// use shopping_shared::auth::middleware::authenticate;
/// use chrono::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = "a-symmetric-key-of-at-least-32-bytes";
/// let token = create_token(&Claims::new("alice", Duration::minutes(5)), secret)?;
///
/// let payload = authenticate(Some(&format!("Bearer {token}")), secret)?;
/// assert_eq!(payload.username, "alice");
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};

use super::jwt::{validate_token, Claims, JwtError};

/// Authorization scheme accepted by [`authenticate`]
pub const BEARER: &str = "bearer";

/// Identity of a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPayload {
    /// Username the token was issued to
    pub username: String,

    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl From<Claims> for AuthPayload {
    fn from(claims: Claims) -> Self {
        Self {
            expires_at: claims.expires_at(),
            username: claims.sub,
        }
    }
}

/// Error type for authentication
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No authorization header
    #[error("authorization header is not provided")]
    MissingCredentials,

    /// Header isn't `<scheme> <token>` or the scheme isn't bearer
    #[error("{0}")]
    InvalidFormat(String),

    /// Token failed verification
    #[error(transparent)]
    InvalidToken(#[from] JwtError),
}

/// Verifies an `Authorization` header value
///
/// The scheme is matched case-insensitively.
pub fn authenticate(header: Option<&str>, secret: &str) -> Result<AuthPayload, AuthError> {
    let header = header
        .filter(|h| !h.is_empty())
        .ok_or(AuthError::MissingCredentials)?;

    let mut fields = header.split_whitespace();
    let (scheme, token) = match (fields.next(), fields.next(), fields.next()) {
        (Some(scheme), Some(token), None) => (scheme, token),
        _ => {
            return Err(AuthError::InvalidFormat(
                "invalid authorization header format".to_string(),
            ))
        }
    };

    if !scheme.eq_ignore_ascii_case(BEARER) {
        return Err(AuthError::InvalidFormat(format!(
            "unsupported authorization type {scheme}"
        )));
    }

    let claims = validate_token(token, secret)?;
    Ok(AuthPayload::from(claims))
}
