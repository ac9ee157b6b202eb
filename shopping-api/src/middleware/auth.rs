/// Bearer token authentication layer
///
/// Verifies the `Authorization` header and injects the resulting
/// [`AuthPayload`] into request extensions, where handlers read it with
/// `Extension<AuthPayload>`. Any failure short-circuits with 401.

use crate::{app::AppState, error::ApiError};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use shopping_shared::auth::middleware::{authenticate, AuthPayload};

/// Authentication middleware, installed with `from_fn_with_state`
pub async fn jwt_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let payload: AuthPayload = authenticate(auth_header, state.token_secret())
        .inspect_err(|e| tracing::debug!(error = %e, "Rejected request credentials"))?;

    req.extensions_mut().insert(payload);

    Ok(next.run(req).await)
}
