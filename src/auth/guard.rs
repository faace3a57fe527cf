//! Guard middleware for the admin routes
//!
//! Every request under `/api/admin` (except the auth endpoint itself)
//! passes through here. A missing cookie and a revoked/unknown token are
//! reported distinctly, both as 401 envelopes.

use crate::auth::{cookie_token, ADMIN_COOKIE};
use crate::core::error::{AuthError, BackofficeError};
use crate::server::state::AppState;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Reject requests that do not carry a valid admin session cookie
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(token) = cookie_token(request.headers()) else {
        tracing::debug!(cookie = ADMIN_COOKIE, "admin request without session cookie");
        return BackofficeError::Auth(AuthError::MissingToken).into_response();
    };

    if !state.sessions.verify(&token) {
        tracing::debug!("admin request with unknown or revoked token");
        return BackofficeError::Auth(AuthError::InvalidToken).into_response();
    }

    next.run(request).await
}
