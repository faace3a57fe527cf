//! Admin sign-in and sign-out
//!
//! POST issues a session token and installs the HTTP-only cookie; DELETE
//! revokes the token and clears the cookie. Failed logins always answer
//! 401 with the same message.

use crate::auth::{
    AdminUser, check_credentials, clear_cookie, cookie_token, session_cookie,
};
use crate::core::envelope::Envelope;
use crate::core::error::{ApiResult, RequestError};
use crate::server::state::AppState;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth", post(login).delete(logout))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response; the token is also set as an HTTP-only cookie
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: AdminUser,
    pub token: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Response> {
    if body.email.trim().is_empty() {
        return Err(RequestError::MissingParameter { name: "email" }.into());
    }
    if body.password.is_empty() {
        return Err(RequestError::MissingParameter { name: "password" }.into());
    }

    check_credentials(&state.config.admin, &body.email, &body.password)?;

    let token = state.sessions.issue(&body.email)?;
    let user = AdminUser::from_account(&state.config.admin);
    tracing::info!(email = %body.email, "admin signed in");

    let response = LoginResponse {
        success: true,
        message: "Authentication successful".to_string(),
        user,
        token: token.clone(),
    };

    Ok((
        [(header::SET_COOKIE, session_cookie(&token))],
        Json(response),
    )
        .into_response())
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Response> {
    if let Some(token) = cookie_token(&headers) {
        state.sessions.revoke(&token)?;
        tracing::info!("admin signed out");
    }

    Ok((
        [(header::SET_COOKIE, clear_cookie())],
        Envelope::message_only("Signed out"),
    )
        .into_response())
}
