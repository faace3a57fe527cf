//! Admin authentication
//!
//! A single shared credential guards the back office. Logging in issues
//! an opaque token, remembered server-side and delivered to the browser
//! as an HTTP-only cookie; the guard middleware checks it on every admin
//! request. Logging out revokes the token and clears the cookie.

pub mod guard;

use crate::config::AdminAccount;
use crate::core::error::{AuthError, BackofficeError};
use axum::http::HeaderMap;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::RwLock;
use uuid::Uuid;

/// Name of the session cookie
pub const ADMIN_COOKIE: &str = "admin_token";

/// Cookie lifetime: 7 days
const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;

/// The authenticated admin identity returned by the login endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AdminUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub permissions: Vec<String>,
}

impl AdminUser {
    /// Build the admin identity from the configured account
    pub fn from_account(account: &AdminAccount) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: account.email.clone(),
            name: account.name.clone(),
            role: "admin".to_string(),
            permissions: vec![
                "read".to_string(),
                "write".to_string(),
                "delete".to_string(),
            ],
        }
    }
}

/// Server-side registry of issued session tokens
#[derive(Debug, Default)]
pub struct SessionStore {
    tokens: RwLock<HashSet<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh opaque token for the given email and remember it
    pub fn issue(&self, email: &str) -> Result<String, BackofficeError> {
        let token = BASE64.encode(format!("{email}:{}", Uuid::new_v4()));
        self.tokens
            .write()
            .map_err(|_| BackofficeError::Internal("session store lock poisoned".to_string()))?
            .insert(token.clone());
        Ok(token)
    }

    /// Check whether a token was issued and not yet revoked
    pub fn verify(&self, token: &str) -> bool {
        self.tokens
            .read()
            .map(|tokens| tokens.contains(token))
            .unwrap_or(false)
    }

    /// Revoke a token (logout)
    pub fn revoke(&self, token: &str) -> Result<(), BackofficeError> {
        self.tokens
            .write()
            .map_err(|_| BackofficeError::Internal("session store lock poisoned".to_string()))?
            .remove(token);
        Ok(())
    }
}

/// Extract the admin session token from the request's Cookie header
pub fn cookie_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == ADMIN_COOKIE).then(|| value.to_string())
    })
}

/// Set-Cookie value installing the session cookie
pub fn session_cookie(token: &str) -> String {
    format!(
        "{ADMIN_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={COOKIE_MAX_AGE_SECS}"
    )
}

/// Set-Cookie value clearing the session cookie
pub fn clear_cookie() -> String {
    format!("{ADMIN_COOKIE}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0")
}

/// Check a login attempt against the configured account.
///
/// Both fields must be present and match exactly; any mismatch yields the
/// same `InvalidCredentials` error so the response does not reveal which
/// half was wrong.
pub fn check_credentials(
    account: &AdminAccount,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    if email == account.email && password == account.password {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}
