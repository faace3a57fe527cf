//! JSON envelope shared by every endpoint
//!
//! All handlers respond with `{ success, data?, message? }`. Error
//! responses are produced by the error module and carry `success: false`
//! plus a machine-readable `code`.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The success envelope wrapping every response body
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// A successful response carrying data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// A successful response carrying data and a human-readable message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl Envelope<()> {
    /// A successful response with no data, only a message
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
