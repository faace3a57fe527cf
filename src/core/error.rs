//! Typed error handling for the backoffice crate
//!
//! One top-level [`BackofficeError`] wraps a category enum per concern so
//! handlers and tests can match specific failures instead of string
//! matching. Every error knows its HTTP status code, a machine-readable
//! code, and renders itself into the JSON envelope.
//!
//! # Error Categories
//!
//! - [`CollectionError`]: collection store operations (CRUD)
//! - [`ValidationError`]: input validation
//! - [`AuthError`]: admin authentication
//! - [`RequestError`]: malformed HTTP requests
//! - [`ConfigError`]: configuration loading

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the backoffice crate
#[derive(Debug, Error)]
pub enum BackofficeError {
    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body, rendered inside the standard envelope shape
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,

    /// Error code for programmatic handling
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional per-field details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

impl BackofficeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BackofficeError::Collection(e) => e.status_code(),
            BackofficeError::Validation(e) => e.status_code(),
            BackofficeError::Auth(e) => e.status_code(),
            BackofficeError::Request(e) => e.status_code(),
            BackofficeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BackofficeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BackofficeError::Collection(e) => e.error_code(),
            BackofficeError::Validation(e) => e.error_code(),
            BackofficeError::Auth(e) => e.error_code(),
            BackofficeError::Request(e) => e.error_code(),
            BackofficeError::Config(_) => "CONFIG_ERROR",
            BackofficeError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to the envelope-shaped error body
    pub fn to_body(&self) -> ErrorBody {
        let fields = match self {
            BackofficeError::Validation(ValidationError::Fields(errors)) => Some(errors.clone()),
            _ => None,
        };

        ErrorBody {
            success: false,
            code: self.error_code().to_string(),
            message: self.to_string(),
            fields,
        }
    }
}

impl IntoResponse for BackofficeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_body());
        (status, body).into_response()
    }
}

// =============================================================================
// Collection Errors
// =============================================================================

/// Errors raised by collection store operations
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: &'static str, id: Uuid },

    #[error("{resource} with id '{id}' already exists")]
    AlreadyExists { resource: &'static str, id: Uuid },

    #[error("A {resource} named '{name}' already exists")]
    DuplicateName { resource: &'static str, name: String },

    #[error("Collection lock poisoned")]
    LockPoisoned,
}

impl CollectionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CollectionError::NotFound { .. } => StatusCode::NOT_FOUND,
            CollectionError::AlreadyExists { .. } => StatusCode::CONFLICT,
            CollectionError::DuplicateName { .. } => StatusCode::BAD_REQUEST,
            CollectionError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CollectionError::NotFound { .. } => "NOT_FOUND",
            CollectionError::AlreadyExists { .. } => "ALREADY_EXISTS",
            CollectionError::DuplicateName { .. } => "DUPLICATE_NAME",
            CollectionError::LockPoisoned => "STORE_UNAVAILABLE",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Validation error for field '{field}': {message}")]
    Field { field: String, message: String },

    #[error("Validation failed: {}", format_fields(.0))]
    Fields(Vec<FieldError>),

    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    #[error("'{value}' is not a valid {kind}")]
    InvalidValue { kind: &'static str, value: String },
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::Fields(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::Field { .. } => "VALIDATION_ERROR",
            ValidationError::Fields(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
            ValidationError::InvalidValue { .. } => "INVALID_VALUE",
        }
    }
}

// =============================================================================
// Auth Errors
// =============================================================================

/// Errors related to admin authentication
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authentication required")]
    MissingToken,

    #[error("Session expired or invalid")]
    InvalidToken,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::MissingToken => "MISSING_TOKEN",
            AuthError::InvalidToken => "INVALID_TOKEN",
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to malformed HTTP requests
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{name} is required")]
    MissingParameter { name: &'static str },

    #[error("Invalid value for '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("Invalid id format: '{value}'")]
    InvalidId { value: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::MissingParameter { .. } => "MISSING_PARAMETER",
            RequestError::InvalidParameter { .. } => "INVALID_PARAMETER",
            RequestError::InvalidId { .. } => "INVALID_ID",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for BackofficeError {
    fn from(err: serde_json::Error) -> Self {
        BackofficeError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for BackofficeError {
    fn from(err: serde_yaml::Error) -> Self {
        BackofficeError::Config(ConfigError::ParseError {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for BackofficeError {
    fn from(err: std::io::Error) -> Self {
        BackofficeError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<uuid::Error> for BackofficeError {
    fn from(err: uuid::Error) -> Self {
        BackofficeError::Request(RequestError::InvalidId {
            value: err.to_string(),
        })
    }
}

impl From<validator::ValidationErrors> for BackofficeError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", e.code));
                    FieldError::new(field.to_string(), message)
                })
            })
            .collect();
        BackofficeError::Validation(ValidationError::Fields(fields))
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for handler and service operations
pub type ApiResult<T> = Result<T, BackofficeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status_and_code() {
        let err: BackofficeError = CollectionError::NotFound {
            resource: "product",
            id: Uuid::nil(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(err.to_string().contains("product"));
    }

    #[test]
    fn test_duplicate_name_is_bad_request() {
        let err: BackofficeError = CollectionError::DuplicateName {
            resource: "category",
            name: "Electronics".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("Electronics"));
    }

    #[test]
    fn test_field_errors_render_in_body() {
        let err: BackofficeError = ValidationError::Fields(vec![
            FieldError::new("email", "invalid format"),
            FieldError::new("phone", "required"),
        ])
        .into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = err.to_body();
        assert!(!body.success);
        let fields = body.fields.expect("fields should be present");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "email");
    }

    #[test]
    fn test_auth_errors_are_unauthorized() {
        for err in [
            AuthError::InvalidCredentials,
            AuthError::MissingToken,
            AuthError::InvalidToken,
        ] {
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err: BackofficeError = json_err.into();
        assert!(matches!(
            err,
            BackofficeError::Validation(ValidationError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_body_serialization_shape() {
        let err: BackofficeError = AuthError::InvalidCredentials.into();
        let value = serde_json::to_value(err.to_body()).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["code"], "INVALID_CREDENTIALS");
        assert_eq!(value["message"], "Invalid email or password");
        assert!(value.get("fields").is_none());
    }
}
