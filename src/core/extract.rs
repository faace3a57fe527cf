//! Axum extractor for validated request payloads
//!
//! `ValidatedJson<T>` deserializes the JSON body and runs the payload's
//! `validator` rules before the handler sees it. Parse failures become a
//! 400 envelope, rule failures a 422 with per-field details — matching
//! the inline-under-the-field error surfacing the admin forms rely on.

use crate::core::error::{BackofficeError, ValidationError};
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

/// A JSON payload that passed its declared validation rules
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_category(
///     State(state): State<AppState>,
///     ValidatedJson(draft): ValidatedJson<CategoryDraft>,
/// ) -> ApiResult<Envelope<Category>> {
///     // draft is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|e| {
            BackofficeError::Validation(ValidationError::InvalidJson {
                message: e.to_string(),
            })
            .into_response()
        })?;

        payload
            .validate()
            .map_err(|errors| BackofficeError::from(errors).into_response())?;

        Ok(ValidatedJson(payload))
    }
}
