//! Public endpoints: contact form, product catalog, career listings
//!
//! These are the routes anonymous visitors hit. The catalog and career
//! listings only ever expose active records; the contact form and job
//! applications are the two public writes.

use crate::core::envelope::Envelope;
use crate::core::error::{ApiResult, RequestError};
use crate::core::extract::ValidatedJson;
use crate::core::query::SearchQuery;
use crate::core::repository::Collection;
use crate::entities::{Application, ApplicationDraft, ContactRequest, Job, Message, Product};
use crate::server::routes::apply_facet_param;
use crate::server::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/contact", post(contact))
        .route("/api/products", get(catalog))
        .route("/api/careers", get(careers))
        .route("/api/careers/{id}/apply", post(apply))
}

// =============================================================================
// Contact form
// =============================================================================

/// Validated lead-form submission; lands in the admin inbox as unread mail
pub async fn contact(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> ApiResult<Envelope<Message>> {
    let message = state
        .messages
        .create(Message::receive(request.into_message()))
        .await?;
    tracing::info!(id = %message.id, "contact form submission received");

    Ok(Envelope::ok_with_message(
        message,
        "Your request has been submitted successfully. We will contact you within 24 hours.",
    ))
}

// =============================================================================
// Product catalog
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// Active products, optionally narrowed by search term and category
pub async fn catalog(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> ApiResult<Envelope<Vec<Product>>> {
    let mut query = SearchQuery::new().with_facet_value("status", "active");
    if let Some(q) = params.q {
        query.set_term(q);
    }
    apply_facet_param(&mut query, "category", params.category);

    let products = query.apply(state.products.list().await?);
    Ok(Envelope::ok(products))
}

// =============================================================================
// Careers
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CareersParams {
    pub q: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub r#type: Option<String>,
}

/// Active job listings with the public page's department/location/type filters
pub async fn careers(
    State(state): State<AppState>,
    Query(params): Query<CareersParams>,
) -> ApiResult<Envelope<Vec<Job>>> {
    let mut query = SearchQuery::new().with_facet_value("active", "active");
    if let Some(q) = params.q {
        query.set_term(q);
    }
    apply_facet_param(&mut query, "department", params.department);
    apply_facet_param(&mut query, "location", params.location);
    apply_facet_param(&mut query, "type", params.r#type);

    let jobs = query.apply(state.jobs.list().await?);
    Ok(Envelope::ok(jobs))
}

/// Application form fields; position and job id come from the posting
#[derive(Debug, Clone, Default, Deserialize, validator::Validate)]
pub struct ApplyRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[validate(length(min = 1, message = "Resume is required"))]
    pub resume_name: String,

    #[serde(default)]
    pub resume_size: u64,
}

/// Submit an application against an active posting. On success the
/// posting's applications counter moves up; a closed posting answers 400.
pub async fn apply(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<ApplyRequest>,
) -> ApiResult<(StatusCode, Envelope<Application>)> {
    let job = state.jobs.require(&id).await?;
    if !job.is_active {
        return Err(RequestError::InvalidParameter {
            name: "id",
            message: "this position is no longer accepting applications".to_string(),
        }
        .into());
    }

    let application = state
        .applications
        .create(Application::submit(ApplicationDraft {
            name: request.name,
            email: request.email,
            phone: request.phone,
            position: job.title.clone(),
            message: request.message,
            resume_name: request.resume_name,
            resume_size: request.resume_size,
            job_id: Some(job.id),
        }))
        .await?;

    // Counter bump is best-effort bookkeeping on the posting; the
    // application itself is already committed.
    let mut counted = job.clone();
    counted.applications_count += 1;
    if let Err(e) = state.jobs.update(&job.id, counted).await {
        tracing::warn!(job = %job.id, error = %e, "failed to bump applications counter");
    }

    tracing::info!(id = %application.id, job = %job.id, "application submitted");
    Ok((
        StatusCode::CREATED,
        Envelope::ok_with_message(
            application,
            "Your application has been submitted successfully.",
        ),
    ))
}
