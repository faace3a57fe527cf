//! Job posting management endpoints
//!
//! Full CRUD plus the activation toggle used by the career admin screen.

use crate::core::envelope::Envelope;
use crate::core::error::ApiResult;
use crate::core::extract::ValidatedJson;
use crate::core::paginate::Paginated;
use crate::core::query::SearchQuery;
use crate::core::repository::Collection;
use crate::entities::{Job, JobDraft, JobUpdate};
use crate::server::routes::{apply_facet_param, list_page, page_request, require_id_param};
use crate::server::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(list).post(create).delete(delete_by_query))
        .route("/jobs/{id}", get(fetch).patch(update).delete(remove))
        .route("/jobs/{id}/toggle", post(toggle))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    /// Employment type filter ("Full-time", "Contract", ...)
    pub r#type: Option<String>,
    pub active: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<Uuid>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Envelope<Paginated<Job>>> {
    let mut query = SearchQuery::new();
    if let Some(q) = params.q {
        query.set_term(q);
    }
    apply_facet_param(&mut query, "department", params.department);
    apply_facet_param(&mut query, "location", params.location);
    apply_facet_param(&mut query, "type", params.r#type);
    apply_facet_param(&mut query, "active", params.active);

    let page = page_request(&state, params.page, params.per_page);
    Ok(Envelope::ok(list_page(&state.jobs, &query, &page).await?))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Envelope<Job>> {
    Ok(Envelope::ok(state.jobs.require(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<JobDraft>,
) -> ApiResult<(StatusCode, Envelope<Job>)> {
    let job = state.jobs.create(Job::create(draft)).await?;
    tracing::info!(id = %job.id, title = %job.title, "job created");
    Ok((StatusCode::CREATED, Envelope::ok(job)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(patch): ValidatedJson<JobUpdate>,
) -> ApiResult<Envelope<Job>> {
    let job = state.jobs.require(&id).await?;
    let updated = state.jobs.update(&id, patch.apply_to(&job)).await?;
    tracing::info!(id = %updated.id, "job updated");
    Ok(Envelope::ok(updated))
}

/// Flip the posting's visibility on the public careers page
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Envelope<Job>> {
    let job = state.jobs.require(&id).await?;
    let patch = JobUpdate {
        is_active: Some(!job.is_active),
        ..Default::default()
    };
    let updated = state.jobs.update(&id, patch.apply_to(&job)).await?;

    let message = if updated.is_active {
        "Job activated"
    } else {
        "Job deactivated"
    };
    tracing::info!(id = %updated.id, active = updated.is_active, "job toggled");
    Ok(Envelope::ok_with_message(updated, message))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Envelope<()>> {
    state.jobs.delete(&id).await?;
    tracing::info!(%id, "job deleted");
    Ok(Envelope::message_only("Job deleted"))
}

pub async fn delete_by_query(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<Envelope<()>> {
    let id = require_id_param(params.id)?;
    remove(State(state), Path(id)).await
}
