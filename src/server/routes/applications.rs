//! Job application review endpoints
//!
//! Applications are created from the public careers page; the admin
//! screen searches them, filters by pipeline status and moves the status.

use crate::core::envelope::Envelope;
use crate::core::error::ApiResult;
use crate::core::paginate::Paginated;
use crate::core::query::SearchQuery;
use crate::core::repository::Collection;
use crate::entities::{Application, ApplicationUpdate};
use crate::server::routes::{apply_facet_param, list_page, page_request, require_id_param};
use crate::server::state::AppState;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/applications", get(list).delete(delete_by_query))
        .route(
            "/applications/{id}",
            get(fetch).patch(update).delete(remove),
        )
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub status: Option<String>,
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
) -> ApiResult<Envelope<Paginated<Application>>> {
    let mut query = SearchQuery::new();
    if let Some(q) = params.q {
        query.set_term(q);
    }
    apply_facet_param(&mut query, "status", params.status);

    let page = page_request(&state, params.page, params.per_page);
    Ok(Envelope::ok(
        list_page(&state.applications, &query, &page).await?,
    ))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Envelope<Application>> {
    Ok(Envelope::ok(state.applications.require(&id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ApplicationUpdate>,
) -> ApiResult<Envelope<Application>> {
    let application = state.applications.require(&id).await?;
    let updated = state
        .applications
        .update(&id, patch.apply_to(&application))
        .await?;
    tracing::info!(id = %updated.id, status = %updated.status, "application updated");
    Ok(Envelope::ok_with_message(
        updated,
        "Application status has been updated successfully.",
    ))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Envelope<()>> {
    state.applications.delete(&id).await?;
    tracing::info!(%id, "application deleted");
    Ok(Envelope::message_only("Application deleted"))
}

pub async fn delete_by_query(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<Envelope<()>> {
    let id = require_id_param(params.id)?;
    remove(State(state), Path(id)).await
}
