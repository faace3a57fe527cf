//! Route assembly and shared handler helpers
//!
//! The admin API lives under `/api/admin`, cookie-gated except for the
//! auth endpoint. Public endpoints (contact form, product catalog, career
//! listings) sit under `/api`. Every response speaks the JSON envelope.

pub mod applications;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod jobs;
pub mod messages;
pub mod products;
pub mod public;
pub mod settings;

use crate::auth::guard::require_admin;
use crate::core::error::{ApiResult, RequestError};
use crate::core::paginate::{PageRequest, Paginated, paginate};
use crate::core::query::SearchQuery;
use crate::core::record::{Faceted, Searchable};
use crate::core::repository::Collection;
use crate::server::state::AppState;
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let admin_api = Router::new()
        .merge(categories::routes())
        .merge(products::routes())
        .merge(jobs::routes())
        .merge(applications::routes())
        .merge(messages::routes())
        .merge(settings::routes())
        .merge(dashboard::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let admin = Router::new().merge(auth::routes()).merge(admin_api);

    Router::new()
        .merge(health_routes())
        .merge(public::routes())
        .nest("/api/admin", admin)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "backoffice"
    }))
}

// =============================================================================
// Shared handler helpers
// =============================================================================

/// Run one list query: load the collection, apply search + facets, slice
/// the requested page. The filtered view is recomputed per request, so it
/// can never be stale relative to the store.
pub(crate) async fn list_page<T>(
    collection: &Arc<dyn Collection<T>>,
    query: &SearchQuery,
    page: &PageRequest,
) -> ApiResult<Paginated<T>>
where
    T: Searchable + Faceted,
{
    let records = collection.list().await?;
    Ok(paginate(query.apply(records), page))
}

/// Add a single-valued facet selection unless the client asked for "all"
pub(crate) fn apply_facet_param(query: &mut SearchQuery, facet: &str, value: Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() && value != "all" {
            query.set_facet(facet, vec![value]);
        }
    }
}

/// Page request from optional params, falling back to the configured page size
pub(crate) fn page_request(state: &AppState, page: Option<usize>, per_page: Option<usize>) -> PageRequest {
    PageRequest::new(
        page.unwrap_or(1),
        per_page.unwrap_or(state.config.page_size),
    )
}

/// The id for root-level `DELETE /{collection}?id=` requests, which the
/// admin screens still issue alongside the canonical path form
pub(crate) fn require_id_param(id: Option<Uuid>) -> ApiResult<Uuid> {
    id.ok_or_else(|| RequestError::MissingParameter { name: "id" }.into())
}
