//! Category management endpoints
//!
//! Categories enforce case-insensitive name uniqueness on both create and
//! rename.

use crate::core::envelope::Envelope;
use crate::core::error::{ApiResult, CollectionError};
use crate::core::extract::ValidatedJson;
use crate::core::paginate::Paginated;
use crate::core::query::SearchQuery;
use crate::core::repository::Collection;
use crate::entities::{Category, CategoryDraft};
use crate::server::routes::{list_page, page_request, require_id_param};
use crate::server::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(list).post(create).delete(delete_by_query),
        )
        .route(
            "/categories/{id}",
            get(fetch).patch(update).delete(remove),
        )
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
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
) -> ApiResult<Envelope<Paginated<Category>>> {
    let mut query = SearchQuery::new();
    if let Some(q) = params.q {
        query.set_term(q);
    }
    let page = page_request(&state, params.page, params.per_page);
    Ok(Envelope::ok(
        list_page(&state.categories, &query, &page).await?,
    ))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Envelope<Category>> {
    Ok(Envelope::ok(state.categories.require(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<CategoryDraft>,
) -> ApiResult<(StatusCode, Envelope<Category>)> {
    ensure_unique_name(&state.categories, &draft.name, None).await?;

    let category = state.categories.create(Category::create(draft)).await?;
    tracing::info!(id = %category.id, name = %category.name, "category created");
    Ok((StatusCode::CREATED, Envelope::ok(category)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(draft): ValidatedJson<CategoryDraft>,
) -> ApiResult<Envelope<Category>> {
    let mut category = state.categories.require(&id).await?;
    ensure_unique_name(&state.categories, &draft.name, Some(id)).await?;

    category.name = draft.name.trim().to_string();
    let updated = state.categories.update(&id, category).await?;
    tracing::info!(id = %updated.id, "category renamed");
    Ok(Envelope::ok(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Envelope<()>> {
    state.categories.delete(&id).await?;
    tracing::info!(%id, "category deleted");
    Ok(Envelope::message_only("Category deleted"))
}

pub async fn delete_by_query(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<Envelope<()>> {
    let id = require_id_param(params.id)?;
    remove(State(state), Path(id)).await
}

/// Reject a name already carried by a different category
async fn ensure_unique_name(
    categories: &Arc<dyn Collection<Category>>,
    name: &str,
    excluding: Option<Uuid>,
) -> ApiResult<()> {
    let taken = categories
        .list()
        .await?
        .iter()
        .any(|c| Some(c.id) != excluding && c.name_matches(name));

    if taken {
        return Err(CollectionError::DuplicateName {
            resource: "category",
            name: name.trim().to_string(),
        }
        .into());
    }
    Ok(())
}
