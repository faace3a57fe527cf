//! Product management endpoints
//!
//! Search covers name, SKU and category; category and status arrive as
//! single-valued filter params ("all" disables a filter).

use crate::core::envelope::Envelope;
use crate::core::error::ApiResult;
use crate::core::extract::ValidatedJson;
use crate::core::paginate::Paginated;
use crate::core::query::SearchQuery;
use crate::core::repository::Collection;
use crate::entities::{Product, ProductDraft, ProductUpdate};
use crate::server::routes::{apply_facet_param, list_page, page_request, require_id_param};
use crate::server::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list).post(create).delete(delete_by_query))
        .route("/products/{id}", get(fetch).patch(update).delete(remove))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub category: Option<String>,
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
) -> ApiResult<Envelope<Paginated<Product>>> {
    let mut query = SearchQuery::new();
    if let Some(q) = params.q {
        query.set_term(q);
    }
    apply_facet_param(&mut query, "category", params.category);
    apply_facet_param(&mut query, "status", params.status);

    let page = page_request(&state, params.page, params.per_page);
    Ok(Envelope::ok(
        list_page(&state.products, &query, &page).await?,
    ))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Envelope<Product>> {
    Ok(Envelope::ok(state.products.require(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<ProductDraft>,
) -> ApiResult<(StatusCode, Envelope<Product>)> {
    let product = state.products.create(Product::create(draft)).await?;
    tracing::info!(id = %product.id, sku = %product.sku, "product created");
    Ok((StatusCode::CREATED, Envelope::ok(product)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(patch): ValidatedJson<ProductUpdate>,
) -> ApiResult<Envelope<Product>> {
    let product = state.products.require(&id).await?;
    let updated = state.products.update(&id, patch.apply_to(&product)).await?;
    tracing::info!(id = %updated.id, "product updated");
    Ok(Envelope::ok(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Envelope<()>> {
    state.products.delete(&id).await?;
    tracing::info!(%id, "product deleted");
    Ok(Envelope::message_only("Product deleted"))
}

pub async fn delete_by_query(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<Envelope<()>> {
    let id = require_id_param(params.id)?;
    remove(State(state), Path(id)).await
}
