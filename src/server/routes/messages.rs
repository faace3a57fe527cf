//! Inbox endpoints
//!
//! Beyond plain CRUD the messages screen needs bulk actions over the
//! selection set and a CSV export of the selected rows.

use crate::core::envelope::Envelope;
use crate::core::error::{ApiResult, CollectionError, RequestError};
use crate::core::paginate::Paginated;
use crate::core::query::SearchQuery;
use crate::core::repository::Collection;
use crate::entities::message::{BulkAction, export_csv};
use crate::entities::{Message, MessageUpdate};
use crate::server::routes::{apply_facet_param, list_page, page_request, require_id_param};
use crate::server::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(list).delete(delete_by_query))
        .route("/messages/export", get(export))
        .route("/messages/bulk", post(bulk))
        .route("/messages/{id}", get(fetch).patch(update).delete(remove))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    /// "all", "read" or "unread"
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
) -> ApiResult<Envelope<Paginated<Message>>> {
    let mut query = SearchQuery::new();
    if let Some(q) = params.q {
        query.set_term(q);
    }
    apply_facet_param(&mut query, "status", params.status);

    let page = page_request(&state, params.page, params.per_page);
    Ok(Envelope::ok(
        list_page(&state.messages, &query, &page).await?,
    ))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Envelope<Message>> {
    Ok(Envelope::ok(state.messages.require(&id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<MessageUpdate>,
) -> ApiResult<Envelope<Message>> {
    let message = state.messages.require(&id).await?;
    let updated = state.messages.update(&id, patch.apply_to(&message)).await?;
    Ok(Envelope::ok(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Envelope<()>> {
    state.messages.delete(&id).await?;
    tracing::info!(%id, "message deleted");
    Ok(Envelope::message_only("Message deleted"))
}

pub async fn delete_by_query(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<Envelope<()>> {
    let id = require_id_param(params.id)?;
    remove(State(state), Path(id)).await
}

// =============================================================================
// Bulk actions
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct BulkRequest {
    pub ids: Vec<Uuid>,
    pub action: BulkAction,
}

#[derive(Debug, Serialize)]
pub struct BulkOutcome {
    pub affected: usize,
}

/// Apply one action to every selected id. Ids that no longer exist are
/// skipped rather than failing the whole batch; the response reports how
/// many rows were actually touched so the client can clear its selection.
pub async fn bulk(
    State(state): State<AppState>,
    Json(body): Json<BulkRequest>,
) -> ApiResult<Envelope<BulkOutcome>> {
    let mut affected = 0;

    match body.action {
        BulkAction::MarkRead | BulkAction::MarkUnread => {
            let read = body.action == BulkAction::MarkRead;
            let patch = MessageUpdate { read: Some(read) };
            for id in &body.ids {
                if let Some(message) = state.messages.get(id).await? {
                    state.messages.update(id, patch.apply_to(&message)).await?;
                    affected += 1;
                }
            }
        }
        BulkAction::Delete => {
            for id in &body.ids {
                match state.messages.delete(id).await {
                    Ok(()) => affected += 1,
                    Err(CollectionError::NotFound { .. }) => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    let verb = match body.action {
        BulkAction::MarkRead => "marked read",
        BulkAction::MarkUnread => "marked unread",
        BulkAction::Delete => "deleted",
    };
    tracing::info!(affected, action = verb, "bulk message action");
    Ok(Envelope::ok_with_message(
        BulkOutcome { affected },
        format!("{affected} messages {verb}"),
    ))
}

// =============================================================================
// CSV export
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ExportParams {
    /// Comma-separated ids; absent means "export everything"
    pub ids: Option<String>,
}

pub async fn export(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> ApiResult<Response> {
    let messages = state.messages.list().await?;

    let rows = match params.ids {
        Some(raw) => {
            let wanted = parse_id_list(&raw)?;
            messages
                .into_iter()
                .filter(|m| wanted.contains(&m.id))
                .collect()
        }
        None => messages,
    };

    let csv = export_csv(&rows);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"messages-export.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

fn parse_id_list(raw: &str) -> ApiResult<HashSet<Uuid>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Uuid::parse_str(s).map_err(|_| -> crate::core::error::BackofficeError {
                RequestError::InvalidId {
                    value: s.to_string(),
                }
                .into()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let parsed = parse_id_list(&format!("{a}, {b},")).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(parsed.contains(&a));

        assert!(parse_id_list("not-a-uuid").is_err());
    }
}
