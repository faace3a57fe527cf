//! Dashboard counters
//!
//! One aggregate endpoint feeding the admin landing page tiles.

use crate::core::envelope::Envelope;
use crate::core::error::ApiResult;
use crate::core::repository::Collection;
use crate::entities::ApplicationStatus;
use crate::server::state::AppState;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use serde::Serialize;

pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(stats))
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_products: usize,
    pub active_products: usize,
    pub total_categories: usize,
    pub total_messages: usize,
    pub unread_messages: usize,
    pub total_jobs: usize,
    pub active_jobs: usize,
    pub total_applications: usize,
    pub pending_applications: usize,
}

pub async fn stats(State(state): State<AppState>) -> ApiResult<Envelope<DashboardStats>> {
    let products = state.products.list().await?;
    let messages = state.messages.list().await?;
    let jobs = state.jobs.list().await?;
    let applications = state.applications.list().await?;

    let stats = DashboardStats {
        total_products: products.len(),
        active_products: products.iter().filter(|p| p.is_active()).count(),
        total_categories: state.categories.count().await?,
        total_messages: messages.len(),
        unread_messages: messages.iter().filter(|m| !m.read).count(),
        total_jobs: jobs.len(),
        active_jobs: jobs.iter().filter(|j| j.is_active).count(),
        total_applications: applications.len(),
        pending_applications: applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .count(),
    };

    Ok(Envelope::ok(stats))
}
