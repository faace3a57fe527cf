//! Site settings endpoints (singleton)

use crate::core::envelope::Envelope;
use crate::core::error::ApiResult;
use crate::core::extract::ValidatedJson;
use crate::entities::SiteSettings;
use crate::server::state::AppState;
use axum::Router;
use axum::extract::State;
use axum::routing::get;

pub fn routes() -> Router<AppState> {
    Router::new().route("/settings", get(fetch).put(save))
}

pub async fn fetch(State(state): State<AppState>) -> ApiResult<Envelope<SiteSettings>> {
    Ok(Envelope::ok(state.settings()?))
}

/// The settings form always submits the full record, so saving is a
/// wholesale replace rather than a partial patch.
pub async fn save(
    State(state): State<AppState>,
    ValidatedJson(settings): ValidatedJson<SiteSettings>,
) -> ApiResult<Envelope<SiteSettings>> {
    let saved = state.replace_settings(settings)?;
    tracing::info!("site settings saved");
    Ok(Envelope::ok_with_message(
        saved,
        "Settings saved successfully.",
    ))
}
