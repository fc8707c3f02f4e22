// GET handlers: version and current store snapshots

use axum::{extract::State, response::IntoResponse};

use super::AppState;
use crate::{NAME, VERSION};
use crate::view::DashboardSummary;

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/host/current — the full dashboard state.
pub(super) async fn host_current_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.store.dashboard.get())
}

/// GET /api/host/info — host identity only.
pub(super) async fn host_info_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.store.global.get())
}

/// GET /api/host/summary — dashboard values already formatted for display.
pub(super) async fn host_summary_handler(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now().timestamp();
    let docker = state.store.docker.get();
    let summary = state
        .store
        .dashboard
        .read(|d| DashboardSummary::from_state(d, &docker, now));
    axum::Json(summary)
}

/// GET /api/docker — container and image inventory.
pub(super) async fn docker_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.store.docker.get())
}
