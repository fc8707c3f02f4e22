// HTTP + WebSocket read surface over the telemetry store

mod http;
mod ws;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::store::TelemetryStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: Arc<TelemetryStore>,
}

pub fn app(store: Arc<TelemetryStore>) -> Router {
    let state = AppState { store };
    Router::new()
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/host/current", get(http::host_current_handler)) // GET /api/host/current
        .route("/api/host/info", get(http::host_info_handler)) // GET /api/host/info
        .route("/api/host/summary", get(http::host_summary_handler)) // GET /api/host/summary
        .route("/api/docker", get(http::docker_handler)) // GET /api/docker
        .route("/ws/host", get(ws::ws_host)) // WS /ws/host
        .route("/ws/docker", get(ws::ws_docker)) // WS /ws/docker
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
