// WebSocket handlers: current slot value on connect, then every change

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use bytes::Bytes;
use serde::Serialize;
use tokio::sync::watch;
use tokio::time::{Duration, Instant, timeout};

use super::AppState;

pub(super) const WS_PING_INTERVAL: Duration = Duration::from_secs(30);
pub(super) const WS_SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub(super) async fn ws_host(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let rx = state.store.dashboard.subscribe();
    ws.on_upgrade(move |socket| async move {
        if let Err(e) = stream_changes(socket, rx, "host").await {
            tracing::info!("Host stream error: {}", e);
        }
    })
}

pub(super) async fn ws_docker(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let rx = state.store.docker.subscribe();
    ws.on_upgrade(move |socket| async move {
        if let Err(e) = stream_changes(socket, rx, "docker").await {
            tracing::info!("Docker stream error: {}", e);
        }
    })
}

/// False when the client is gone or too slow.
async fn send_text(socket: &mut WebSocket, json: String) -> bool {
    let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Text(json.into()))).await;
    matches!(r, Ok(Ok(())))
}

async fn stream_changes<T: Serialize>(
    mut socket: WebSocket,
    mut rx: watch::Receiver<T>,
    stream: &'static str,
) -> anyhow::Result<()> {
    tracing::info!(stream, "Client connected");

    let json = serde_json::to_string(&*rx.borrow_and_update())?;
    if !send_text(&mut socket, json).await {
        return Ok(());
    }

    let mut ping_interval =
        tokio::time::interval_at(Instant::now() + WS_PING_INTERVAL, WS_PING_INTERVAL);
    ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let json = serde_json::to_string(&*rx.borrow_and_update())?;
                if !send_text(&mut socket, json).await {
                    break;
                }
            }
            _ = ping_interval.tick() => {
                let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Ping(Bytes::new()))).await;
                if !matches!(r, Ok(Ok(()))) {
                    break;
                }
            }
        }
    }
    tracing::info!(stream, "Client disconnected");
    Ok(())
}
