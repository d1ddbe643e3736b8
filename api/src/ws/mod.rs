//! WebSocket surface for live slot availability.
//!
//! A single `slots` topic carries full catalog snapshots. Every committed
//! booking and every administrative reset pushes a fresh snapshot, so a
//! connected client never renders stale remaining counts between polls.

use axum::{
    Router,
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::IntoResponse,
    routing::get,
};
use common::state::AppState;
use common::ws::{EventEnvelope, emit};
use futures_util::{SinkExt, StreamExt};

use crate::routes::slots::get::SlotResponse;

pub mod topics {
    pub const SLOTS: &str = "slots";
}

pub const EVENT_SNAPSHOT: &str = "slots.snapshot";

pub fn ws_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/slots", get(slots_ws_handler))
        .with_state(app_state)
}

async fn slots_ws_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| serve_slots(socket, app_state))
}

/// Serves one slot-subscription connection: send the current snapshot on
/// connect, then forward every broadcast until either side goes away.
async fn serve_slots(socket: WebSocket, app_state: AppState) {
    let mut rx = app_state.ws().subscribe(topics::SLOTS).await;
    let (mut sink, mut stream) = socket.split();

    if let Some(initial) = snapshot_json(&app_state).await
        && sink.send(Message::Text(initial.into())).await.is_err()
    {
        return;
    }

    loop {
        tokio::select! {
            broadcast = rx.recv() => {
                match broadcast {
                    Ok(msg) => {
                        if sink.send(Message::Text(msg.into())).await.is_err() {
                            break;
                        }
                    }
                    // Lagged receivers just pick up from the next snapshot;
                    // every message is a full snapshot so nothing is lost.
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
            incoming = stream.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // This topic is broadcast-only; client frames are ignored.
                    Some(Ok(_)) => continue,
                }
            }
        }
    }
}

async fn snapshot_json(state: &AppState) -> Option<String> {
    let slots = fetch_snapshot(state).await?;
    let env = EventEnvelope {
        r#type: "event",
        event: EVENT_SNAPSHOT,
        topic: topics::SLOTS,
        payload: &slots,
        ts: chrono::Utc::now().to_rfc3339(),
    };
    serde_json::to_string(&env).ok()
}

async fn fetch_snapshot(state: &AppState) -> Option<Vec<SlotResponse>> {
    match db::models::session_slot::Model::find_all_ordered(state.db()).await {
        Ok(slots) => Some(slots.into_iter().map(SlotResponse::from).collect()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load slot snapshot for broadcast");
            None
        }
    }
}

/// Broadcasts the current slot catalog to every `slots` subscriber. Called
/// after any write that changes booked counts.
pub async fn emit_slots_snapshot(state: &AppState) {
    if let Some(slots) = fetch_snapshot(state).await {
        emit(state.ws(), topics::SLOTS, EVENT_SNAPSHOT, &slots).await;
    }
}
