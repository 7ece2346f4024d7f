//! WebSocket handler — one session per connection.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → register the session; the replay batch is queued on the
//!    session channel before registration completes, so it is always the
//!    first frame this client receives.
//! 2. `select!` loop: inbound text → parse + submit; queued outbound frames
//!    → forward to the socket.
//! 3. Close (or any socket error) → deregister. A session that vanishes
//!    mid-broadcast is simply skipped by the hub; nothing is rolled back.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::event::{ClientEvent, ServerEvent};
use crate::services::{hub, session};
use crate::state::{AppState, SESSION_CHANNEL_CAPACITY};

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let session_id = Uuid::new_v4();

    // Per-session channel; the hub pushes replay + live frames into it.
    let (tx, mut rx) = mpsc::channel::<ServerEvent>(SESSION_CHANNEL_CAPACITY);
    let replayed = session::connect(&state, session_id, tx).await;
    info!(%session_id, replayed = replayed.len(), "ws: client connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(msg) = msg else { break };
                let Ok(msg) = msg else { break };
                match msg {
                    Message::Text(text) => {
                        for frame in process_inbound_text(&state, session_id, &text).await {
                            let _ = send_frame(&mut socket, &frame).await;
                        }
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            Some(frame) = rx.recv() => {
                if send_frame(&mut socket, &frame).await.is_err() {
                    break;
                }
            }
        }
    }

    session::disconnect(&state, session_id).await;
    info!(%session_id, "ws: client disconnected");
}

// =============================================================================
// INBOUND
// =============================================================================

/// Parse and process one inbound text message, returning frames addressed
/// to the sender only. Accepted submissions produce nothing here — the
/// sender receives its own `new_message` through the fan-out channel like
/// every other session.
///
/// Split out from the socket loop so tests can exercise dispatch without a
/// real websocket.
async fn process_inbound_text(
    state: &AppState,
    session_id: Uuid,
    text: &str,
) -> Vec<ServerEvent> {
    let parsed: ClientEvent = match serde_json::from_str(text) {
        Ok(p) => p,
        Err(e) => {
            warn!(%session_id, error = %e, "ws: invalid inbound message");
            return vec![ServerEvent::Rejected { reason: format!("invalid message: {e}") }];
        }
    };

    let ClientEvent::SendMessage { user, message } = parsed;
    match hub::submit(state, &user, &message).await {
        Ok(_) => vec![],
        Err(e) => vec![ServerEvent::Rejected { reason: e.to_string() }],
    }
}

// =============================================================================
// OUTBOUND
// =============================================================================

async fn send_frame(socket: &mut WebSocket, frame: &ServerEvent) -> Result<(), ()> {
    let json = match serde_json::to_string(frame) {
        Ok(j) => j,
        Err(e) => {
            warn!(error = %e, "ws: failed to serialize frame");
            return Err(());
        }
    };
    socket.send(Message::Text(json.into())).await.map_err(|_| ())
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
