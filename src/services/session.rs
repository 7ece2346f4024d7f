//! Session management — connect with replay, idempotent disconnect.
//!
//! DESIGN
//! ======
//! `connect` takes the hub write lock once and, under that single guard,
//! snapshots the history AND registers the session's outbound channel. The
//! replay frame is queued on the channel before registration completes, so
//! the channel's FIFO order is the delivery order: replay first, then every
//! live event appended after the snapshot — none duplicated, none skipped
//! across the replay/live boundary.

use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

use crate::event::{ChatEvent, ServerEvent, now_ms};
use crate::state::{AppState, SessionHandle};

// =============================================================================
// CONNECT
// =============================================================================

/// Register a new session and queue its one-time replay batch.
/// Returns the replayed events (in append order) for logging and tests.
pub async fn connect(
    state: &AppState,
    session_id: Uuid,
    tx: mpsc::Sender<ServerEvent>,
) -> Vec<ChatEvent> {
    let connected_at = now_ms();
    let mut feed = state.feed.write().await;

    let history = feed.store.snapshot();
    // A fresh channel always has room for the replay frame.
    let _ = tx.try_send(ServerEvent::CurrentChatHistory { history: history.clone() });

    feed.sessions.insert(session_id, SessionHandle { tx, connected_at });
    info!(
        %session_id,
        sessions = feed.sessions.len(),
        replayed = history.len(),
        "session connected"
    );

    history
}

// =============================================================================
// DISCONNECT
// =============================================================================

/// Remove a session from the broadcast set. Idempotent — a second call for
/// the same id is a no-op.
pub async fn disconnect(state: &AppState, session_id: Uuid) {
    let mut feed = state.feed.write().await;
    if feed.sessions.remove(&session_id).is_some() {
        info!(%session_id, remaining = feed.sessions.len(), "session disconnected");
    }
}

/// Number of currently connected sessions.
pub async fn session_count(state: &AppState) -> usize {
    state.feed.read().await.sessions.len()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
