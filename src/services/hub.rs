//! Broadcast hub — validate, classify, append, fan out.
//!
//! DESIGN
//! ======
//! `submit` is the only append path into the message store. Classification
//! happens before the write lock is taken (it may await a remote backend);
//! sequence number, display timestamp, append, and fan-out all happen under
//! one write guard, so the order clients observe is exactly append order
//! even with concurrent senders.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures reject the submission before any state mutation and
//! surface to the sender only. A classifier failure is NOT a rejection: the
//! neutral result is substituted and the message flows through — a scoring
//! hiccup must not drop chat traffic.

use tracing::{info, warn};

use crate::classifier::EmotionResult;
use crate::event::{ChatEvent, DEFAULT_WORD_COLOR, ServerEvent, clock_time, now_ms};
use crate::state::{AppState, FeedState};

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("user name must not be empty")]
    EmptyUser,
    #[error("message must not be empty")]
    EmptyMessage,
}

// =============================================================================
// SUBMIT
// =============================================================================

/// Accept one submission: validate, classify, enrich, append, fan out.
/// Returns the enriched event as appended to the store.
///
/// # Errors
///
/// Returns `SubmitError` when `user` or `message` is empty or
/// whitespace-only. No event is created and nothing is broadcast.
pub async fn submit(state: &AppState, user: &str, message: &str) -> Result<ChatEvent, SubmitError> {
    let user = user.trim();
    let message = message.trim();
    if user.is_empty() {
        return Err(SubmitError::EmptyUser);
    }
    if message.is_empty() {
        return Err(SubmitError::EmptyMessage);
    }

    // Classify outside the lock. Ordering is fixed at append time, so a slow
    // backend delays only this submission, never the feed as a whole.
    let emotion = match state.classifier.classify(message).await {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "classifier failed; substituting neutral");
            EmotionResult::neutral()
        }
    };

    let mut feed = state.feed.write().await;

    let seq = feed.next_seq;
    feed.next_seq += 1;

    // Clamp the display clock so timestamps never run backwards even if the
    // wall clock does.
    let stamp_ms = now_ms().max(feed.last_stamp_ms);
    feed.last_stamp_ms = stamp_ms;

    let event = ChatEvent {
        seq,
        user: user.to_string(),
        message: message.to_string(),
        timestamp: clock_time(stamp_ms),
        emotion_label: emotion.label,
        emotion_score: emotion.score,
        emoji: emotion.emoji,
        color: emotion.color,
        word_color: emotion.word_color.unwrap_or_else(|| DEFAULT_WORD_COLOR.to_string()),
    };

    feed.store.push(event.clone());
    info!(
        seq,
        timestamp = %event.timestamp,
        user = %event.user,
        emotion = %event.emotion_label,
        score = event.emotion_score,
        "message accepted"
    );

    broadcast(&feed, &ServerEvent::NewMessage { event: event.clone() });

    Ok(event)
}

// =============================================================================
// BROADCAST
// =============================================================================

/// Fan out one frame to every session currently in the connected set.
/// Runs under the caller's guard, so no session can register between the
/// append and this delivery pass.
pub fn broadcast(feed: &FeedState, frame: &ServerEvent) {
    for tx in feed.sessions.values().map(|s| &s.tx) {
        // Best-effort: a gone or backed-up session is skipped, not retried.
        let _ = tx.try_send(frame.clone());
    }
}

#[cfg(test)]
#[path = "hub_test.rs"]
mod tests;
