//! `ChatEvent` — the unit of record and of wire transmission.
//!
//! DESIGN
//! ======
//! Every accepted submission becomes exactly one `ChatEvent`, enriched with
//! the derived emotion fields at creation time and never mutated afterwards.
//! The order clients observe is the order events were appended to the hub's
//! history; `seq` carries that order explicitly so it survives coarse clock
//! resolution (two events in the same wall-clock second still compare).
//!
//! The wire protocol is a pair of tagged JSON enums: clients send
//! `send_message`, the server replies with `current_chat_history` (once, on
//! connect), `new_message` (per accepted submission), and `rejected` (to the
//! submitting client only).

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Foreground swatch used when the classifier does not supply one.
pub const DEFAULT_WORD_COLOR: &str = "white";

// =============================================================================
// CHAT EVENT
// =============================================================================

/// Immutable enriched record of one accepted message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEvent {
    /// Canonical total order, assigned under the hub write lock.
    pub seq: u64,
    pub user: String,
    pub message: String,
    /// Server-assigned display timestamp (`HH:MM:SS`, UTC). Non-decreasing
    /// across events; ordering is carried by `seq`, not by this field.
    pub timestamp: String,
    pub emotion_label: String,
    /// Classifier confidence in `0.0..=1.0`. Always finite.
    pub emotion_score: f64,
    pub emoji: String,
    /// Background swatch for the heatmap cell.
    pub color: String,
    /// Foreground swatch; defaults to [`DEFAULT_WORD_COLOR`].
    pub word_color: String,
}

// =============================================================================
// WIRE MESSAGES
// =============================================================================

/// Messages a client may send over its WebSocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    SendMessage { user: String, message: String },
}

/// Messages the server pushes to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Full history snapshot, sent exactly once on connect, in append order.
    CurrentChatHistory { history: Vec<ChatEvent> },
    /// One accepted submission, fanned out to every connected session.
    NewMessage { event: ChatEvent },
    /// Validation failure, sent to the submitting session only.
    Rejected { reason: String },
}

// =============================================================================
// TIME
// =============================================================================

/// Current time as milliseconds since Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

/// Format epoch milliseconds as a `HH:MM:SS` (UTC) display timestamp.
#[must_use]
pub fn clock_time(ms: i64) -> String {
    let secs = ms.div_euclid(1000).rem_euclid(86_400);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(seq: u64) -> ChatEvent {
        ChatEvent {
            seq,
            user: "alice".into(),
            message: "hello".into(),
            timestamp: "12:34:56".into(),
            emotion_label: "joy".into(),
            emotion_score: 0.92,
            emoji: "😊".into(),
            color: "#FFD700".into(),
            word_color: "#DAA520".into(),
        }
    }

    #[test]
    fn chat_event_json_round_trip() {
        let event = sample_event(7);
        let json = serde_json::to_string(&event).expect("serialize");
        let restored: ChatEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, event);
    }

    #[test]
    fn send_message_wire_shape() {
        let json = r#"{"type":"send_message","user":"bob","message":"world"}"#;
        let parsed: ClientEvent = serde_json::from_str(json).expect("deserialize");
        let ClientEvent::SendMessage { user, message } = parsed;
        assert_eq!(user, "bob");
        assert_eq!(message, "world");
    }

    #[test]
    fn server_events_are_tagged() {
        let json = serde_json::to_string(&ServerEvent::NewMessage { event: sample_event(1) })
            .expect("serialize");
        assert!(json.contains(r#""type":"new_message""#));

        let json = serde_json::to_string(&ServerEvent::CurrentChatHistory { history: vec![] })
            .expect("serialize");
        assert!(json.contains(r#""type":"current_chat_history""#));

        let json = serde_json::to_string(&ServerEvent::Rejected { reason: "empty user".into() })
            .expect("serialize");
        assert!(json.contains(r#""type":"rejected""#));
    }

    #[test]
    fn clock_time_formats_utc() {
        assert_eq!(clock_time(0), "00:00:00");
        // 1970-01-01 13:45:17.250 UTC
        assert_eq!(clock_time((13 * 3600 + 45 * 60 + 17) * 1000 + 250), "13:45:17");
        // Wraps at midnight.
        assert_eq!(clock_time(86_400_000), "00:00:00");
    }

    #[test]
    fn now_ms_is_positive() {
        assert!(now_ms() > 0);
    }
}
