//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the classifier handle and a single `RwLock` over `FeedState`: the
//! bounded message history plus the map of connected sessions. One lock on
//! purpose — taking the write guard makes append+fan-out and
//! snapshot+register each atomic with respect to the other, which is the
//! whole replay/live ordering guarantee.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::classifier::EmotionClassify;
use crate::event::{ChatEvent, ServerEvent};

/// Replay window when `HISTORY_CAPACITY` is not set.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Outbound frames buffered per session before deliveries start dropping.
pub const SESSION_CHANNEL_CAPACITY: usize = 256;

// =============================================================================
// MESSAGE STORE
// =============================================================================

/// Bounded, append-only in-memory log of accepted events. Oldest entry is
/// evicted first once the replay window is full.
#[derive(Debug)]
pub struct MessageStore {
    events: VecDeque<ChatEvent>,
    capacity: usize,
}

impl MessageStore {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { events: VecDeque::with_capacity(capacity.min(1024)), capacity: capacity.max(1) }
    }

    /// Append one event, evicting the single oldest entry if over capacity.
    pub fn push(&mut self, event: ChatEvent) {
        self.events.push_back(event);
        if self.events.len() > self.capacity {
            self.events.pop_front();
        }
    }

    /// Copy of the full current sequence, in append order. Readers never
    /// hold a reference into the store, so appends are never blocked by a
    /// slow consumer of the snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ChatEvent> {
        self.events.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// =============================================================================
// SESSIONS
// =============================================================================

/// One connected client's outbound channel.
pub struct SessionHandle {
    pub tx: mpsc::Sender<ServerEvent>,
    /// Milliseconds since Unix epoch at connect time.
    pub connected_at: i64,
}

// =============================================================================
// FEED STATE
// =============================================================================

/// Everything guarded by the hub lock: history + connected sessions.
pub struct FeedState {
    pub store: MessageStore,
    /// Connected sessions: session id -> outbound sender.
    pub sessions: HashMap<Uuid, SessionHandle>,
    /// Next sequence number to assign. Strictly increasing.
    pub next_seq: u64,
    /// Highest display timestamp handed out, in epoch millis. Clamps the
    /// wall clock so `timestamp` never runs backwards.
    pub last_stamp_ms: i64,
}

impl FeedState {
    #[must_use]
    pub fn new(history_capacity: usize) -> Self {
        Self {
            store: MessageStore::new(history_capacity),
            sessions: HashMap::new(),
            next_seq: 1,
            last_stamp_ms: 0,
        }
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn EmotionClassify>,
    pub feed: Arc<RwLock<FeedState>>,
}

impl AppState {
    #[must_use]
    pub fn new(classifier: Arc<dyn EmotionClassify>, history_capacity: usize) -> Self {
        Self { classifier, feed: Arc::new(RwLock::new(FeedState::new(history_capacity))) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_helpers::dummy_event;

    #[test]
    fn store_keeps_append_order() {
        let mut store = MessageStore::new(10);
        for seq in 1..=5 {
            store.push(dummy_event(seq));
        }
        let seqs: Vec<u64> = store.snapshot().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn store_evicts_oldest_first() {
        let mut store = MessageStore::new(3);
        assert_eq!(store.capacity(), 3);
        for seq in 1..=5 {
            store.push(dummy_event(seq));
            assert!(store.len() <= store.capacity());
        }
        let seqs: Vec<u64> = store.snapshot().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![3, 4, 5]);
    }

    #[test]
    fn store_snapshot_is_a_copy() {
        let mut store = MessageStore::new(3);
        store.push(dummy_event(1));
        let snap = store.snapshot();
        store.push(dummy_event(2));
        assert_eq!(snap.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn store_capacity_floor_is_one() {
        let mut store = MessageStore::new(0);
        assert_eq!(store.capacity(), 1);
        store.push(dummy_event(1));
        store.push(dummy_event(2));
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].seq, 2);
    }

    #[test]
    fn feed_state_starts_empty() {
        let feed = FeedState::new(50);
        assert!(feed.store.is_empty());
        assert!(feed.sessions.is_empty());
        assert_eq!(feed.next_seq, 1);
    }
}
