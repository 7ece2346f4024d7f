//! Client view model — transcript plus bounded heatmap.
//!
//! DESIGN
//! ======
//! A pure state machine over the server's event stream, usable by any Rust
//! client and by the equivalence tests. `apply` is one state transition per
//! event; a replay batch clears both views and applies the batch in order,
//! so a client built from replay is indistinguishable from one that watched
//! every event live.
//!
//! The transcript is append-only and unbounded (rendering scrolls); the
//! heatmap keeps only the most recent `HEATMAP_CAPACITY` events, evicting
//! the single oldest entry per insertion.

use std::collections::VecDeque;

use crate::event::{ChatEvent, ServerEvent};

/// Heatmap cells retained per client.
pub const HEATMAP_CAPACITY: usize = 50;

// =============================================================================
// VIEW MODEL
// =============================================================================

#[derive(Debug)]
pub struct ClientViewModel {
    transcript: Vec<ChatEvent>,
    heatmap: VecDeque<ChatEvent>,
    heatmap_capacity: usize,
}

impl ClientViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self::with_heatmap_capacity(HEATMAP_CAPACITY)
    }

    #[must_use]
    pub fn with_heatmap_capacity(capacity: usize) -> Self {
        Self {
            transcript: Vec::new(),
            heatmap: VecDeque::with_capacity(capacity.min(1024)),
            heatmap_capacity: capacity.max(1),
        }
    }

    /// Apply one event: append to the transcript, append to the heatmap,
    /// evict the oldest heatmap entry if over capacity.
    pub fn apply(&mut self, event: ChatEvent) {
        self.heatmap.push_back(event.clone());
        if self.heatmap.len() > self.heatmap_capacity {
            self.heatmap.pop_front();
        }
        self.transcript.push(event);
    }

    /// Rebuild from a replay batch: clear both views, then apply each event
    /// in order exactly as if it had arrived live.
    pub fn replay(&mut self, batch: Vec<ChatEvent>) {
        self.transcript.clear();
        self.heatmap.clear();
        for event in batch {
            self.apply(event);
        }
    }

    /// Route one wire frame into the view. Rejections carry no feed state
    /// and leave the views untouched.
    pub fn observe(&mut self, frame: &ServerEvent) {
        match frame {
            ServerEvent::CurrentChatHistory { history } => self.replay(history.clone()),
            ServerEvent::NewMessage { event } => self.apply(event.clone()),
            ServerEvent::Rejected { .. } => {}
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &[ChatEvent] {
        &self.transcript
    }

    /// Heatmap contents, oldest first.
    #[must_use]
    pub fn heatmap(&self) -> Vec<&ChatEvent> {
        self.heatmap.iter().collect()
    }

    #[must_use]
    pub fn heatmap_len(&self) -> usize {
        self.heatmap.len()
    }
}

impl Default for ClientViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
