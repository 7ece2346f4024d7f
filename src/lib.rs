//! moodfeed — real-time chat feed with a derived emotion signal.
//!
//! ARCHITECTURE
//! ============
//! One websocket per client carries the whole protocol: a one-time history
//! replay on connect, then live fan-out of every accepted submission in a
//! single canonical order. The hub owns the bounded in-memory history; the
//! classifier enriches each message with an emotion label, score, and
//! display swatches before it is appended.

pub mod classifier;
pub mod event;
pub mod routes;
pub mod services;
pub mod state;
pub mod view;
