//! Domain services used by the websocket route.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the feed's business logic — validation, enrichment,
//! history, session registry, fan-out — so the route handler stays focused
//! on protocol translation.

pub mod hub;
pub mod session;
pub mod simulator;
