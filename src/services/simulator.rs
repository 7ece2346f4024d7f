//! Demo feed simulator — canned traffic when no real model is configured.
//!
//! DESIGN
//! ======
//! A background task submits a random canned message from a random canned
//! user every 2–5 seconds, through the exact same `hub::submit` path as a
//! real client. Runs only when the remote classifier is absent (the lexicon
//! still scores the canned lines), unless `SIMULATOR` forces it on or off.

use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::services::hub;
use crate::state::AppState;

const DEFAULT_MIN_INTERVAL_MS: u64 = 2000;
const DEFAULT_MAX_INTERVAL_MS: u64 = 5000;

const USERS: &[&str] = &["Alice", "Bob", "Charlie", "Diana"];

const MESSAGES: &[&str] = &[
    "I'm so happy today!",
    "This is really frustrating.",
    "That's an interesting point.",
    "I'm completely thrilled with the results!",
    "Ugh, what a terrible day.",
    "I'm feeling a bit down.",
    "Haha, that's hilarious!",
    "I'm genuinely surprised by that outcome.",
    "I'm filled with joy and excitement!",
    "This makes me angry!",
    "I'm very sad to hear that.",
    "Fear not, we shall overcome!",
    "I'm disgusted by their actions.",
    "What a pleasant surprise!",
];

// =============================================================================
// CONFIG
// =============================================================================

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Whether the simulator should run. `SIMULATOR=1`/`0` overrides the
/// default of "only when the classifier is not remote".
#[must_use]
pub fn enabled(classifier_is_remote: bool) -> bool {
    match std::env::var("SIMULATOR").ok().as_deref() {
        Some("1") | Some("true") => true,
        Some("0") | Some("false") => false,
        _ => !classifier_is_remote,
    }
}

// =============================================================================
// TASK
// =============================================================================

/// Spawn the simulator task. Returns a handle for shutdown.
pub fn spawn_simulator(state: AppState) -> JoinHandle<()> {
    let min_ms = env_parse("SIMULATOR_MIN_INTERVAL_MS", DEFAULT_MIN_INTERVAL_MS);
    let max_ms = env_parse("SIMULATOR_MAX_INTERVAL_MS", DEFAULT_MAX_INTERVAL_MS).max(min_ms + 1);
    info!(min_ms, max_ms, "message simulator starting");

    tokio::spawn(async move {
        loop {
            // Pick outside the await so the thread-local rng is not held
            // across a suspension point.
            let (user, message, pause_ms) = {
                let mut rng = rand::rng();
                let user = *USERS.choose(&mut rng).unwrap_or(&USERS[0]);
                let message = *MESSAGES.choose(&mut rng).unwrap_or(&MESSAGES[0]);
                (user, message, rng.random_range(min_ms..max_ms))
            };

            if let Err(e) = hub::submit(&state, user, message).await {
                // Canned inputs are never empty; log and keep going.
                warn!(error = %e, "simulated submission rejected");
            }

            tokio::time::sleep(Duration::from_millis(pause_ms)).await;
        }
    })
}

// =============================================================================
// TESTS
// =============================================================================
