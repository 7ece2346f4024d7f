use std::sync::Arc;

use moodfeed::classifier::{ClassifierClient, EmotionClassify};
use moodfeed::state::{AppState, DEFAULT_HISTORY_CAPACITY};
use moodfeed::{routes, services};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let history_capacity: usize = std::env::var("HISTORY_CAPACITY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_HISTORY_CAPACITY);

    // Initialize the classifier (non-fatal: lexicon fallback if config missing).
    let (classifier, is_remote): (Arc<dyn EmotionClassify>, bool) =
        match ClassifierClient::from_env() {
            Ok(client) => {
                tracing::info!(backend = client.backend_name(), "emotion classifier initialized");
                let is_remote = client.is_remote();
                (Arc::new(client), is_remote)
            }
            Err(e) => {
                tracing::warn!(error = %e, "remote classifier not configured — using lexicon");
                (Arc::new(ClassifierClient::lexicon()), false)
            }
        };

    let state = AppState::new(classifier, history_capacity);

    // Spawn the demo feed when there is no real model to showcase.
    if services::simulator::enabled(is_remote) {
        let _simulator = services::simulator::spawn_simulator(state.clone());
    }

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, history_capacity, "moodfeed listening");
    axum::serve(listener, app).await.expect("server failed");
}
