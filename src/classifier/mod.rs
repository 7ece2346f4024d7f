//! Emotion classifier — maps message text to a label/score/swatch tuple.
//!
//! DESIGN
//! ======
//! The hub consumes classification through the `EmotionClassify` trait and
//! never depends on a concrete backend. `ClassifierClient` dispatches to one
//! of two backends:
//!
//! - `remote` — an HTTP text-classification model, configured from
//!   environment variables. Missing config is non-fatal: the server falls
//!   back to the lexicon and keeps running.
//! - `lexicon` — a deterministic keyword scorer, always available. Also the
//!   substitute when a remote call fails mid-flight.
//!
//! Determinism matters: given the same input text, a backend must return the
//! same result, so replayed histories classify identically in tests.

pub mod lexicon;
pub mod palette;
pub mod remote;

use palette::{NEUTRAL_LABEL, style_for};

// =============================================================================
// RESULT
// =============================================================================

/// Output of scoring one message.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionResult {
    /// Canonical label (one of the palette labels).
    pub label: String,
    /// Confidence in `0.0..=1.0`. Always finite.
    pub score: f64,
    pub emoji: String,
    /// Background swatch.
    pub color: String,
    /// Foreground swatch. `None` means the hub applies its documented
    /// default rather than leaving the field unset on the wire.
    pub word_color: Option<String>,
}

impl EmotionResult {
    /// Build a result for a canonical label from the palette.
    #[must_use]
    pub fn from_palette(label: &str, score: f64) -> Self {
        let style = style_for(label);
        Self {
            label: style.label.to_string(),
            score: if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 },
            emoji: style.emoji.to_string(),
            color: style.color.to_string(),
            word_color: Some(style.word_color.to_string()),
        }
    }

    /// The substitute result used when classification fails.
    #[must_use]
    pub fn neutral() -> Self {
        Self::from_palette(NEUTRAL_LABEL, 0.0)
    }
}

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by classifier backends.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// A required environment variable is not set.
    #[error("classifier not configured: env var {var} not set")]
    MissingConfig { var: String },

    /// The HTTP request to the scoring endpoint failed.
    #[error("emotion API request failed: {0}")]
    ApiRequest(String),

    /// The scoring endpoint returned a non-success HTTP status.
    #[error("emotion API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The scoring endpoint response body could not be deserialized.
    #[error("emotion API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// TRAIT
// =============================================================================

/// Pure scoring interface consumed by the hub.
#[async_trait::async_trait]
pub trait EmotionClassify: Send + Sync {
    /// Score one message. Deterministic for a given input.
    async fn classify(&self, text: &str) -> Result<EmotionResult, ClassifierError>;
}

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete classifier that dispatches to the remote or lexicon backend.
pub struct ClassifierClient {
    inner: Backend,
}

enum Backend {
    Remote(remote::RemoteClassifier),
    Lexicon(lexicon::LexiconClassifier),
}

impl ClassifierClient {
    /// Build a remote classifier from environment variables.
    ///
    /// - `EMOTION_API_URL`: scoring endpoint (required)
    /// - `EMOTION_API_KEY_ENV`: name of the env var holding the bearer token
    ///   (optional — some endpoints are unauthenticated)
    ///
    /// # Errors
    ///
    /// Returns an error if `EMOTION_API_URL` is unset or the HTTP client
    /// fails to build. Callers treat this as non-fatal and fall back to
    /// [`ClassifierClient::lexicon`].
    pub fn from_env() -> Result<Self, ClassifierError> {
        let config = remote::RemoteConfig::from_env()?;
        Ok(Self { inner: Backend::Remote(remote::RemoteClassifier::new(config)?) })
    }

    /// The always-available deterministic backend.
    #[must_use]
    pub fn lexicon() -> Self {
        Self { inner: Backend::Lexicon(lexicon::LexiconClassifier::new()) }
    }

    /// True when scoring goes over the network.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self.inner, Backend::Remote(_))
    }

    /// Backend name for startup logging.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        match self.inner {
            Backend::Remote(_) => "remote",
            Backend::Lexicon(_) => "lexicon",
        }
    }
}

#[async_trait::async_trait]
impl EmotionClassify for ClassifierClient {
    async fn classify(&self, text: &str) -> Result<EmotionResult, ClassifierError> {
        match &self.inner {
            Backend::Remote(c) => c.classify(text).await,
            Backend::Lexicon(c) => c.classify(text).await,
        }
    }
}
