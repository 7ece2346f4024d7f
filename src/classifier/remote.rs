//! Remote classifier — HTTP text-classification backend.
//!
//! DESIGN
//! ======
//! Thin wrapper over a hosted text-classification endpoint (Hugging Face
//! inference API shape: POST `{"inputs": text}`, response is a ranked list
//! of `{label, score}` candidates). Pure parsing lives in `parse_response`
//! for testability; raw labels go through the palette normalizer so the rest
//! of the system only ever sees canonical labels.

use std::time::Duration;

use super::palette::normalize_label;
use super::{ClassifierError, EmotionClassify, EmotionResult};

const REQUEST_TIMEOUT_SECS: u64 = 15;
const CONNECT_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// CONFIG
// =============================================================================

/// Remote backend configuration parsed from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Full scoring endpoint URL.
    pub api_url: String,
    /// Bearer token, if the endpoint requires one.
    pub api_key: Option<String>,
}

impl RemoteConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `EMOTION_API_URL`: scoring endpoint
    ///
    /// Optional:
    /// - `EMOTION_API_KEY_ENV`: names the env var containing the bearer token
    ///
    /// # Errors
    ///
    /// Returns `MissingConfig` when a required variable (or the variable an
    /// indirection points at) is unset.
    pub fn from_env() -> Result<Self, ClassifierError> {
        let api_url = std::env::var("EMOTION_API_URL")
            .map_err(|_| ClassifierError::MissingConfig { var: "EMOTION_API_URL".into() })?;

        let api_key = match std::env::var("EMOTION_API_KEY_ENV") {
            Ok(key_var) => Some(
                std::env::var(&key_var)
                    .map_err(|_| ClassifierError::MissingConfig { var: key_var })?,
            ),
            Err(_) => None,
        };

        Ok(Self { api_url, api_key })
    }
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct RemoteClassifier {
    http: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteClassifier {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: RemoteConfig) -> Result<Self, ClassifierError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClassifierError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }
}

#[async_trait::async_trait]
impl EmotionClassify for RemoteClassifier {
    async fn classify(&self, text: &str) -> Result<EmotionResult, ClassifierError> {
        let body = ApiRequest { inputs: text };

        let mut request = self.http.post(&self.config.api_url).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClassifierError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClassifierError::ApiRequest(e.to_string()))?;

        if !status.is_success() {
            return Err(ClassifierError::ApiResponse { status: status.as_u16(), body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    inputs: &'a str,
}

#[derive(serde::Deserialize)]
struct Candidate {
    label: String,
    score: f64,
}

/// Inference endpoints return either `[{label, score}, …]` or the same list
/// nested one level deeper (one list per input).
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ApiResponse {
    Flat(Vec<Candidate>),
    Nested(Vec<Vec<Candidate>>),
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<EmotionResult, ClassifierError> {
    let api: ApiResponse =
        serde_json::from_str(json).map_err(|e| ClassifierError::ApiParse(e.to_string()))?;

    let candidates = match api {
        ApiResponse::Flat(list) => list,
        ApiResponse::Nested(mut lists) => {
            if lists.is_empty() {
                Vec::new()
            } else {
                lists.swap_remove(0)
            }
        }
    };

    let top = candidates
        .into_iter()
        .filter(|c| c.score.is_finite())
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| ClassifierError::ApiParse("no candidates in response".into()))?;

    Ok(EmotionResult::from_palette(normalize_label(&top.label), top.score))
}

// =============================================================================
// TESTS
// =============================================================================
