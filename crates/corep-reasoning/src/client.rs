//! Gemini HTTP client — blocking reqwest with a per-call timeout.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use corep_core::errors::{CorepResult, ReasoningError};
use corep_core::traits::{ILanguageModel, ModelResponse};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// `ILanguageModel` over the Gemini REST surface.
///
/// Requests JSON response MIME so the model favors the contract schema.
/// The API key is injected at construction and never logged.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    model: String,
    timeout_ms: u64,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str, timeout_ms: u64) -> CorepResult<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key, model, timeout_ms)
    }

    /// Point the client at a non-default endpoint (test servers).
    pub fn with_endpoint(
        endpoint: &str,
        api_key: &str,
        model: &str,
        timeout_ms: u64,
    ) -> CorepResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ReasoningError::ModelUnreachable {
                reason: e.to_string(),
            })?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            timeout_ms,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u64>,
    candidates_token_count: Option<u64>,
}

impl ILanguageModel for GeminiClient {
    fn complete(&self, prompt: &str, temperature: f64) -> CorepResult<ModelResponse> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": temperature,
                "responseMimeType": "application/json",
            },
        });

        debug!(model = %self.model, prompt_bytes = prompt.len(), "calling language model");

        let response = self.http.post(&url).json(&body).send().map_err(|e| {
            if e.is_timeout() {
                ReasoningError::Timeout {
                    elapsed_ms: self.timeout_ms,
                }
            } else {
                ReasoningError::ModelUnreachable {
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReasoningError::ModelUnreachable {
                reason: format!("model endpoint returned HTTP {}", status),
            }
            .into());
        }

        let parsed: GenerateResponse =
            response.json().map_err(|e| ReasoningError::ModelUnreachable {
                reason: format!("unreadable model response: {}", e),
            })?;

        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| ReasoningError::ContractViolation {
                reason: "model returned no candidates".to_string(),
            })?;

        Ok(ModelResponse {
            text,
            model: self.model.clone(),
            prompt_tokens: parsed.usage_metadata.as_ref().and_then(|u| u.prompt_token_count),
            completion_tokens: parsed
                .usage_metadata
                .as_ref()
                .and_then(|u| u.candidates_token_count),
        })
    }
}
