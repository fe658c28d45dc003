//! Pipeline configuration — injected at construction, never read from
//! ambient process state inside core logic.

use serde::{Deserialize, Serialize};

use crate::errors::{CorepError, CorepResult};

/// Named defaults so tests and docs reference one place.
pub mod defaults {
    /// Default Gemini model identifier.
    pub const MODEL: &str = "gemini-2.5-flash";
    /// Low temperature favors reproducible classification.
    pub const TEMPERATURE: f64 = 0.1;
    /// Default number of chunks retrieved per query.
    pub const TOP_K: usize = 5;
    /// Per-external-call timeout in milliseconds.
    pub const CALL_TIMEOUT_MS: u64 = 60_000;
    /// Template version the pipeline maps onto.
    pub const TEMPLATE_VERSION: &str = "C01.00";
}

/// Configuration consumed by the pipeline orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Language model identifier (e.g. "gemini-2.5-flash").
    pub model: String,
    /// Sampling temperature passed to the model.
    pub temperature: f64,
    /// Top-k used when the caller does not specify one.
    pub default_top_k: usize,
    /// Timeout applied to every external call (retrieval, model).
    pub call_timeout_ms: u64,
    /// Template schema version the run maps onto.
    pub template_version: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: defaults::MODEL.to_string(),
            temperature: defaults::TEMPERATURE,
            default_top_k: defaults::TOP_K,
            call_timeout_ms: defaults::CALL_TIMEOUT_MS,
            template_version: defaults::TEMPLATE_VERSION.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Parse a config from TOML text. Missing fields fall back to defaults.
    pub fn from_toml_str(text: &str) -> CorepResult<Self> {
        toml::from_str(text).map_err(|e| CorepError::Config {
            reason: e.to_string(),
        })
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> CorepResult<()> {
        if self.default_top_k == 0 {
            return Err(CorepError::Config {
                reason: "default_top_k must be positive".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(CorepError::Config {
                reason: format!("temperature {} outside [0.0, 2.0]", self.temperature),
            });
        }
        if self.call_timeout_ms == 0 {
            return Err(CorepError::Config {
                reason: "call_timeout_ms must be positive".to_string(),
            });
        }
        Ok(())
    }
}
