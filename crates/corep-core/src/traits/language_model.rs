use serde::{Deserialize, Serialize};

use crate::errors::CorepResult;

/// One completion from the external language model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Raw response text (expected to be JSON per the analysis contract).
    pub text: String,
    /// Model identifier that produced the completion.
    pub model: String,
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
}

impl ModelResponse {
    pub fn total_tokens(&self) -> Option<u64> {
        match (self.prompt_tokens, self.completion_tokens) {
            (Some(p), Some(c)) => Some(p + c),
            _ => None,
        }
    }
}

/// The external language model, treated as an untrusted text generator.
/// Output is always re-validated against the analysis contract.
pub trait ILanguageModel: Send + Sync {
    /// Generate one completion for `prompt` at the given temperature.
    fn complete(&self, prompt: &str, temperature: f64) -> CorepResult<ModelResponse>;
}
