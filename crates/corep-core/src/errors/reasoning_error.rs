/// Reasoning subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ReasoningError {
    /// Model output still unparseable after the single repair retry.
    #[error("model output violated the analysis contract: {reason}")]
    ContractViolation { reason: String },

    #[error("language model unreachable: {reason}")]
    ModelUnreachable { reason: String },

    #[error("language model call timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },
}
