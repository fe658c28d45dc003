//! Error taxonomy for the analysis pipeline.
//!
//! Stage-level problems abort a run and surface as a typed `CorepError`;
//! item-level problems (bad citations, rule violations) are data — they
//! become `Finding`s inside the returned result, never errors.

mod audit_error;
mod reasoning_error;
mod retrieval_error;
mod template_error;

pub use audit_error::AuditError;
pub use reasoning_error::ReasoningError;
pub use retrieval_error::RetrievalError;
pub use template_error::TemplateError;

/// Workspace-wide result alias.
pub type CorepResult<T> = Result<T, CorepError>;

/// Aggregated error type crossing crate boundaries.
#[derive(Debug, thiserror::Error)]
pub enum CorepError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Reasoning(#[from] ReasoningError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("run cancelled at stage {stage}")]
    Cancelled { stage: String },

    #[error("export blocked: validation failed for session {session_id}")]
    ExportBlocked { session_id: String },
}
