//! # corep-pipeline
//!
//! Sequences retrieval → reasoning → validation → mapping for one
//! session, owns the failure/retry policy, and always returns a
//! structured `AnalysisResult` — a failed run carries its stage and
//! typed reason instead of escaping as a panic or raw error.

pub mod cancel;
pub mod export;
pub mod orchestrator;
pub mod spans;
pub mod state;

pub use cancel::CancelToken;
pub use export::{to_audit_export, to_tabular_export};
pub use orchestrator::{new_session_id, AnalysisPipeline};
pub use state::PipelineState;
