//! # corep-core
//!
//! Foundation crate for the COREP analysis pipeline.
//! Defines all types, traits, errors, config, constants, and the
//! C01.00 Own Funds template schema.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod schema;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PipelineConfig;
pub use errors::{CorepError, CorepResult};
pub use models::{
    AnalysisResult, AuditEvent, Category, Chunk, ClassificationItem, EventType, FailureKind,
    Finding, RetrievalResult, ScoredChunk, Severity, ValidationReport, ValidationStatus,
};
pub use schema::{Polarity, TemplateSchema};
