//! Data model for one analysis run.

mod analysis;
mod audit_event;
mod chunk;
mod classification;
mod validation_report;

pub use analysis::{AnalysisResult, FailureKind};
pub use audit_event::{AuditEvent, EventType};
pub use chunk::{Chunk, RetrievalResult, ScoredChunk};
pub use classification::{Category, ClassificationItem};
pub use validation_report::{Finding, Severity, ValidationReport, ValidationStatus};
