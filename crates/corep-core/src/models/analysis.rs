use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::chunk::RetrievalResult;
use super::classification::{Category, ClassificationItem};
use super::validation_report::ValidationReport;

/// Typed reason a run ended in the Failed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    RetrievalUnavailable,
    ReasoningContractViolation,
    ModelUnreachable,
    Timeout,
    SchemaMismatch,
    Cancelled,
    /// Unexpected internal failure — kept so the boundary can always
    /// report a typed reason instead of leaking exception text.
    Internal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::RetrievalUnavailable => "retrieval_unavailable",
            FailureKind::ReasoningContractViolation => "reasoning_contract_violation",
            FailureKind::ModelUnreachable => "model_unreachable",
            FailureKind::Timeout => "timeout",
            FailureKind::SchemaMismatch => "schema_mismatch",
            FailureKind::Cancelled => "cancelled",
            FailureKind::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// Everything one pipeline run produced.
///
/// Owned exclusively by that run; immutable once the pipeline returns.
/// Corrections require a new run — callers never mutate a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub session_id: String,
    pub question: String,
    pub scenario: String,
    /// Passages the classification was grounded on. None if the run
    /// failed before retrieval completed.
    pub retrieved: Option<RetrievalResult>,
    /// Classified items in the order the model proposed them
    /// (ungrounded items already dropped, each drop recorded as a finding).
    pub items: Vec<ClassificationItem>,
    /// Category totals computed by the mapper. Empty until mapping runs.
    pub totals: BTreeMap<Category, Decimal>,
    pub validation: ValidationReport,
    /// Set iff the run terminated in the Failed state.
    pub failure: Option<FailureKind>,
    pub created_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Skeleton result created at query submission, populated per stage.
    pub fn new(session_id: &str, question: &str, scenario: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            question: question.to_string(),
            scenario: scenario.to_string(),
            retrieved: None,
            items: Vec::new(),
            totals: BTreeMap::new(),
            validation: ValidationReport::pass(),
            failure: None,
            created_at: Utc::now(),
        }
    }

    /// Whether the run completed without a terminal failure.
    pub fn completed(&self) -> bool {
        self.failure.is_none()
    }
}
