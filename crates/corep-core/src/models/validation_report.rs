use serde::{Deserialize, Serialize};

/// Overall outcome of the validation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Pass,
    Warn,
    Fail,
}

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One validation observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable rule identifier, e.g. "CODE_VALIDITY".
    pub rule_id: String,
    pub severity: Severity,
    /// Human-readable message safe to render to callers.
    pub message: String,
    /// Index of the affected item in the run's item list, when applicable.
    pub item_index: Option<usize>,
}

impl Finding {
    pub fn error(rule_id: &str, message: impl Into<String>, item_index: Option<usize>) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            severity: Severity::Error,
            message: message.into(),
            item_index,
        }
    }

    pub fn warning(rule_id: &str, message: impl Into<String>, item_index: Option<usize>) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            severity: Severity::Warning,
            message: message.into(),
            item_index,
        }
    }

    pub fn info(rule_id: &str, message: impl Into<String>, item_index: Option<usize>) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            severity: Severity::Info,
            message: message.into(),
            item_index,
        }
    }
}

/// Ordered findings plus the derived overall status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub status: ValidationStatus,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// Build a report, deriving status from the findings:
    /// Fail if any error, else Warn if any warning, else Pass.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let status = if findings.iter().any(|f| f.severity == Severity::Error) {
            ValidationStatus::Fail
        } else if findings.iter().any(|f| f.severity == Severity::Warning) {
            ValidationStatus::Warn
        } else {
            ValidationStatus::Pass
        };
        Self { status, findings }
    }

    /// A passing report with no findings.
    pub fn pass() -> Self {
        Self {
            status: ValidationStatus::Pass,
            findings: Vec::new(),
        }
    }

    /// A failed report for a run that aborted before validation.
    pub fn failed(findings: Vec<Finding>) -> Self {
        Self {
            status: ValidationStatus::Fail,
            findings,
        }
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    /// Whether downstream export is blocked.
    pub fn blocks_export(&self) -> bool {
        self.status == ValidationStatus::Fail
    }
}
