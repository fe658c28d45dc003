use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline stage an audit event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Query/scenario pair accepted.
    Received,
    Retrieval,
    Reasoning,
    Validation,
    Mapping,
    Export,
    Failure,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Received => "received",
            EventType::Retrieval => "retrieval",
            EventType::Reasoning => "reasoning",
            EventType::Validation => "validation",
            EventType::Mapping => "mapping",
            EventType::Export => "export",
            EventType::Failure => "failure",
        }
    }
}

/// One append-only audit record.
///
/// Sequence numbers are strictly increasing per session starting at 1,
/// with no gaps. Payloads carry identifiers, scores, and derived values —
/// never full document text or secrets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub session_id: String,
    pub sequence: u64,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub payload: serde_json::Value,
}
