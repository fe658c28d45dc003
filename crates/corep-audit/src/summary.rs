//! Trail summaries and serialized export.

use std::collections::BTreeMap;

use corep_core::models::AuditEvent;

/// Per-event-type counts for one session's trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailSummary {
    pub session_id: String,
    pub total_events: usize,
    /// Event-type name → count, in name order.
    pub by_type: BTreeMap<String, usize>,
}

impl TrailSummary {
    pub fn from_events(session_id: &str, events: &[AuditEvent]) -> Self {
        let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
        for event in events {
            *by_type
                .entry(event.event_type.as_str().to_string())
                .or_default() += 1;
        }
        Self {
            session_id: session_id.to_string(),
            total_events: events.len(),
            by_type,
        }
    }
}

/// Serialize an exported trail as JSON lines — one structured record per
/// event, in append order. Suitable for external archival.
pub fn to_json_lines(events: &[AuditEvent]) -> serde_json::Result<String> {
    let mut out = String::new();
    for event in events {
        out.push_str(&serde_json::to_string(event)?);
        out.push('\n');
    }
    Ok(out)
}
