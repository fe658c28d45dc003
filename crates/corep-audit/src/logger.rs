//! AuditLogger — concurrent per-session trails via DashMap.
//!
//! The DashMap entry lock is the only serialization point in the system:
//! sequence numbers for one session are assigned under it, so concurrent
//! callers cannot interleave out of order or open gaps.

use chrono::Utc;
use dashmap::DashMap;

use corep_core::errors::{AuditError, CorepResult};
use corep_core::models::{AuditEvent, EventType};

use crate::summary::TrailSummary;

/// Thread-safe append-only audit trails, one per session.
#[derive(Debug, Default)]
pub struct AuditLogger {
    trails: DashMap<String, Vec<AuditEvent>>,
}

impl AuditLogger {
    pub fn new() -> Self {
        Self {
            trails: DashMap::new(),
        }
    }

    /// Append one event to a session's trail and return its sequence
    /// number. Sequences start at 1 and are strictly increasing with no
    /// gaps. The trail is created on first append.
    ///
    /// Payloads must carry identifiers, scores, and derived values only —
    /// callers never pass full chunk text or credentials.
    pub fn log(
        &self,
        session_id: &str,
        event_type: EventType,
        payload: serde_json::Value,
    ) -> u64 {
        let mut trail = self.trails.entry(session_id.to_string()).or_default();
        let sequence = trail.len() as u64 + 1;
        trail.push(AuditEvent {
            session_id: session_id.to_string(),
            sequence,
            event_type,
            timestamp: Utc::now(),
            payload,
        });

        tracing::debug!(
            session_id = %session_id,
            sequence,
            event_type = event_type.as_str(),
            "audit event appended"
        );

        sequence
    }

    /// Export a session's trail in exact append order. Pure read — the
    /// trail itself is untouched.
    pub fn export(&self, session_id: &str) -> CorepResult<Vec<AuditEvent>> {
        self.trails
            .get(session_id)
            .map(|t| t.clone())
            .ok_or_else(|| {
                AuditError::UnknownSession {
                    session_id: session_id.to_string(),
                }
                .into()
            })
    }

    /// Event count for a session. Zero if the session is unknown.
    pub fn event_count(&self, session_id: &str) -> usize {
        self.trails.get(session_id).map(|t| t.len()).unwrap_or(0)
    }

    /// Whether a session has a trail.
    pub fn has_session(&self, session_id: &str) -> bool {
        self.trails.contains_key(session_id)
    }

    /// Per-event-type counts for a session.
    pub fn trail_summary(&self, session_id: &str) -> CorepResult<TrailSummary> {
        let events = self.export(session_id)?;
        Ok(TrailSummary::from_events(session_id, &events))
    }

    /// Number of sessions with a trail.
    pub fn session_count(&self) -> usize {
        self.trails.len()
    }
}
