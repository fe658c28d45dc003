/// Audit trail errors.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("no audit trail for session {session_id}")]
    UnknownSession { session_id: String },

    #[error("failed to serialize audit payload: {reason}")]
    PayloadSerialization { reason: String },
}
