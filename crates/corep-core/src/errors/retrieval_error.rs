/// Retrieval subsystem errors. All of these are fatal for the run:
/// retrieval failures are surfaced, never masked by an empty result.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// The chunk index is absent or holds zero chunks. Distinct from
    /// "no matches" — callers must be able to tell the two apart.
    #[error("chunk index unavailable: {reason}")]
    IndexUnavailable { reason: String },

    #[error("retrieval timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("search failed: {reason}")]
    SearchFailed { reason: String },
}
