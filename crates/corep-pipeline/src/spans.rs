//! Span names per stage, for programmatic use alongside the tracing
//! macros.

pub mod names {
    pub const ANALYZE: &str = "corep.analyze";
    pub const RETRIEVAL: &str = "corep.retrieval";
    pub const REASONING: &str = "corep.reasoning";
    pub const VALIDATION: &str = "corep.validation";
    pub const MAPPING: &str = "corep.mapping";
    pub const EXPORT: &str = "corep.export";
}

/// Create the per-run analysis span.
#[macro_export]
macro_rules! analyze_span {
    ($session_id:expr) => {
        tracing::info_span!("corep.analyze", session_id = %$session_id)
    };
}
