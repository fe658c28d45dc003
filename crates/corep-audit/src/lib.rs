//! # corep-audit
//!
//! Append-only per-session audit trail. Every pipeline stage logs its
//! input/output here; a session's trail is the ordered sequence of its
//! events — appended or exported, never mutated.

pub mod logger;
pub mod summary;

pub use logger::AuditLogger;
pub use summary::TrailSummary;
