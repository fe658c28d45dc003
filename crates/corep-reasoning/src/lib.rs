//! # corep-reasoning
//!
//! The structured reasoning contract: builds a deterministic prompt from
//! question + scenario + retrieved passages, invokes the external language
//! model, and enforces a strict output schema with a single repair retry.
//!
//! Model output is untrusted. Items citing chunks that were not retrieved
//! are dropped and recorded — never silently fabricated away.

pub mod client;
pub mod contract;
pub mod engine;
pub mod prompt;

pub use client::GeminiClient;
pub use contract::{parse_raw_analysis, RawAnalysis, RawField};
pub use engine::{ReasoningEngine, ReasoningOutcome};
