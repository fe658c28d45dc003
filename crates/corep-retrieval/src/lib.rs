//! # corep-retrieval
//!
//! Retrieval orchestration: queries the external chunk index, enforces
//! ordering guarantees, formats passages for the reasoning prompt, and
//! records one audit event per query.
//!
//! Ingestion (PDF loading, chunking, embedding) is a non-goal here — the
//! index is an opaque collaborator behind `IChunkIndex`.

pub mod engine;
pub mod format;
pub mod memory_index;

pub use engine::RetrievalOrchestrator;
pub use format::{format_for_prompt, RetrievalSummary};
pub use memory_index::MemoryChunkIndex;
