//! In-process chunk index over pre-scored term overlap.
//!
//! Stands in for the external vector index in tests and demos. Scoring is
//! plain term overlap between query and chunk text — deterministic, no
//! embedding inference. Equal scores keep insertion order.

use corep_core::errors::CorepResult;
use corep_core::models::{Chunk, ScoredChunk};
use corep_core::traits::IChunkIndex;

/// Deterministic in-memory `IChunkIndex`.
#[derive(Debug, Default)]
pub struct MemoryChunkIndex {
    chunks: Vec<Chunk>,
}

impl MemoryChunkIndex {
    pub fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Build an index from chunks in insertion order.
    pub fn from_chunks(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    /// Append a chunk. Insertion order is the tie-break order.
    pub fn insert(&mut self, chunk: Chunk) {
        self.chunks.push(chunk);
    }

    /// Fraction of query terms present in the chunk text.
    fn overlap_score(query_terms: &[String], text: &str) -> f64 {
        if query_terms.is_empty() {
            return 0.0;
        }
        let haystack = text.to_lowercase();
        let matched = query_terms
            .iter()
            .filter(|t| haystack.contains(t.as_str()))
            .count();
        matched as f64 / query_terms.len() as f64
    }
}

impl IChunkIndex for MemoryChunkIndex {
    fn len(&self) -> usize {
        self.chunks.len()
    }

    fn search(&self, query: &str, top_k: usize) -> CorepResult<Vec<ScoredChunk>> {
        let terms: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let mut scored: Vec<ScoredChunk> = self
            .chunks
            .iter()
            .map(|c| ScoredChunk {
                chunk: c.clone(),
                score: Self::overlap_score(&terms, &c.text),
            })
            .collect();

        // Stable sort: ties keep insertion order.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_k);
        Ok(scored)
    }
}
