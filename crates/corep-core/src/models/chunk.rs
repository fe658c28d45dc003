use serde::{Deserialize, Serialize};

/// A bounded span of source regulatory text with provenance.
/// Produced by ingestion, consumed read-only by retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Stable identifier assigned at ingestion time.
    pub id: String,
    pub text: String,
    /// Source document the span was extracted from.
    pub source_document: String,
    pub page: u32,
    /// Opaque reference into the external embedding store.
    pub embedding_ref: Option<String>,
}

/// One retrieval hit: a chunk plus its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: f64,
}

/// Ranked passages for one query. Not persisted — scoped to a single run.
///
/// `hits` are in descending score order; ties keep the index's original
/// insertion order (stable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub query: String,
    pub top_k: usize,
    pub hits: Vec<ScoredChunk>,
}

impl RetrievalResult {
    /// Whether a chunk id was among the retrieved passages.
    pub fn contains_chunk(&self, chunk_id: &str) -> bool {
        self.hits.iter().any(|h| h.chunk.id == chunk_id)
    }

    /// Chunk ids in rank order.
    pub fn chunk_ids(&self) -> Vec<&str> {
        self.hits.iter().map(|h| h.chunk.id.as_str()).collect()
    }
}
