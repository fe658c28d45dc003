use crate::errors::CorepResult;
use crate::models::ScoredChunk;

/// Query surface of the external text-chunk index.
///
/// Ingestion (PDF loading, chunking, embedding) lives outside this
/// workspace; the pipeline only queries. Implementations own their
/// timeouts and must not recompute embeddings for indexed chunks.
pub trait IChunkIndex: Send + Sync {
    /// Number of chunks the index currently holds.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Similarity search. Returns up to `top_k` hits in descending score
    /// order; equal scores keep index insertion order.
    fn search(&self, query: &str, top_k: usize) -> CorepResult<Vec<ScoredChunk>>;
}
