//! RetrievalOrchestrator — top-k search with strict failure semantics.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use corep_audit::AuditLogger;
use corep_core::constants::MAX_TOP_K;
use corep_core::errors::{CorepResult, RetrievalError};
use corep_core::models::{EventType, RetrievalResult};
use corep_core::traits::IChunkIndex;

/// Queries the external index and returns ranked passages.
///
/// Fails with `RetrievalError::IndexUnavailable` when the index holds no
/// chunks — callers must be able to distinguish "no index" from
/// "no matches".
pub struct RetrievalOrchestrator {
    index: Arc<dyn IChunkIndex>,
    audit: Arc<AuditLogger>,
}

impl RetrievalOrchestrator {
    pub fn new(index: Arc<dyn IChunkIndex>, audit: Arc<AuditLogger>) -> Self {
        Self { index, audit }
    }

    /// Retrieve up to `top_k` passages for `query`, descending by score
    /// with ties kept in index insertion order. Requests above
    /// `MAX_TOP_K` are clamped.
    ///
    /// Emits one `Retrieval` audit event carrying the query, top_k, and
    /// the returned chunk ids and scores — not chunk text, to bound the
    /// trail size.
    pub fn retrieve(
        &self,
        session_id: &str,
        query: &str,
        top_k: usize,
    ) -> CorepResult<RetrievalResult> {
        if top_k == 0 {
            return Err(RetrievalError::SearchFailed {
                reason: "top_k must be positive".to_string(),
            }
            .into());
        }
        let top_k = top_k.min(MAX_TOP_K);
        if self.index.is_empty() {
            return Err(RetrievalError::IndexUnavailable {
                reason: "index holds zero chunks".to_string(),
            }
            .into());
        }

        let mut hits = self.index.search(query, top_k)?;

        // The index contract already promises descending order; re-sort
        // stably so a sloppy implementation cannot break the invariant.
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(top_k);

        debug!(query = %query, top_k, hits = hits.len(), "retrieval complete");

        let scored_ids: Vec<serde_json::Value> = hits
            .iter()
            .map(|h| json!({ "chunk_id": h.chunk.id, "score": h.score }))
            .collect();
        self.audit.log(
            session_id,
            EventType::Retrieval,
            json!({
                "query": query,
                "top_k": top_k,
                "hits": scored_ids,
            }),
        );

        info!(
            session_id = %session_id,
            hits = hits.len(),
            "retrieved passages"
        );

        Ok(RetrievalResult {
            query: query.to_string(),
            top_k,
            hits,
        })
    }
}
