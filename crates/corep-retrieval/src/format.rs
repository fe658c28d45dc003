//! Passage formatting for the reasoning prompt, plus summary statistics.

use std::collections::BTreeSet;

use corep_core::models::RetrievalResult;

/// Render retrieved passages as numbered `[CHUNK n]` blocks with source
/// attribution. The chunk id is shown so the model can cite it back.
pub fn format_for_prompt(retrieved: &RetrievalResult) -> String {
    let mut out = String::new();
    for (i, hit) in retrieved.hits.iter().enumerate() {
        out.push_str(&format!(
            "[CHUNK {n}]\nChunk ID: {id}\nSource: {source}\nPage: {page}\nRelevance Score: {score:.4}\n\nContent:\n{text}\n\n---\n",
            n = i + 1,
            id = hit.chunk.id,
            source = hit.chunk.source_document,
            page = hit.chunk.page,
            score = hit.score,
            text = hit.chunk.text,
        ));
    }
    out
}

/// Source/page coverage of one retrieval, for callers that render context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalSummary {
    pub unique_sources: Vec<String>,
    pub pages: Vec<u32>,
    pub total_hits: usize,
}

impl RetrievalSummary {
    pub fn from_result(retrieved: &RetrievalResult) -> Self {
        let sources: BTreeSet<String> = retrieved
            .hits
            .iter()
            .map(|h| h.chunk.source_document.clone())
            .collect();
        let pages: BTreeSet<u32> = retrieved.hits.iter().map(|h| h.chunk.page).collect();
        Self {
            unique_sources: sources.into_iter().collect(),
            pages: pages.into_iter().collect(),
            total_hits: retrieved.hits.len(),
        }
    }
}
