//! Property tests for retrieval ordering and bounds.

use proptest::prelude::*;

use corep_core::models::Chunk;
use corep_core::traits::IChunkIndex;
use corep_retrieval::MemoryChunkIndex;

fn make_chunk(i: usize, text: String) -> Chunk {
    Chunk {
        id: format!("chunk-{i:04}"),
        text,
        source_document: "crr.pdf".to_string(),
        page: i as u32 + 1,
        embedding_ref: None,
    }
}

// Chunk texts drawn from a small regulatory vocabulary so queries
// actually overlap some of them.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "capital",
            "instruments",
            "tier",
            "deduct",
            "goodwill",
            "reserves",
            "subordinated",
        ]),
        1..8,
    )
    .prop_map(|words| words.join(" "))
}

proptest! {
    // Results come back in descending score order.
    #[test]
    fn search_results_are_sorted_descending(
        texts in prop::collection::vec(text_strategy(), 1..20),
        query in text_strategy(),
        top_k in 1usize..10,
    ) {
        let chunks: Vec<Chunk> = texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| make_chunk(i, t))
            .collect();
        let index = MemoryChunkIndex::from_chunks(chunks);

        let hits = index.search(&query, top_k).unwrap();
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    // Never more than top_k hits, never more than the index holds, and
    // every hit is a chunk the index actually contains.
    #[test]
    fn search_is_bounded_and_grounded(
        texts in prop::collection::vec(text_strategy(), 1..20),
        query in text_strategy(),
        top_k in 1usize..30,
    ) {
        let n = texts.len();
        let chunks: Vec<Chunk> = texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| make_chunk(i, t))
            .collect();
        let index = MemoryChunkIndex::from_chunks(chunks.clone());

        let hits = index.search(&query, top_k).unwrap();
        prop_assert!(hits.len() <= top_k);
        prop_assert!(hits.len() <= n);
        for hit in &hits {
            prop_assert!(chunks.iter().any(|c| c.id == hit.chunk.id));
        }
    }

    // Scores are term-overlap fractions, so always within [0, 1].
    #[test]
    fn scores_stay_in_unit_range(
        texts in prop::collection::vec(text_strategy(), 1..20),
        query in text_strategy(),
    ) {
        let chunks: Vec<Chunk> = texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| make_chunk(i, t))
            .collect();
        let index = MemoryChunkIndex::from_chunks(chunks);

        let hits = index.search(&query, 50).unwrap();
        for hit in &hits {
            prop_assert!((0.0..=1.0).contains(&hit.score));
        }
    }
}
