//! Seams to the pipeline's external collaborators.

mod chunk_index;
mod language_model;

pub use chunk_index::IChunkIndex;
pub use language_model::{ILanguageModel, ModelResponse};
