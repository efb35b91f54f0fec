//! Passage indexes
//!
//! A dense index (cosine similarity over embeddings, persisted as JSON) and
//! a sparse TF-IDF index rebuilt from the passages at startup. Each is
//! exposed to the application layer as a
//! [`Retriever`](lorekeeper_application::Retriever).

mod dense;
mod sparse;

pub use dense::{DenseIndex, DenseRetriever};
pub use sparse::SparseIndex;

use lorekeeper_application::EmbeddingError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, saving or loading an index
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Index file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Index file {path} is malformed: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Vector dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Cannot build an index from zero passages")]
    NoPassages,
}
