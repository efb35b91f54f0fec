//! Retriever port
//!
//! The strategy interface behind retrieval fusion: each index (dense,
//! sparse) is one `Retriever`, and the fused ensemble is a `Retriever` too.

use async_trait::async_trait;
use lorekeeper_domain::Passage;
use thiserror::Error;

/// Errors that can occur while searching an index
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    #[error("Query embedding failed: {0}")]
    Embedding(String),

    #[error("Index unavailable: {0}")]
    IndexUnavailable(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A ranked passage search over the corpus
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Return up to `k` passages, best first
    async fn search(&self, query: &str, k: usize) -> Result<Vec<Passage>, RetrievalError>;

    /// Short name for logs ("dense", "sparse", "ensemble")
    fn name(&self) -> &str;
}
