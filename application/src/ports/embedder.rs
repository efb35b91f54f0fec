//! Embedder port
//!
//! Turns text into dense vectors for the semantic index. Which embedding
//! model is used is the adapter's business.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while embedding text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmbeddingError {
    #[error("Embedding request failed: {0}")]
    RequestFailed(String),

    #[error("Expected {expected} embeddings, got {got}")]
    CountMismatch { expected: usize, got: usize },

    #[error("Empty embedding returned")]
    Empty,
}

#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a batch of texts, one vector per input, in order
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Embed a single query string
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vectors = self.embed(&[text.to_string()]).await?;
        match vectors.pop() {
            Some(v) if !v.is_empty() => Ok(v),
            Some(_) => Err(EmbeddingError::Empty),
            None => Err(EmbeddingError::CountMismatch {
                expected: 1,
                got: 0,
            }),
        }
    }
}
