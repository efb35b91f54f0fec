//! Ensemble retrieval use case
//!
//! Queries the dense and sparse retrievers for the same question and fuses
//! their rankings with fixed weights. A failing or empty sub-index only
//! removes its own contribution.

use crate::config::PipelineParams;
use crate::ports::retriever::{RetrievalError, Retriever};
use async_trait::async_trait;
use lorekeeper_domain::{FusionPolicy, Passage, RetrievedContext, fuse};
use std::sync::Arc;
use tracing::{debug, warn};

/// Fixed-weight combiner over a dense and a sparse retriever
pub struct EnsembleRetriever<D: Retriever, S: Retriever> {
    dense: Arc<D>,
    sparse: Arc<S>,
    dense_k: usize,
    sparse_k: usize,
    policy: FusionPolicy,
}

impl<D: Retriever, S: Retriever> EnsembleRetriever<D, S> {
    pub fn new(dense: Arc<D>, sparse: Arc<S>, params: &PipelineParams) -> Self {
        Self {
            dense,
            sparse,
            dense_k: params.dense_k,
            sparse_k: params.sparse_k,
            policy: params.fusion.clone(),
        }
    }

    /// Retrieve fused evidence for `query`
    pub async fn retrieve(&self, query: &str) -> RetrievedContext {
        RetrievedContext::from_passages(self.fused(query, &self.policy).await)
    }

    async fn fused(&self, query: &str, policy: &FusionPolicy) -> Vec<Passage> {
        let dense = Self::search_or_empty(self.dense.as_ref(), query, self.dense_k).await;
        let sparse = Self::search_or_empty(self.sparse.as_ref(), query, self.sparse_k).await;

        debug!(
            "Retrieved {} dense and {} sparse passages",
            dense.len(),
            sparse.len()
        );

        fuse(dense, sparse, policy)
    }

    async fn search_or_empty<R: Retriever + ?Sized>(
        retriever: &R,
        query: &str,
        k: usize,
    ) -> Vec<Passage> {
        match retriever.search(query, k).await {
            Ok(passages) => passages,
            Err(e) => {
                warn!("{} retriever failed, continuing without it: {}", retriever.name(), e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl<D: Retriever, S: Retriever> Retriever for EnsembleRetriever<D, S> {
    /// Fused search truncated to `k`
    async fn search(&self, query: &str, k: usize) -> Result<Vec<Passage>, RetrievalError> {
        let policy = self.policy.clone().with_limit(Some(k));
        Ok(self.fused(query, &policy).await)
    }

    fn name(&self) -> &str {
        "ensemble"
    }
}
