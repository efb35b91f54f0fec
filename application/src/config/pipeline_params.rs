//! Pipeline parameters: retrieval depth, fusion and pacing.
//!
//! [`PipelineParams`] groups the static parameters that control one
//! question-answering turn in
//! [`GetResponsesUseCase`](crate::use_cases::get_responses::GetResponsesUseCase).
//! These are application-layer concerns, not domain policy.

use lorekeeper_domain::FusionPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retrieval and call-pacing parameters.
///
/// | Field | Default | Used by |
/// |-------|---------|---------|
/// | `dense_k` | 5 | dense retriever |
/// | `dense_fetch_k` | 15 | dense retriever candidate pool |
/// | `sparse_k` | 5 | sparse retriever |
/// | `fusion` | 0.75 / 0.25 | ensemble retriever |
/// | `pacing_delay` | 1 s | between generation calls |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Passages returned by the dense index.
    pub dense_k: usize,
    /// Candidates the dense index scores before keeping `dense_k`.
    pub dense_fetch_k: usize,
    /// Passages returned by the sparse index.
    pub sparse_k: usize,
    /// How the two lists are merged.
    pub fusion: FusionPolicy,
    /// Pause between consecutive generation calls (rate limits).
    pub pacing_delay: Duration,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            dense_k: 5,
            dense_fetch_k: 15,
            sparse_k: 5,
            fusion: FusionPolicy::default(),
            pacing_delay: Duration::from_secs(1),
        }
    }
}

impl PipelineParams {
    // ==================== Builder Methods ====================

    pub fn with_dense_k(mut self, k: usize) -> Self {
        self.dense_k = k;
        self
    }

    pub fn with_dense_fetch_k(mut self, fetch_k: usize) -> Self {
        self.dense_fetch_k = fetch_k;
        self
    }

    pub fn with_sparse_k(mut self, k: usize) -> Self {
        self.sparse_k = k;
        self
    }

    pub fn with_fusion(mut self, fusion: FusionPolicy) -> Self {
        self.fusion = fusion;
        self
    }

    pub fn with_pacing_delay(mut self, delay: Duration) -> Self {
        self.pacing_delay = delay;
        self
    }

    /// No pauses between calls (tests, local models)
    pub fn without_pacing(self) -> Self {
        self.with_pacing_delay(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = PipelineParams::default();
        assert_eq!(params.dense_k, 5);
        assert_eq!(params.dense_fetch_k, 15);
        assert_eq!(params.sparse_k, 5);
        assert_eq!(params.fusion.weights.dense, 0.75);
        assert_eq!(params.fusion.weights.sparse, 0.25);
        assert_eq!(params.pacing_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_builder() {
        let params = PipelineParams::default()
            .with_dense_k(3)
            .with_dense_fetch_k(9)
            .with_sparse_k(2)
            .without_pacing();

        assert_eq!(params.dense_k, 3);
        assert_eq!(params.dense_fetch_k, 9);
        assert_eq!(params.sparse_k, 2);
        assert!(params.pacing_delay.is_zero());
    }
}
