//! Retrieval configuration from TOML (`[retrieval]` section)

use lorekeeper_domain::{FusionPolicy, FusionWeights};
use serde::{Deserialize, Serialize};

/// Raw retrieval depth and fusion weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetrievalConfig {
    pub dense_k: usize,
    pub dense_fetch_k: usize,
    pub sparse_k: usize,
    pub dense_weight: f64,
    pub sparse_weight: f64,
    /// Merge identical passages found by both indexes
    pub deduplicate: bool,
}

impl Default for FileRetrievalConfig {
    fn default() -> Self {
        let weights = FusionWeights::default();
        Self {
            dense_k: 5,
            dense_fetch_k: 15,
            sparse_k: 5,
            dense_weight: weights.dense,
            sparse_weight: weights.sparse,
            deduplicate: false,
        }
    }
}

impl FileRetrievalConfig {
    pub fn fusion_policy(&self) -> FusionPolicy {
        FusionPolicy::default()
            .with_weights(FusionWeights {
                dense: self.dense_weight,
                sparse: self.sparse_weight,
            })
            .with_deduplicate(self.deduplicate)
    }
}
