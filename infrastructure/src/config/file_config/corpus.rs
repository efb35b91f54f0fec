//! Corpus and index storage configuration from TOML (`[corpus]` section)

use serde::{Deserialize, Serialize};

/// Raw corpus configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCorpusConfig {
    /// UTF-8 text file holding the whole corpus
    pub path: String,
    /// Maximum passage length in characters
    pub chunk_size: usize,
    /// Characters shared by consecutive passages
    pub chunk_overlap: usize,
    /// Where the dense index is persisted
    pub index_path: String,
    /// Passages per embedding request when building the dense index
    pub embed_batch_size: usize,
}

impl Default for FileCorpusConfig {
    fn default() -> Self {
        Self {
            path: "data/all_content.txt".to_string(),
            chunk_size: 500,
            chunk_overlap: 50,
            index_path: "dense_index.json".to_string(),
            embed_batch_size: 16,
        }
    }
}
