//! Turn pipeline configuration from TOML (`[pipeline]` section)

use serde::{Deserialize, Serialize};

/// Raw pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    /// Pause between generation calls, in milliseconds (0 disables)
    pub pacing_ms: u64,
    /// Lexicon used by the confidence scorer ("ru" or "en")
    pub language: String,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        Self {
            pacing_ms: 1000,
            language: "ru".to_string(),
        }
    }
}
