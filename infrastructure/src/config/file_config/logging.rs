//! Transcript configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw transcript settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write a JSONL record per turn
    pub transcript: bool,
    /// Transcript location; the platform data directory when unset
    pub transcript_path: Option<String>,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            transcript: true,
            transcript_path: None,
        }
    }
}
