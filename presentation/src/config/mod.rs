//! Presentation-level configuration
//!
//! REPL behavior that does not belong in the session itself.

use serde::{Deserialize, Serialize};

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Animated bars; plain stderr lines when false
    pub fancy_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            fancy_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_fancy_progress(mut self, fancy: bool) -> Self {
        self.fancy_progress = fancy;
        self
    }

    pub fn with_history_file(mut self, path: Option<String>) -> Self {
        self.history_file = path;
        self
    }
}
