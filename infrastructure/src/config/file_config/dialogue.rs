//! Dialogue defaults from TOML (`[dialogue]` section)

use lorekeeper_domain::{AttemptCount, OutputFormat, SessionContext};
use lorekeeper_domain::session::context::DEFAULT_SOURCE_PREVIEW_LEN;
use serde::{Deserialize, Serialize};

/// Raw per-session defaults; each chat session starts from these
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDialogueConfig {
    /// Phrasings tried per question (1-6)
    pub attempts: usize,
    pub show_sources: bool,
    /// Characters of each source shown
    pub source_preview_len: usize,
    pub show_all_answers: bool,
    /// Output format for single-question mode
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators
    pub show_progress: bool,
    /// Animated progress bars; plain stderr lines when false
    pub fancy_progress: bool,
    /// REPL history file
    pub history_file: Option<String>,
}

impl Default for FileDialogueConfig {
    fn default() -> Self {
        Self {
            attempts: 1,
            show_sources: false,
            source_preview_len: DEFAULT_SOURCE_PREVIEW_LEN,
            show_all_answers: false,
            format: None,
            color: true,
            show_progress: true,
            fancy_progress: true,
            history_file: None,
        }
    }
}

impl FileDialogueConfig {
    /// Session defaults; an out-of-range attempt count falls back to one
    pub fn session_context(&self) -> SessionContext {
        SessionContext::default()
            .with_attempts(AttemptCount::new(self.attempts).unwrap_or_default())
            .with_sources(self.show_sources)
            .with_source_preview_len(self.source_preview_len)
            .with_all_answers(self.show_all_answers)
    }
}
