//! Per-user session settings
//!
//! Each chat user (or REPL) owns one [`SessionContext`] and passes it into
//! every pipeline call, so no setting lives in global state.

use crate::core::attempts::AttemptCount;
use serde::{Deserialize, Serialize};

/// Default number of characters shown per source passage
pub const DEFAULT_SOURCE_PREVIEW_LEN: usize = 200;

/// Settings that shape one user's question-answering turns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Phrasings answered per question (original included)
    pub num_attempts: AttemptCount,
    /// Print the passages backing the chosen answer
    pub show_sources: bool,
    /// Characters of each passage to print
    pub source_preview_len: usize,
    /// Print every candidate with its confidence, not just the winner
    pub show_all_answers: bool,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            num_attempts: AttemptCount::single(),
            show_sources: false,
            source_preview_len: DEFAULT_SOURCE_PREVIEW_LEN,
            show_all_answers: false,
        }
    }
}

impl SessionContext {
    pub fn with_attempts(mut self, attempts: AttemptCount) -> Self {
        self.num_attempts = attempts;
        self
    }

    pub fn with_sources(mut self, show: bool) -> Self {
        self.show_sources = show;
        self
    }

    pub fn with_source_preview_len(mut self, len: usize) -> Self {
        self.source_preview_len = len;
        self
    }

    pub fn with_all_answers(mut self, show: bool) -> Self {
        self.show_all_answers = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let ctx = SessionContext::default();
        assert_eq!(ctx.num_attempts.get(), 1);
        assert!(!ctx.show_sources);
        assert_eq!(ctx.source_preview_len, 200);
        assert!(!ctx.show_all_answers);
    }

    #[test]
    fn test_builder() {
        let ctx = SessionContext::default()
            .with_attempts(AttemptCount::new(3).unwrap())
            .with_sources(true)
            .with_source_preview_len(80)
            .with_all_answers(true);

        assert_eq!(ctx.num_attempts.get(), 3);
        assert!(ctx.show_sources);
        assert_eq!(ctx.source_preview_len, 80);
        assert!(ctx.show_all_answers);
    }
}
