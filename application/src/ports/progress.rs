//! Progress notification port
//!
//! Defines the interface for reporting progress during a question-answering
//! turn.

/// Callback for progress updates during a turn
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, chat bot typing indicator, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called before the paraphrase generation call
    fn on_paraphrasing_start(&self) {}

    /// Called with the full phrasing list (original first)
    fn on_paraphrases_ready(&self, queries: &[String]);

    /// Called when answering of one phrasing starts (0-indexed)
    fn on_attempt_start(&self, index: usize, total: usize, query: &str);

    /// Called when one phrasing is done; `confidence` is `None` on failure
    fn on_attempt_complete(&self, index: usize, confidence: Option<f64>);

    /// Called once all phrasings have been tried
    fn on_turn_complete(&self, answered: usize, total: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_paraphrases_ready(&self, _queries: &[String]) {}
    fn on_attempt_start(&self, _index: usize, _total: usize, _query: &str) {}
    fn on_attempt_complete(&self, _index: usize, _confidence: Option<f64>) {}
    fn on_turn_complete(&self, _answered: usize, _total: usize) {}
}
