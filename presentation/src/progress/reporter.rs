//! Progress reporting for question-answering turns

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use lorekeeper_application::ports::progress::{NoProgress, ProgressNotifier};
use lorekeeper_domain::core::string::preview;
use std::sync::Mutex;
use std::time::Duration;

const QUERY_PREVIEW_CHARS: usize = 50;

/// Pick a progress display: none, plain lines, or animated bars
pub fn progress_notifier(show: bool, fancy: bool) -> Box<dyn ProgressNotifier> {
    match (show, fancy) {
        (false, _) => Box::new(NoProgress),
        (true, true) => Box::new(ProgressReporter::new()),
        (true, false) => Box::new(SimpleProgress),
    }
}

/// Reports progress with a spinner while paraphrasing and a bar over the
/// phrasings while answering
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn attempts_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap()
    }

    fn replace_bar(&self, bar: Option<ProgressBar>) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(old) = slot.take() {
                old.finish_and_clear();
            }
            *slot = bar;
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(slot) = self.bar.lock()
            && let Some(bar) = slot.as_ref()
        {
            f(bar);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_paraphrasing_start(&self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix("Paraphrasing");
        spinner.set_message("asking for other phrasings...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.replace_bar(Some(spinner));
    }

    fn on_paraphrases_ready(&self, queries: &[String]) {
        let bar = ProgressBar::new(queries.len() as u64);
        bar.set_style(Self::attempts_style());
        bar.set_prefix("Answering");
        bar.enable_steady_tick(Duration::from_millis(100));
        self.replace_bar(Some(bar));
    }

    fn on_attempt_start(&self, _index: usize, _total: usize, query: &str) {
        self.with_bar(|bar| bar.set_message(preview(query, QUERY_PREVIEW_CHARS).to_string()));
    }

    fn on_attempt_complete(&self, _index: usize, confidence: Option<f64>) {
        self.with_bar(|bar| {
            let status = match confidence {
                Some(c) => format!("{} {:.2}", "v".green(), c),
                None => format!("{} failed", "x".red()),
            };
            bar.set_message(status);
            bar.inc(1);
        });
    }

    fn on_turn_complete(&self, _answered: usize, _total: usize) {
        self.replace_bar(None);
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_paraphrasing_start(&self) {
        eprintln!("{} {}", "->".cyan(), "Paraphrasing".bold());
    }

    fn on_paraphrases_ready(&self, queries: &[String]) {
        eprintln!(
            "{} {} ({} phrasings)",
            "->".cyan(),
            "Answering".bold(),
            queries.len()
        );
    }

    fn on_attempt_start(&self, index: usize, total: usize, query: &str) {
        eprintln!(
            "  [{}/{}] {}",
            index + 1,
            total,
            preview(query, QUERY_PREVIEW_CHARS)
        );
    }

    fn on_attempt_complete(&self, _index: usize, confidence: Option<f64>) {
        match confidence {
            Some(c) => eprintln!("  {} confidence {:.2}", "v".green(), c),
            None => eprintln!("  {} failed", "x".red()),
        }
    }

    fn on_turn_complete(&self, answered: usize, total: usize) {
        eprintln!("{} {}/{} answered", "->".cyan(), answered, total);
    }
}
