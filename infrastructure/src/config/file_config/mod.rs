//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application and domain
//! types by the accessor methods on [`FileConfig`].

mod corpus;
mod dialogue;
mod logging;
mod pipeline;
mod provider;
mod retrieval;

pub use corpus::FileCorpusConfig;
pub use dialogue::FileDialogueConfig;
pub use logging::FileLoggingConfig;
pub use pipeline::FilePipelineConfig;
pub use provider::FileProviderConfig;
pub use retrieval::FileRetrievalConfig;

use lorekeeper_application::PipelineParams;
use lorekeeper_domain::{AttemptCount, ConfidenceScorer, Lexicon};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work as written.
    Error,
    /// The configuration works but a value was ignored or adjusted.
    Warning,
}

/// A detected problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted TOML path of the offending key
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat and embedding API
    pub provider: FileProviderConfig,
    /// Corpus file, splitting and dense index storage
    pub corpus: FileCorpusConfig,
    /// Retrieval depth and fusion weights
    pub retrieval: FileRetrievalConfig,
    /// Pacing and scoring language
    pub pipeline: FilePipelineConfig,
    /// Per-session defaults and terminal output
    pub dialogue: FileDialogueConfig,
    /// Turn transcript
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Err(e) = AttemptCount::new(self.dialogue.attempts) {
            issues.push(ConfigIssue::error("dialogue.attempts", e.to_string()));
        }

        let retrieval = &self.retrieval;
        for (field, weight) in [
            ("retrieval.dense_weight", retrieval.dense_weight),
            ("retrieval.sparse_weight", retrieval.sparse_weight),
        ] {
            if weight <= 0.0 || !weight.is_finite() {
                issues.push(ConfigIssue::error(
                    field,
                    format!("weight must be a positive number, got {}", weight),
                ));
            }
        }
        if retrieval.dense_k == 0 && retrieval.sparse_k == 0 {
            issues.push(ConfigIssue::error(
                "retrieval.dense_k",
                "dense_k and sparse_k cannot both be 0",
            ));
        }
        if retrieval.dense_fetch_k < retrieval.dense_k {
            issues.push(ConfigIssue::warning(
                "retrieval.dense_fetch_k",
                format!(
                    "dense_fetch_k ({}) is below dense_k ({}), using dense_k",
                    retrieval.dense_fetch_k, retrieval.dense_k
                ),
            ));
        }

        let corpus = &self.corpus;
        if corpus.chunk_size == 0 {
            issues.push(ConfigIssue::error("corpus.chunk_size", "chunk_size cannot be 0"));
        } else if corpus.chunk_overlap >= corpus.chunk_size {
            issues.push(ConfigIssue::error(
                "corpus.chunk_overlap",
                format!(
                    "chunk_overlap ({}) must be smaller than chunk_size ({})",
                    corpus.chunk_overlap, corpus.chunk_size
                ),
            ));
        }
        if corpus.embed_batch_size == 0 {
            issues.push(ConfigIssue::error(
                "corpus.embed_batch_size",
                "embed_batch_size cannot be 0",
            ));
        }

        if self.provider.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "provider.timeout_secs",
                "timeout_secs cannot be 0",
            ));
        }

        if Lexicon::for_language(&self.pipeline.language).is_none() {
            issues.push(ConfigIssue::warning(
                "pipeline.language",
                format!(
                    "unknown language '{}', falling back to 'ru'",
                    self.pipeline.language
                ),
            ));
        }

        issues
    }

    /// Retrieval and pacing parameters for the turn pipeline
    pub fn pipeline_params(&self) -> PipelineParams {
        let retrieval = &self.retrieval;
        PipelineParams::default()
            .with_dense_k(retrieval.dense_k)
            .with_dense_fetch_k(retrieval.dense_fetch_k.max(retrieval.dense_k))
            .with_sparse_k(retrieval.sparse_k)
            .with_fusion(retrieval.fusion_policy())
            .with_pacing_delay(Duration::from_millis(self.pipeline.pacing_ms))
    }

    /// Confidence scorer for the configured language
    pub fn scorer(&self) -> ConfidenceScorer {
        ConfidenceScorer::new(Lexicon::for_language(&self.pipeline.language).unwrap_or_default())
    }
}
