//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for a question-answering turn
///
/// This is a domain concept representing how the result should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every candidate with its paraphrased query and confidence
    Full,
    /// Only the selected answer (default)
    #[default]
    Answer,
    /// JSON output
    Json,
}
