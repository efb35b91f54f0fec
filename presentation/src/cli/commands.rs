//! CLI command definitions

use clap::{Parser, ValueEnum};
use lorekeeper_domain::{AttemptCount, OutputFormat as DomainOutputFormat};
use std::path::PathBuf;

/// Output format for single-question mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every candidate with its confidence, then the chosen answer
    Full,
    /// Only the chosen answer
    Answer,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Answer => DomainOutputFormat::Answer,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for lorekeeper
#[derive(Parser, Debug)]
#[command(name = "lorekeeper")]
#[command(author, version, about = "Answer questions about a book series from its own text")]
#[command(long_about = r#"
Lorekeeper answers questions about a fictional universe using only the text
of its books. Each question can be asked several ways: the question is
paraphrased, every phrasing is answered from the passages retrieved for it,
and the most confident answer is shown.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. LOREKEEPER_* variables   e.g. LOREKEEPER_DIALOGUE__ATTEMPTS=3
3. ./lorekeeper.toml        Project-level config
4. ~/.config/lorekeeper/config.toml   Global config

Example:
  lorekeeper "Кто такой Рейстлин Маджере?"
  lorekeeper -n 4 --sources "Где стоит Башня Высшего Волшебства?"
  lorekeeper --chat -n 3
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Phrasings of the question to try, 1-6
    #[arg(short = 'n', long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub attempts: Option<u8>,

    /// Show the passages the answer was based on
    #[arg(long)]
    pub sources: bool,

    /// Characters of each source passage to show
    #[arg(long, value_name = "N")]
    pub source_len: Option<usize>,

    /// Show every candidate answer, not only the best one
    #[arg(long)]
    pub all_answers: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Re-embed the corpus even if a saved dense index exists
    #[arg(long)]
    pub rebuild_index: bool,
}

impl Cli {
    /// The attempt count given on the command line, if any
    pub fn attempt_count(&self) -> Option<AttemptCount> {
        self.attempts
            .and_then(|n| AttemptCount::new(n as usize).ok())
    }
}
