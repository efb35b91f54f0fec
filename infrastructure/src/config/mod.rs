//! Configuration file loading for lorekeeper
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `LOREKEEPER_*` environment variables
//! 3. Project root: `./lorekeeper.toml` or `./.lorekeeper.toml`
//! 4. Global: `$XDG_CONFIG_HOME/lorekeeper/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileCorpusConfig, FileDialogueConfig, FileLoggingConfig,
    FilePipelineConfig, FileProviderConfig, FileRetrievalConfig, Severity,
};
pub use loader::ConfigLoader;
