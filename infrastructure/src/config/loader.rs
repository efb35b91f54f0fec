//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["lorekeeper.toml", ".lorekeeper.toml"];

/// Prefix for environment overrides (`LOREKEEPER_DIALOGUE__ATTEMPTS=3`)
const ENV_PREFIX: &str = "LOREKEEPER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. `LOREKEEPER_*` environment variables, `__` separating sections
    /// 3. Project root: `./lorekeeper.toml` or `./.lorekeeper.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/lorekeeper/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        Self::figment(global.as_deref(), Self::project_config_path().as_deref(), config_path)
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&PathBuf>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// `$XDG_CONFIG_HOME/lorekeeper/config.toml`, or the platform
    /// equivalent when the variable is unset.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("lorekeeper").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        println!("  [     ] Env:      {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project:  {}", path.display());
        } else {
            println!("  [     ] Project:  ./lorekeeper.toml or ./.lorekeeper.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:   {}", path.display());
            } else {
                println!("  [     ] Global:   {}", path.display());
            }
        }

        println!("  [     ] Default:  built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.dialogue.attempts, 1);
        assert_eq!(config.provider.chat_model, "mistral-large-latest");
        assert!(config.logging.transcript);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("lorekeeper"));
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("project.toml");
        let explicit = dir.path().join("explicit.toml");

        fs::write(&global, "[dialogue]\nattempts = 2\nshow_sources = true\n").unwrap();
        fs::write(&project, "[dialogue]\nattempts = 3\n").unwrap();
        fs::write(&explicit, "[corpus]\nchunk_size = 700\n").unwrap();

        let config: FileConfig =
            ConfigLoader::figment(Some(&global), Some(&project), Some(&explicit))
                .extract()
                .unwrap();

        assert_eq!(config.dialogue.attempts, 3);
        assert!(config.dialogue.show_sources);
        assert_eq!(config.corpus.chunk_size, 700);
        // Untouched keys keep their defaults
        assert_eq!(config.corpus.chunk_overlap, 50);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("bad.toml");
        fs::write(&explicit, "[dialogue]\nattempts = \"many\"\n").unwrap();

        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(&explicit)).extract();
        assert!(result.is_err());
    }
}
