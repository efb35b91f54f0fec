//! Generation provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// Raw Mistral-compatible API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Direct API key (prefer the environment variable).
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset.
    pub api_key_env: String,
    /// API root, without the endpoint path.
    pub base_url: String,
    /// Model used for paraphrasing and answering.
    pub chat_model: String,
    /// Model used for passage and query embeddings.
    pub embed_model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Sampling temperature; the API default when unset.
    pub temperature: Option<f32>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "MISTRAL_API_KEY".to_string(),
            base_url: "https://api.mistral.ai/v1".to_string(),
            chat_model: "mistral-large-latest".to_string(),
            embed_model: "mistral-embed".to_string(),
            timeout_secs: 10,
            temperature: None,
        }
    }
}

impl FileProviderConfig {
    /// The configured key, or the one in `api_key_env`
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_wins() {
        let config = FileProviderConfig {
            api_key: Some("sk-test".into()),
            api_key_env: "LOREKEEPER_TEST_UNSET_KEY_VAR".into(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = FileProviderConfig {
            api_key: Some("  ".into()),
            api_key_env: "LOREKEEPER_TEST_UNSET_KEY_VAR".into(),
            ..Default::default()
        };
        assert!(config.resolve_api_key().is_none());
    }
}
