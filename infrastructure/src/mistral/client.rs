//! HTTP client for the Mistral chat completions and embeddings API

use super::error::{MistralError, Result};
use super::types::{ChatMessage, ChatRequest, ChatResponse, EmbedRequest, EmbedResponse};
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use lorekeeper_application::{Embedder, EmbeddingError, GenerationError, Generator};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Connection settings resolved from `[provider]`
#[derive(Debug, Clone)]
pub struct MistralSettings {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub embed_model: String,
    pub timeout: Duration,
    pub temperature: Option<f32>,
}

impl MistralSettings {
    pub fn from_config(config: &FileProviderConfig) -> Result<Self> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| MistralError::MissingApiKey(config.api_key_env.clone()))?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            chat_model: config.chat_model.clone(),
            embed_model: config.embed_model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            temperature: config.temperature,
        })
    }
}

/// Mistral API client implementing both text generation and embeddings
pub struct MistralClient {
    http: reqwest::Client,
    settings: MistralSettings,
}

impl MistralClient {
    pub fn new(settings: MistralSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| MistralError::Client(e.to_string()))?;
        Ok(Self { http, settings })
    }

    pub fn settings(&self) -> &MistralSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url, path)
    }

    async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let response = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(&self.settings.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MistralError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| MistralError::ParseError(e.to_string()))
    }

    /// Send a chat completion and return the first choice's text
    pub async fn chat(&self, system: Option<&str>, prompt: &str) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        let request = ChatRequest {
            model: &self.settings.chat_model,
            messages,
            temperature: self.settings.temperature,
        };

        debug!(
            "Chat request to {} ({} prompt chars)",
            self.settings.chat_model,
            prompt.chars().count()
        );
        let response: ChatResponse = self.post("chat/completions", &request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(MistralError::NoChoices)
    }

    /// Embed `texts` with the configured embedding model
    pub async fn embeddings(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let request = EmbedRequest {
            model: &self.settings.embed_model,
            input: texts,
        };
        let response: EmbedResponse = self.post("embeddings", &request).await?;
        Ok(response.into_vectors())
    }
}

#[async_trait]
impl Generator for MistralClient {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        Ok(self.chat(None, prompt).await?)
    }

    async fn generate_with_system(
        &self,
        system: &str,
        prompt: &str,
    ) -> std::result::Result<String, GenerationError> {
        Ok(self.chat(Some(system), prompt).await?)
    }

    fn model_name(&self) -> &str {
        &self.settings.chat_model
    }
}

#[async_trait]
impl Embedder for MistralClient {
    async fn embed(&self, texts: &[String]) -> std::result::Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let vectors = self.embeddings(texts).await?;
        if vectors.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                got: vectors.len(),
            });
        }
        Ok(vectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(api_key: Option<&str>) -> FileProviderConfig {
        FileProviderConfig {
            api_key: api_key.map(str::to_string),
            api_key_env: "LOREKEEPER_TEST_UNSET_KEY_VAR".into(),
            base_url: "https://api.example.test/v1/".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_settings_from_config() {
        let settings = MistralSettings::from_config(&provider(Some("sk-1"))).unwrap();
        assert_eq!(settings.api_key, "sk-1");
        assert_eq!(settings.base_url, "https://api.example.test/v1");
        assert_eq!(settings.chat_model, "mistral-large-latest");
        assert_eq!(settings.embed_model, "mistral-embed");
        assert_eq!(settings.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_key() {
        let err = MistralSettings::from_config(&provider(None)).unwrap_err();
        assert!(matches!(
            err,
            MistralError::MissingApiKey(var) if var == "LOREKEEPER_TEST_UNSET_KEY_VAR"
        ));
    }

    #[test]
    fn test_endpoints() {
        let settings = MistralSettings::from_config(&provider(Some("sk-1"))).unwrap();
        let client = MistralClient::new(settings).unwrap();
        assert_eq!(
            client.endpoint("chat/completions"),
            "https://api.example.test/v1/chat/completions"
        );
        assert_eq!(client.model_name(), "mistral-large-latest");
    }

    #[tokio::test]
    async fn test_empty_embed_makes_no_request() {
        let settings = MistralSettings::from_config(&provider(Some("sk-1"))).unwrap();
        let client = MistralClient::new(settings).unwrap();
        assert!(client.embed(&[]).await.unwrap().is_empty());
    }
}
