//! Generator port
//!
//! Defines the interface for text generation calls. Both paraphrasing and
//! answering go through this single call-and-result contract.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a generation call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// A text generation service
///
/// Implementations (adapters) live in the infrastructure layer. Tests use
/// in-memory stubs.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a completion for a single user prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Generate with a separate system instruction.
    ///
    /// Default implementation prepends the system text to the prompt, so
    /// adapters without a system role work unchanged.
    async fn generate_with_system(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        self.generate(&format!("{}\n\n{}", system, prompt)).await
    }

    /// Model identifier, for logs
    fn model_name(&self) -> &str {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl Generator for Echo {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            Ok(prompt.to_string())
        }
    }

    #[tokio::test]
    async fn test_default_system_prompt_is_prepended() {
        let out = Echo.generate_with_system("SYS", "hello").await.unwrap();
        assert_eq!(out, "SYS\n\nhello");
        assert_eq!(Echo.model_name(), "unknown");
    }
}
