//! Error types for the Mistral adapter

use lorekeeper_application::{EmbeddingError, GenerationError};
use thiserror::Error;

/// Result type alias for Mistral API operations
pub type Result<T> = std::result::Result<T, MistralError>;

/// Errors that can occur when talking to the Mistral API
#[derive(Error, Debug)]
pub enum MistralError {
    #[error("No API key: set provider.api_key or the {0} environment variable")]
    MissingApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Could not connect: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Response contained no choices")]
    NoChoices,
}

impl From<reqwest::Error> for MistralError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            MistralError::Timeout
        } else if e.is_connect() {
            MistralError::Connection(e.to_string())
        } else if e.is_decode() {
            MistralError::ParseError(e.to_string())
        } else {
            MistralError::Connection(e.to_string())
        }
    }
}

impl From<MistralError> for GenerationError {
    fn from(e: MistralError) -> Self {
        match e {
            MistralError::Timeout => GenerationError::Timeout,
            MistralError::Connection(msg) => GenerationError::ConnectionError(msg),
            MistralError::Status { status: 429, body } => GenerationError::RateLimited(body),
            MistralError::NoChoices => GenerationError::EmptyResponse,
            other => GenerationError::RequestFailed(other.to_string()),
        }
    }
}

impl From<MistralError> for EmbeddingError {
    fn from(e: MistralError) -> Self {
        EmbeddingError::RequestFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_mapping() {
        assert_eq!(
            GenerationError::from(MistralError::Timeout),
            GenerationError::Timeout
        );
        assert_eq!(
            GenerationError::from(MistralError::Status {
                status: 429,
                body: "slow down".into()
            }),
            GenerationError::RateLimited("slow down".into())
        );
        assert!(matches!(
            GenerationError::from(MistralError::Status {
                status: 500,
                body: String::new()
            }),
            GenerationError::RequestFailed(_)
        ));
        assert_eq!(
            GenerationError::from(MistralError::NoChoices),
            GenerationError::EmptyResponse
        );
    }
}
