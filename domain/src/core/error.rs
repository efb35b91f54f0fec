//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Attempt count must be between {min} and {max}, got {got}")]
    InvalidAttemptCount { got: usize, min: usize, max: usize },

    #[error("No candidate responses to select from")]
    NoCandidates,
}

impl DomainError {
    /// Check if this error is a caller-side validation failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidQuestion(_) | DomainError::InvalidAttemptCount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_count_error_display() {
        let error = DomainError::InvalidAttemptCount {
            got: 9,
            min: 1,
            max: 6,
        };
        assert_eq!(
            error.to_string(),
            "Attempt count must be between 1 and 6, got 9"
        );
    }

    #[test]
    fn test_is_validation_check() {
        assert!(DomainError::InvalidQuestion("".to_string()).is_validation());
        assert!(
            DomainError::InvalidAttemptCount {
                got: 0,
                min: 1,
                max: 6
            }
            .is_validation()
        );
        assert!(!DomainError::NoCandidates.is_validation());
    }
}
