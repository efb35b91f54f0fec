//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question about the corpus (Value Object)
///
/// Represents the user's original query. Paraphrases are plain strings
/// derived from it; only the original needs validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question, trimming surrounding whitespace
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::new(s)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("Кто такой Джон Сноу?").unwrap();
        assert_eq!(q.content(), "Кто такой Джон Сноу?");
    }

    #[test]
    fn test_question_is_trimmed() {
        let q = Question::new("  Who rules Winterfell?\n").unwrap();
        assert_eq!(q.content(), "Who rules Winterfell?");
    }

    #[test]
    fn test_empty_question_rejected() {
        assert!(Question::new("").is_err());
        assert!(Question::new("   ").is_err());
    }

    #[test]
    fn test_try_from_str() {
        let q: Question = "What is the Wall?".try_into().unwrap();
        assert_eq!(q.to_string(), "What is the Wall?");
    }
}
