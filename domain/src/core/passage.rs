//! Passage value object

use serde::{Deserialize, Serialize};

/// An immutable chunk of corpus text returned by retrieval
///
/// `position` is the chunk's index in the split corpus. It is used as a
/// stable identity by the indexes; two passages with the same content but
/// different positions are distinct chunks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Passage {
    pub position: usize,
    pub content: String,
}

impl Passage {
    pub fn new(position: usize, content: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl std::fmt::Display for Passage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passage_identity_includes_position() {
        let a = Passage::new(0, "Зима близко.");
        let b = Passage::new(1, "Зима близко.");
        assert_ne!(a, b);
        assert_eq!(a.content(), b.content());
    }

    #[test]
    fn test_blank_passage() {
        assert!(Passage::new(3, " \n\t").is_blank());
        assert!(!Passage::new(3, "Ланнистеры всегда платят долги").is_blank());
    }
}
