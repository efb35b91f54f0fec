//! Attempt count value object
//!
//! The number of phrasings (original + paraphrases) answered per user turn.

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Validated number of answering attempts per question (1..=6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct AttemptCount(usize);

impl AttemptCount {
    pub const MIN: usize = 1;
    pub const MAX: usize = 6;

    /// Validate and wrap an attempt count
    pub fn new(count: usize) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&count) {
            return Err(DomainError::InvalidAttemptCount {
                got: count,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(count))
    }

    /// A single attempt: answer the original question only
    pub const fn single() -> Self {
        Self(1)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of paraphrases to request besides the original
    pub fn paraphrases_needed(self) -> usize {
        self.0 - 1
    }
}

impl Default for AttemptCount {
    fn default() -> Self {
        Self::single()
    }
}

impl TryFrom<usize> for AttemptCount {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AttemptCount> for usize {
    fn from(value: AttemptCount) -> Self {
        value.0
    }
}

impl std::fmt::Display for AttemptCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        for n in 1..=6 {
            assert_eq!(AttemptCount::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(AttemptCount::new(0).is_err());
        assert!(AttemptCount::new(7).is_err());
    }

    #[test]
    fn test_paraphrases_needed() {
        assert_eq!(AttemptCount::single().paraphrases_needed(), 0);
        assert_eq!(AttemptCount::new(4).unwrap().paraphrases_needed(), 3);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: AttemptCount = serde_json::from_str("3").unwrap();
        assert_eq!(ok.get(), 3);
        assert!(serde_json::from_str::<AttemptCount>("10").is_err());
    }
}
