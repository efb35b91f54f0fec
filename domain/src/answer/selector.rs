//! Best-response selection

use super::candidate::{CandidateResponse, ResponseSet};
use crate::core::error::DomainError;

/// Return the candidate with the highest confidence
///
/// Ties go to the earliest candidate, so the original question wins over its
/// paraphrases when they score the same.
pub fn select_best(candidates: &[CandidateResponse]) -> Result<&CandidateResponse, DomainError> {
    let mut iter = candidates.iter();
    let mut best = iter.next().ok_or(DomainError::NoCandidates)?;
    for candidate in iter {
        if candidate.confidence > best.confidence {
            best = candidate;
        }
    }
    Ok(best)
}

impl ResponseSet {
    /// Index of the best candidate (see [`select_best`])
    pub fn best_index(&self) -> Result<usize, DomainError> {
        let best = select_best(&self.candidates)?;
        Ok(self
            .candidates
            .iter()
            .position(|c| std::ptr::eq(c, best))
            .unwrap_or(0))
    }

    pub fn best(&self) -> Result<&CandidateResponse, DomainError> {
        select_best(&self.candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(query: &str, confidence: f64) -> CandidateResponse {
        CandidateResponse::new(query, format!("answer to {}", query), vec![], confidence)
    }

    #[test]
    fn test_selects_maximum() {
        let candidates = vec![candidate("a", 1.0), candidate("b", 3.5), candidate("c", 2.0)];
        assert_eq!(select_best(&candidates).unwrap().query, "b");
    }

    #[test]
    fn test_tie_goes_to_first() {
        let candidates = vec![candidate("a", 1.0), candidate("b", 2.0), candidate("c", 2.0)];
        assert_eq!(select_best(&candidates).unwrap().query, "b");
    }

    #[test]
    fn test_single_candidate() {
        let candidates = vec![candidate("only", 0.0)];
        assert_eq!(select_best(&candidates).unwrap().query, "only");
    }

    #[test]
    fn test_empty_is_error() {
        assert_eq!(select_best(&[]).unwrap_err(), DomainError::NoCandidates);
    }

    #[test]
    fn test_response_set_best_index() {
        let mut set = ResponseSet::new("a");
        set.push(candidate("a", 0.4));
        set.push(candidate("b", 0.9));
        set.push(candidate("c", 0.9));
        assert_eq!(set.best_index().unwrap(), 1);
        assert_eq!(set.best().unwrap().query, "b");
    }
}
