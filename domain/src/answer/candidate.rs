//! Candidate responses produced during one question-answering turn

use crate::core::passage::Passage;
use serde::{Deserialize, Serialize};

/// One answer to one phrasing of the user's question
///
/// `sources` are the passages retrieved for `query` itself, not for the
/// original question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResponse {
    pub query: String,
    pub answer: String,
    pub sources: Vec<Passage>,
    pub confidence: f64,
}

impl CandidateResponse {
    pub fn new(
        query: impl Into<String>,
        answer: impl Into<String>,
        sources: Vec<Passage>,
        confidence: f64,
    ) -> Self {
        Self {
            query: query.into(),
            answer: answer.into(),
            sources,
            confidence,
        }
    }
}

/// The answer shown to the user, with the passages backing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestAnswer {
    pub answer: String,
    pub sources: Vec<Passage>,
}

impl From<&CandidateResponse> for BestAnswer {
    fn from(candidate: &CandidateResponse) -> Self {
        Self {
            answer: candidate.answer.clone(),
            sources: candidate.sources.clone(),
        }
    }
}

/// Ordered candidates for a single user turn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseSet {
    /// The question as the user asked it
    pub original_query: String,
    pub candidates: Vec<CandidateResponse>,
}

impl ResponseSet {
    pub fn new(original_query: impl Into<String>) -> Self {
        Self {
            original_query: original_query.into(),
            candidates: Vec::new(),
        }
    }

    pub fn push(&mut self, candidate: CandidateResponse) {
        self.candidates.push(candidate);
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateResponse> {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_set_push() {
        let mut set = ResponseSet::new("Кто убил Джоффри?");
        assert!(set.is_empty());

        set.push(CandidateResponse::new("Кто убил Джоффри?", "Оленна Тирелл", vec![], 1.0));
        set.push(CandidateResponse::new("Кто отравил Джоффри?", "Оленна", vec![], 0.5));

        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().next().unwrap().query, "Кто убил Джоффри?");
    }

    #[test]
    fn test_best_answer_projection() {
        let candidate = CandidateResponse::new(
            "q",
            "Драконий камень",
            vec![Passage::new(4, "Драконий камень — остров")],
            2.0,
        );
        let best = BestAnswer::from(&candidate);
        assert_eq!(best.answer, "Драконий камень");
        assert_eq!(best.sources.len(), 1);
    }
}
