//! Retrieved context handed to the answer generator

use crate::core::passage::Passage;
use serde::{Deserialize, Serialize};

/// Evidence found for one query
///
/// `NoEvidence` is distinct from an empty passage list so the prompt can
/// say so explicitly instead of silently sending an empty context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "passages", rename_all = "snake_case")]
pub enum RetrievedContext {
    Evidence(Vec<Passage>),
    NoEvidence,
}

impl RetrievedContext {
    pub fn from_passages(passages: Vec<Passage>) -> Self {
        if passages.is_empty() {
            Self::NoEvidence
        } else {
            Self::Evidence(passages)
        }
    }

    pub fn passages(&self) -> &[Passage] {
        match self {
            Self::Evidence(passages) => passages,
            Self::NoEvidence => &[],
        }
    }

    pub fn has_evidence(&self) -> bool {
        matches!(self, Self::Evidence(_))
    }

    pub fn into_passages(self) -> Vec<Passage> {
        match self {
            Self::Evidence(passages) => passages,
            Self::NoEvidence => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_becomes_no_evidence() {
        let ctx = RetrievedContext::from_passages(vec![]);
        assert_eq!(ctx, RetrievedContext::NoEvidence);
        assert!(!ctx.has_evidence());
        assert!(ctx.passages().is_empty());
    }

    #[test]
    fn test_evidence_keeps_order() {
        let ctx = RetrievedContext::from_passages(vec![
            Passage::new(2, "b"),
            Passage::new(1, "a"),
        ]);
        assert!(ctx.has_evidence());
        let positions: Vec<usize> = ctx.into_passages().iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![2, 1]);
    }
}
