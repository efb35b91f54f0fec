//! Weighted rank fusion of dense and sparse retrieval results
//!
//! Each passage at 1-indexed rank `r` in a list with weight `w` scores
//! `w / (c + r)`. Lists are merged by descending score. With the default
//! weights (dense 0.75, sparse 0.25) every dense hit outranks every sparse
//! hit for the short lists the pipeline requests, so truncation always keeps
//! the semantic matches first.

use crate::core::passage::Passage;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard reciprocal-rank constant
pub const RANK_CONSTANT: usize = 60;

/// Relative weights of the two retrieval signals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionWeights {
    pub dense: f64,
    pub sparse: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            dense: 0.75,
            sparse: 0.25,
        }
    }
}

/// How the fused list is assembled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionPolicy {
    pub weights: FusionWeights,
    /// The `c` in `w / (c + rank)`
    pub rank_constant: usize,
    /// Merge passages with identical content, summing their scores.
    /// Off by default: the same chunk found by both indexes appears twice.
    pub deduplicate: bool,
    /// Keep at most this many passages after ordering
    pub limit: Option<usize>,
}

impl Default for FusionPolicy {
    fn default() -> Self {
        Self {
            weights: FusionWeights::default(),
            rank_constant: RANK_CONSTANT,
            deduplicate: false,
            limit: None,
        }
    }
}

impl FusionPolicy {
    pub fn with_weights(mut self, weights: FusionWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// A passage with its fused score, remembering which list it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPassage {
    pub passage: Passage,
    pub score: f64,
    /// Index of the contributing list (0 = dense, 1 = sparse)
    pub list: usize,
    /// 1-indexed rank within that list
    pub rank: usize,
}

/// Fuse two ranked lists into one ordered candidate list
pub fn fuse(dense: Vec<Passage>, sparse: Vec<Passage>, policy: &FusionPolicy) -> Vec<Passage> {
    weighted_rank_fusion(
        vec![(policy.weights.dense, dense), (policy.weights.sparse, sparse)],
        policy,
    )
    .into_iter()
    .map(|scored| scored.passage)
    .collect()
}

/// Fuse any number of `(weight, ranked list)` pairs
///
/// Ties on score are broken by list order, then by rank, so the result is
/// fully deterministic.
pub fn weighted_rank_fusion(
    lists: Vec<(f64, Vec<Passage>)>,
    policy: &FusionPolicy,
) -> Vec<ScoredPassage> {
    let c = policy.rank_constant as f64;
    let mut scored: Vec<ScoredPassage> = Vec::new();
    let mut by_content: HashMap<String, usize> = HashMap::new();

    for (list, (weight, passages)) in lists.into_iter().enumerate() {
        for (i, passage) in passages.into_iter().enumerate() {
            let rank = i + 1;
            let contribution = weight / (c + rank as f64);

            if policy.deduplicate {
                if let Some(&existing) = by_content.get(&passage.content) {
                    scored[existing].score += contribution;
                    continue;
                }
                by_content.insert(passage.content.clone(), scored.len());
            }

            scored.push(ScoredPassage {
                passage,
                score: contribution,
                list,
                rank,
            });
        }
    }

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.list.cmp(&b.list))
            .then(a.rank.cmp(&b.rank))
    });

    if let Some(limit) = policy.limit {
        scored.truncate(limit);
    }

    scored
}
