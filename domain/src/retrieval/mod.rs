//! Retrieval domain
//!
//! Pure logic for combining the dense (semantic) and sparse (lexical)
//! passage rankings. The indexes themselves live in infrastructure; the
//! application layer calls them through the `Retriever` port and hands the
//! two lists to [`fuse`].

pub mod context;
pub mod fusion;

pub use context::RetrievedContext;
pub use fusion::{
    FusionPolicy, FusionWeights, RANK_CONSTANT, ScoredPassage, fuse, weighted_rank_fusion,
};
