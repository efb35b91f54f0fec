//! Answer selection domain
//!
//! Several phrasings of one question are answered independently; this
//! module holds the pure logic that decides which answer to trust.
//!
//! # Flow
//!
//! ```text
//! question ──► parse_paraphrases ──► [original, p1, .., pN-1]
//!                                          │ (each answered with its own sources)
//!                                          ▼
//!                               ConfidenceScorer::score
//!                                          │
//!                                          ▼
//!                                    select_best
//! ```

pub mod candidate;
pub mod confidence;
pub mod lexicon;
pub mod paraphrase;
pub mod selector;

pub use candidate::{BestAnswer, CandidateResponse, ResponseSet};
pub use confidence::{ConfidenceScorer, ScoreBreakdown};
pub use lexicon::Lexicon;
pub use paraphrase::{paraphrase_set, parse_paraphrases};
pub use selector::select_best;
