//! Domain layer for lorekeeper
//!
//! This crate contains the core decision logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Paraphrase ensemble
//!
//! One question is asked several ways. Each phrasing is answered on its own
//! retrieved evidence, and the answers compete on a confidence score:
//!
//! - **Retrieval fusion**: dense and sparse rankings merged by weighted rank
//! - **Confidence scoring**: length, source overlap, fact density, structure,
//!   minus hedging and admissions of ignorance
//! - **Selection**: highest confidence wins, earliest on ties

pub mod answer;
pub mod config;
pub mod core;
pub mod prompt;
pub mod retrieval;
pub mod session;

// Re-export commonly used types
pub use answer::{
    BestAnswer, CandidateResponse, ConfidenceScorer, Lexicon, ResponseSet, ScoreBreakdown,
    paraphrase_set, parse_paraphrases, select_best,
};
pub use config::OutputFormat;
pub use core::{
    attempts::AttemptCount, error::DomainError, passage::Passage, question::Question,
};
pub use prompt::{NO_EVIDENCE_MARKER, PromptTemplate};
pub use retrieval::{FusionPolicy, FusionWeights, RetrievedContext, fuse};
pub use session::context::SessionContext;
