//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_with_context;
pub mod ensemble_retriever;
pub mod get_responses;
pub mod paraphrase;
