//! Prompt domain
//!
//! Templates for the two kinds of generation calls: paraphrasing a question
//! and answering it from retrieved passages.

mod template;

pub use template::{NO_EVIDENCE_MARKER, PromptTemplate};
