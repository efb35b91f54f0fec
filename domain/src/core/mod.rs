//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated user question
//! - [`attempts::AttemptCount`]: how many phrasings are answered per turn
//! - [`passage::Passage`]: a retrieved chunk of corpus text
//! - [`error::DomainError`]: domain-level errors

pub mod attempts;
pub mod error;
pub mod passage;
pub mod question;
pub mod string;
