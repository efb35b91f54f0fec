//! Session domain.
//!
//! - [`context::SessionContext`]: one user's question-answering settings

pub mod context;
