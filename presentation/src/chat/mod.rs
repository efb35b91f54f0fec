//! Interactive chat module
//!
//! Provides a readline-based chat where each line is a question and
//! slash commands adjust the session.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
