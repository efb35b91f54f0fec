//! Structured transcript logging.
//!
//! Provides [`JsonlConversationLogger`], the JSONL implementation of the
//! [`ConversationLogger`](lorekeeper_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::{DEFAULT_TRANSCRIPT_FILE, JsonlConversationLogger};
