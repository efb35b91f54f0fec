//! Infrastructure layer for lorekeeper
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod corpus;
pub mod index;
pub mod knowledge_base;
pub mod logging;
pub mod mistral;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use corpus::{Corpus, CorpusError, CorpusLoader, RecursiveSplitter};
pub use index::{DenseIndex, DenseRetriever, IndexError, SparseIndex};
pub use knowledge_base::{KnowledgeBase, KnowledgeBaseError};
pub use logging::JsonlConversationLogger;
pub use mistral::{MistralClient, MistralError, MistralSettings};
