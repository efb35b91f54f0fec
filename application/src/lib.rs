//! Application layer for lorekeeper
//!
//! This crate contains use cases, port definitions, and pipeline parameters.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PipelineParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    embedder::{Embedder, EmbeddingError},
    generator::{GenerationError, Generator},
    progress::{NoProgress, ProgressNotifier},
    retriever::{RetrievalError, Retriever},
};
pub use use_cases::answer_with_context::{AnswerWithContext, AnsweredQuery};
pub use use_cases::ensemble_retriever::EnsembleRetriever;
pub use use_cases::get_responses::{GetResponsesError, GetResponsesUseCase, TurnOutcome};
pub use use_cases::paraphrase::QueryParaphraser;
