//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod conversation_logger;
pub mod embedder;
pub mod generator;
pub mod progress;
pub mod retriever;
