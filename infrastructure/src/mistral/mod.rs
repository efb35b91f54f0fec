//! Mistral API adapter
//!
//! One HTTP client serving both the [`Generator`](lorekeeper_application::Generator)
//! and [`Embedder`](lorekeeper_application::Embedder) ports.

mod client;
pub mod error;
mod types;

pub use client::{MistralClient, MistralSettings};
pub use error::MistralError;
