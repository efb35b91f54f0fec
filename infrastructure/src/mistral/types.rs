//! Wire types for the chat completions and embeddings endpoints

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
pub(super) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct EmbedRequest<'a> {
    pub model: &'a str,
    pub input: &'a [String],
}

#[derive(Debug, Deserialize)]
pub(super) struct EmbedResponse {
    pub data: Vec<EmbedData>,
}

#[derive(Debug, Deserialize)]
pub(super) struct EmbedData {
    #[serde(default)]
    pub index: Option<usize>,
    pub embedding: Vec<f32>,
}

impl EmbedResponse {
    /// Vectors in input order
    pub fn into_vectors(mut self) -> Vec<Vec<f32>> {
        if self.data.iter().all(|d| d.index.is_some()) {
            self.data.sort_by_key(|d| d.index);
        }
        self.data.into_iter().map(|d| d.embedding).collect()
    }
}
