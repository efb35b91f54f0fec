//! Retrieval-augmented answering for a single phrasing

use crate::ports::generator::{GenerationError, Generator};
use crate::ports::retriever::Retriever;
use crate::use_cases::ensemble_retriever::EnsembleRetriever;
use lorekeeper_domain::{Passage, PromptTemplate};
use std::sync::Arc;
use tracing::debug;

/// An answer together with the passages it was generated from
#[derive(Debug, Clone, PartialEq)]
pub struct AnsweredQuery {
    pub answer: String,
    pub sources: Vec<Passage>,
}

/// Retrieve evidence for one query and generate an answer from it
pub struct AnswerWithContext<G: Generator + 'static, D: Retriever, S: Retriever> {
    generator: Arc<G>,
    retriever: EnsembleRetriever<D, S>,
}

impl<G: Generator + 'static, D: Retriever, S: Retriever> AnswerWithContext<G, D, S> {
    pub fn new(generator: Arc<G>, retriever: EnsembleRetriever<D, S>) -> Self {
        Self {
            generator,
            retriever,
        }
    }

    /// Answer `query` from the passages retrieved for `query` itself.
    ///
    /// A blank reply is kept as an empty answer; only a failed call is an error.
    pub async fn answer(&self, query: &str) -> Result<AnsweredQuery, GenerationError> {
        let context = self.retriever.retrieve(query).await;
        if !context.has_evidence() {
            debug!("No evidence found for query, sending empty-context marker");
        }

        let prompt = PromptTemplate::answer_prompt(query, &context);
        let answer = self
            .generator
            .generate_with_system(PromptTemplate::answer_system(), &prompt)
            .await?;

        Ok(AnsweredQuery {
            answer: answer.trim().to_string(),
            sources: context.into_passages(),
        })
    }
}
