//! Get Responses use case
//!
//! Runs one question-answering turn: paraphrase the question, answer every
//! phrasing from its own retrieved evidence, score each answer, and pick
//! the most confident one.

use crate::config::PipelineParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::generator::Generator;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::retriever::Retriever;
use crate::use_cases::answer_with_context::AnswerWithContext;
use crate::use_cases::ensemble_retriever::EnsembleRetriever;
use crate::use_cases::paraphrase::QueryParaphraser;
use lorekeeper_domain::{
    AttemptCount, BestAnswer, CandidateResponse, ConfidenceScorer, DomainError, Question,
    ResponseSet, SessionContext,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can end a turn
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GetResponsesError {
    #[error("No answer could be generated for any of {attempts} phrasings")]
    NoAnswerAvailable { attempts: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The full result of one turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub responses: ResponseSet,
    pub best_index: usize,
}

impl TurnOutcome {
    pub fn best(&self) -> &CandidateResponse {
        &self.responses.candidates[self.best_index]
    }
}

/// Use case for answering a question through the paraphrase ensemble
pub struct GetResponsesUseCase<G: Generator + 'static, D: Retriever, S: Retriever> {
    paraphraser: QueryParaphraser<G>,
    answerer: AnswerWithContext<G, D, S>,
    scorer: ConfidenceScorer,
    pacing_delay: Duration,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: Generator + 'static, D: Retriever, S: Retriever> GetResponsesUseCase<G, D, S> {
    pub fn new(generator: Arc<G>, dense: Arc<D>, sparse: Arc<S>, params: PipelineParams) -> Self {
        let retriever = EnsembleRetriever::new(dense, sparse, &params);
        Self {
            paraphraser: QueryParaphraser::new(Arc::clone(&generator), params.pacing_delay),
            answerer: AnswerWithContext::new(generator, retriever),
            scorer: ConfidenceScorer::default(),
            pacing_delay: params.pacing_delay,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_scorer(mut self, scorer: ConfidenceScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Produce scored candidates for every phrasing of `question`
    pub async fn execute(
        &self,
        question: &Question,
        attempts: AttemptCount,
    ) -> Result<ResponseSet, GetResponsesError> {
        self.execute_with_progress(question, attempts, &NoProgress)
            .await
    }

    /// Produce scored candidates with progress callbacks
    pub async fn execute_with_progress(
        &self,
        question: &Question,
        attempts: AttemptCount,
        progress: &dyn ProgressNotifier,
    ) -> Result<ResponseSet, GetResponsesError> {
        let original = question.content();
        info!("Answering with {} attempt(s)", attempts.get());

        if attempts.paraphrases_needed() > 0 {
            progress.on_paraphrasing_start();
        }
        let queries = self.paraphraser.paraphrase(original, attempts).await;
        progress.on_paraphrases_ready(&queries);

        let mut responses = ResponseSet::new(original);
        let total = queries.len();

        for (index, query) in queries.iter().enumerate() {
            if index > 0 && !self.pacing_delay.is_zero() {
                tokio::time::sleep(self.pacing_delay).await;
            }

            progress.on_attempt_start(index, total, query);
            match self.answerer.answer(query).await {
                Ok(answered) => {
                    let confidence = self.scorer.score(&answered.answer, &answered.sources);
                    debug!(
                        "Attempt {}/{} scored {:.3} with {} sources",
                        index + 1,
                        total,
                        confidence,
                        answered.sources.len()
                    );
                    progress.on_attempt_complete(index, Some(confidence));
                    responses.push(CandidateResponse::new(
                        query.as_str(),
                        answered.answer,
                        answered.sources,
                        confidence,
                    ));
                }
                Err(e) => {
                    warn!("Attempt {}/{} failed, dropping it: {}", index + 1, total, e);
                    progress.on_attempt_complete(index, None);
                }
            }
        }

        progress.on_turn_complete(responses.len(), total);

        if responses.is_empty() {
            self.conversation_logger.log(ConversationEvent::new(
                "turn_failed",
                serde_json::json!({
                    "query": original,
                    "attempts": total,
                }),
            ));
            return Err(GetResponsesError::NoAnswerAvailable { attempts: total });
        }

        let best_index = responses.best_index()?;
        self.log_turn(&responses, best_index);
        info!(
            "Collected {}/{} answers, best is #{}",
            responses.len(),
            total,
            best_index + 1
        );

        Ok(responses)
    }

    /// Project the most confident candidate
    pub fn select_best(responses: &ResponseSet) -> Result<BestAnswer, GetResponsesError> {
        Ok(BestAnswer::from(responses.best()?))
    }

    /// Run a turn with the settings of one dialogue session
    pub async fn ask(
        &self,
        question: &Question,
        session: &SessionContext,
        progress: &dyn ProgressNotifier,
    ) -> Result<TurnOutcome, GetResponsesError> {
        let responses = self
            .execute_with_progress(question, session.num_attempts, progress)
            .await?;
        let best_index = responses.best_index()?;
        Ok(TurnOutcome {
            responses,
            best_index,
        })
    }

    fn log_turn(&self, responses: &ResponseSet, best_index: usize) {
        let candidates: Vec<_> = responses
            .iter()
            .map(|c| {
                serde_json::json!({
                    "query": c.query,
                    "answer": c.answer,
                    "confidence": c.confidence,
                    "source_count": c.sources.len(),
                })
            })
            .collect();

        self.conversation_logger.log(ConversationEvent::new(
            "turn_completed",
            serde_json::json!({
                "query": responses.original_query,
                "candidates": candidates,
                "best_index": best_index,
            }),
        ));
    }
}
