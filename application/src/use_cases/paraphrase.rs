//! Query paraphrasing use case
//!
//! Produces the phrasing list for one turn: the original question followed
//! by up to `attempts - 1` rewordings from a single generation call.

use crate::ports::generator::Generator;
use lorekeeper_domain::{AttemptCount, PromptTemplate, paraphrase_set, parse_paraphrases};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Asks the generator for alternate phrasings of a question
pub struct QueryParaphraser<G: Generator + 'static> {
    generator: Arc<G>,
    pacing_delay: Duration,
}

impl<G: Generator + 'static> QueryParaphraser<G> {
    pub fn new(generator: Arc<G>, pacing_delay: Duration) -> Self {
        Self {
            generator,
            pacing_delay,
        }
    }

    /// Return `[original, paraphrase_1, ...]`, never failing.
    ///
    /// With a single attempt no generation call is made. A failed or short
    /// generation yields fewer entries, always with the original first.
    pub async fn paraphrase(&self, query: &str, attempts: AttemptCount) -> Vec<String> {
        let wanted = attempts.paraphrases_needed();
        if wanted == 0 {
            return vec![query.to_string()];
        }

        let prompt = PromptTemplate::paraphrase_prompt(query, attempts.get());
        let paraphrases = match self.generator.generate(&prompt).await {
            Ok(raw) => {
                let parsed = parse_paraphrases(&raw, wanted);
                if parsed.len() < wanted {
                    debug!(
                        "Model produced {} of {} requested paraphrases",
                        parsed.len(),
                        wanted
                    );
                }
                parsed
            }
            Err(e) => {
                warn!("Paraphrase generation failed, using original only: {}", e);
                Vec::new()
            }
        };

        if !self.pacing_delay.is_zero() {
            tokio::time::sleep(self.pacing_delay).await;
        }

        paraphrase_set(query, paraphrases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::generator::GenerationError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedGenerator {
        reply: Result<String, GenerationError>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(reply: Result<String, GenerationError>) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Generator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }
    }

    fn attempts(n: usize) -> AttemptCount {
        AttemptCount::new(n).unwrap()
    }

    #[tokio::test]
    async fn test_single_attempt_skips_generation() {
        let generator = Arc::new(ScriptedGenerator::new(Ok("unused".into())));
        let paraphraser = QueryParaphraser::new(generator.clone(), Duration::ZERO);

        let set = paraphraser.paraphrase("Кто такой Рейстлин?", attempts(1)).await;

        assert_eq!(set, vec!["Кто такой Рейстлин?".to_string()]);
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_original_first_and_truncated() {
        let generator = Arc::new(ScriptedGenerator::new(Ok(
            "1. Первый\n\n2) Второй\n- Третий\n* Четвёртый".into(),
        )));
        let paraphraser = QueryParaphraser::new(generator.clone(), Duration::ZERO);

        let set = paraphraser.paraphrase("Исходный", attempts(3)).await;

        assert_eq!(set, vec!["Исходный", "Первый", "Второй"]);
        assert_eq!(generator.calls(), 1);
        assert!(generator.prompts.lock().unwrap()[0].contains("Исходный"));
    }

    #[tokio::test]
    async fn test_short_reply_yields_fewer() {
        let generator = Arc::new(ScriptedGenerator::new(Ok("Только один\n   \n".into())));
        let paraphraser = QueryParaphraser::new(generator, Duration::ZERO);

        let set = paraphraser.paraphrase("q", attempts(5)).await;
        assert_eq!(set, vec!["q", "Только один"]);
    }

    #[tokio::test]
    async fn test_failure_degrades_to_original() {
        let generator = Arc::new(ScriptedGenerator::new(Err(GenerationError::Timeout)));
        let paraphraser = QueryParaphraser::new(generator.clone(), Duration::ZERO);

        let set = paraphraser.paraphrase("q", attempts(4)).await;
        assert_eq!(set, vec!["q"]);
        assert_eq!(generator.calls(), 1);
    }
}
