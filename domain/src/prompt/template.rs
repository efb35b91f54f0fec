//! Prompt templates for paraphrasing and answering

use crate::core::passage::Passage;
use crate::retrieval::context::RetrievedContext;

/// Marker sent in place of context when retrieval found nothing
pub const NO_EVIDENCE_MARKER: &str =
    "[НЕТ ДАННЫХ: в базе знаний не найдено подходящих фрагментов]";

/// Separator between passages in the answering prompt
const PASSAGE_SEPARATOR: &str = "\n\n";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the answering call
    pub fn answer_system() -> &'static str {
        r#"Ты эксперт по вымышленной вселенной и отвечаешь на вопросы читателей.
Отвечай только на основе предоставленного контекста.
Если в контексте нет ответа, прямо скажи, что не знаешь, и не выдумывай."#
    }

    /// Ask for `count` meaning-preserving rewordings, one per line
    pub fn paraphrase_prompt(query: &str, count: usize) -> String {
        format!(
            "Перефразируй следующий вопрос {} разными способами, сохраняя смысл. \
             Напиши только перефразированные версии, каждую с новой строки: {}",
            count, query
        )
    }

    /// "Stuff" all retrieved passages into one answering prompt
    pub fn answer_prompt(query: &str, context: &RetrievedContext) -> String {
        let context_block = match context {
            RetrievedContext::Evidence(passages) => Self::join_passages(passages),
            RetrievedContext::NoEvidence => NO_EVIDENCE_MARKER.to_string(),
        };

        format!(
            r#"Используй следующие фрагменты контекста, чтобы ответить на вопрос в конце.
Если ты не знаешь ответа, просто скажи, что не знаешь, не пытайся придумать ответ.

{}

Вопрос: {}
Полезный ответ:"#,
            context_block, query
        )
    }

    fn join_passages(passages: &[Passage]) -> String {
        passages
            .iter()
            .map(|p| p.content.as_str())
            .collect::<Vec<_>>()
            .join(PASSAGE_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paraphrase_prompt_mentions_count_and_query() {
        let prompt = PromptTemplate::paraphrase_prompt("Кто такая Серсея?", 3);
        assert!(prompt.contains("3 разными способами"));
        assert!(prompt.ends_with("Кто такая Серсея?"));
    }

    #[test]
    fn test_answer_prompt_with_evidence() {
        let ctx = RetrievedContext::from_passages(vec![
            Passage::new(0, "Серсея Ланнистер — королева."),
            Passage::new(5, "Её брат — Джейме."),
        ]);
        let prompt = PromptTemplate::answer_prompt("Кто такая Серсея?", &ctx);

        assert!(prompt.contains("Серсея Ланнистер — королева.\n\nЕё брат — Джейме."));
        assert!(prompt.contains("Вопрос: Кто такая Серсея?"));
        assert!(!prompt.contains(NO_EVIDENCE_MARKER));
    }

    #[test]
    fn test_answer_prompt_without_evidence_uses_marker() {
        let prompt =
            PromptTemplate::answer_prompt("Кто такая Серсея?", &RetrievedContext::NoEvidence);
        assert!(prompt.contains(NO_EVIDENCE_MARKER));
    }
}
