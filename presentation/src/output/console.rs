//! Console output formatter for question-answering turns

use colored::Colorize;
use lorekeeper_application::TurnOutcome;
use lorekeeper_domain::core::string::preview;
use lorekeeper_domain::{CandidateResponse, OutputFormat, Passage, SessionContext};
use serde::Serialize;

/// Formats turn results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a turn in the requested format, honoring the session's
    /// source and all-answers settings
    pub fn format(outcome: &TurnOutcome, session: &SessionContext, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::format_json(outcome),
            OutputFormat::Full => Self::format_full(outcome, session),
            OutputFormat::Answer if session.show_all_answers => {
                Self::format_full(outcome, session)
            }
            OutputFormat::Answer => Self::format_answer(outcome, session),
        }
    }

    /// The chosen answer, followed by its sources when enabled
    pub fn format_answer(outcome: &TurnOutcome, session: &SessionContext) -> String {
        let best = outcome.best();
        let mut output = String::new();

        output.push_str(&best.answer);
        output.push('\n');

        if session.show_sources {
            output.push_str(&Self::format_sources(&best.sources, session.source_preview_len));
        }

        output
    }

    /// Every candidate in phrasing order, the chosen one marked
    pub fn format_full(outcome: &TurnOutcome, session: &SessionContext) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Lorekeeper"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            outcome.responses.original_query
        ));

        output.push_str(&Self::section_header(&format!(
            "Candidates ({})",
            outcome.responses.len()
        )));
        for (i, candidate) in outcome.responses.iter().enumerate() {
            output.push_str(&Self::format_candidate(
                i,
                candidate,
                i == outcome.best_index,
            ));
            if session.show_sources {
                output.push_str(&Self::format_sources(
                    &candidate.sources,
                    session.source_preview_len,
                ));
            }
        }

        output.push_str(&Self::section_header("Answer"));
        output.push('\n');
        output.push_str(&outcome.best().answer);
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    fn format_candidate(index: usize, candidate: &CandidateResponse, chosen: bool) -> String {
        let title = format!(
            "── #{} [{:.2}] {} ──",
            index + 1,
            candidate.confidence,
            candidate.query
        );
        let title = if chosen {
            format!("{} {}", title.green().bold(), "(chosen)".green())
        } else {
            title.yellow().bold().to_string()
        };
        format!("\n{}\n{}\n", title, candidate.answer)
    }

    /// Numbered source previews, truncated to `max_chars` characters
    pub fn format_sources(sources: &[Passage], max_chars: usize) -> String {
        if sources.is_empty() {
            return format!("{}\n", "No sources found.".dimmed());
        }

        let mut output = format!("\n{}\n", "Sources:".cyan().bold());
        for (i, passage) in sources.iter().enumerate() {
            let text = passage.content.trim();
            let shown = preview(text, max_chars);
            let ellipsis = if shown.len() < text.len() { "..." } else { "" };
            output.push_str(&format!("  {}. {}{}\n", i + 1, shown, ellipsis));
        }
        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &TurnOutcome) -> String {
        #[derive(Serialize)]
        struct JsonTurn<'a> {
            question: &'a str,
            answer: &'a str,
            sources: &'a [Passage],
            best_index: usize,
            candidates: &'a [CandidateResponse],
        }

        let best = outcome.best();
        let turn = JsonTurn {
            question: &outcome.responses.original_query,
            answer: &best.answer,
            sources: &best.sources,
            best_index: outcome.best_index,
            candidates: &outcome.responses.candidates,
        };
        serde_json::to_string_pretty(&turn).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorekeeper_domain::ResponseSet;

    fn outcome() -> TurnOutcome {
        let mut responses = ResponseSet::new("Кто такой Танис?");
        responses.push(CandidateResponse::new(
            "Кто такой Танис?",
            "Не знаю.",
            vec![],
            0.02,
        ));
        responses.push(CandidateResponse::new(
            "Кем был Танис?",
            "Танис Полуэльф, предводитель отряда.",
            vec![Passage::new(4, "Танис Полуэльф вёл отряд через лес Квалинести.")],
            1.4,
        ));
        TurnOutcome {
            responses,
            best_index: 1,
        }
    }

    #[test]
    fn test_answer_only() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format(
            &outcome(),
            &SessionContext::default(),
            OutputFormat::Answer,
        );
        assert_eq!(out, "Танис Полуэльф, предводитель отряда.\n");
    }

    #[test]
    fn test_answer_with_truncated_sources() {
        colored::control::set_override(false);
        let session = SessionContext::default()
            .with_sources(true)
            .with_source_preview_len(14);
        let out = ConsoleFormatter::format_answer(&outcome(), &session);
        assert!(out.contains("Sources:"));
        assert!(out.contains("  1. Танис Полуэльф..."));
    }

    #[test]
    fn test_all_answers_lists_candidates() {
        colored::control::set_override(false);
        let session = SessionContext::default().with_all_answers(true);
        let out = ConsoleFormatter::format(&outcome(), &session, OutputFormat::Answer);
        assert!(out.contains("#1 [0.02] Кто такой Танис?"));
        assert!(out.contains("#2 [1.40] Кем был Танис? ── (chosen)"));
        assert!(out.contains("Не знаю."));
    }

    #[test]
    fn test_json_output() {
        let out = ConsoleFormatter::format_json(&outcome());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["best_index"], 1);
        assert_eq!(value["answer"], "Танис Полуэльф, предводитель отряда.");
        assert_eq!(value["sources"][0]["position"], 4);
        assert_eq!(value["candidates"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_no_sources_message() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::format_sources(&[], 100),
            "No sources found.\n"
        );
    }
}
