//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::config::ReplConfig;
use crate::progress::reporter::progress_notifier;
use colored::Colorize;
use lorekeeper_application::{GetResponsesUseCase, Generator, Retriever};
use lorekeeper_domain::{AttemptCount, OutputFormat, Question, SessionContext};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Words that end the session without a leading slash
const EXIT_WORDS: [&str; 2] = ["выход", "exit"];

/// A parsed REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    Attempts(AttemptCount),
    Sources(bool),
    AllAnswers(bool),
    Settings,
    /// A recognised command with a bad argument, carrying the usage hint
    Invalid(String),
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line as a command; `None` means it is a question
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let lowered = line.to_lowercase();
        if EXIT_WORDS.contains(&lowered.as_str()) {
            return Some(ReplCommand::Quit);
        }
        if !line.starts_with('/') {
            return None;
        }

        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        let command = match name {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/settings" => ReplCommand::Settings,
            "/attempts" => match arg.and_then(|a| a.parse::<usize>().ok()) {
                Some(n) => match AttemptCount::new(n) {
                    Ok(count) => ReplCommand::Attempts(count),
                    Err(e) => ReplCommand::Invalid(e.to_string()),
                },
                None => ReplCommand::Invalid(format!(
                    "usage: /attempts N (N from {} to {})",
                    AttemptCount::MIN,
                    AttemptCount::MAX
                )),
            },
            "/sources" => match arg.and_then(parse_switch) {
                Some(on) => ReplCommand::Sources(on),
                None => ReplCommand::Invalid("usage: /sources on|off".to_string()),
            },
            "/all" => match arg.and_then(parse_switch) {
                Some(on) => ReplCommand::AllAnswers(on),
                None => ReplCommand::Invalid("usage: /all on|off".to_string()),
            },
            other => ReplCommand::Unknown(other.to_string()),
        };
        Some(command)
    }
}

fn parse_switch(arg: &str) -> Option<bool> {
    match arg.to_lowercase().as_str() {
        "on" | "вкл" | "true" | "1" => Some(true),
        "off" | "выкл" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Interactive chat REPL
pub struct ChatRepl<G: Generator + 'static, D: Retriever, S: Retriever> {
    use_case: Arc<GetResponsesUseCase<G, D, S>>,
    session: SessionContext,
    config: ReplConfig,
}

impl<G: Generator + 'static, D: Retriever, S: Retriever> ChatRepl<G, D, S> {
    /// Create a new ChatRepl
    pub fn new(use_case: Arc<GetResponsesUseCase<G, D, S>>, session: SessionContext) -> Self {
        Self {
            use_case,
            session,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    fn history_path(&self) -> Option<PathBuf> {
        match &self.config.history_file {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|p| p.join("lorekeeper").join("history.txt")),
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("До встречи!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           Lorekeeper - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Ask anything about the books. Type 'выход' to leave.");
        self.print_settings();
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /attempts N       - Phrasings tried per question (1-6)");
        println!("  /sources on|off   - Show source passages");
        println!("  /all on|off       - Show every candidate answer");
        println!("  /settings         - Show current settings");
        println!("  /help, /h, /?     - Show this help");
        println!("  выход, exit, /quit - Exit chat");
        println!();
    }

    fn print_settings(&self) {
        let on_off = |b: bool| if b { "on" } else { "off" };
        println!();
        println!(
            "{} attempts={} sources={} all={}",
            "Settings:".cyan().bold(),
            self.session.num_attempts.get(),
            on_off(self.session.show_sources),
            on_off(self.session.show_all_answers)
        );
    }

    /// Apply a command to the session. Returns true if should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("До встречи!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Settings => self.print_settings(),
            ReplCommand::Attempts(count) => {
                self.session.num_attempts = count;
                println!("Attempts set to {}", count.get());
            }
            ReplCommand::Sources(on) => {
                self.session.show_sources = on;
                println!("Sources {}", if on { "on" } else { "off" });
            }
            ReplCommand::AllAnswers(on) => {
                self.session.show_all_answers = on;
                println!("All answers {}", if on { "on" } else { "off" });
            }
            ReplCommand::Invalid(hint) => println!("{}", hint.yellow()),
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn process_question(&self, line: &str) {
        let Ok(question) = Question::new(line) else {
            return;
        };
        println!();

        let progress = progress_notifier(self.config.show_progress, self.config.fancy_progress);

        match self
            .use_case
            .ask(&question, &self.session, progress.as_ref())
            .await
        {
            Ok(outcome) => {
                let output =
                    ConsoleFormatter::format(&outcome, &self.session, OutputFormat::Answer);
                println!("{}", output);
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_words() {
        assert_eq!(ReplCommand::parse("выход"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("Выход"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("EXIT"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/quit"), Some(ReplCommand::Quit));
    }

    #[test]
    fn test_questions_are_not_commands() {
        assert_eq!(ReplCommand::parse("Кто такой Рейстлин?"), None);
        assert_eq!(ReplCommand::parse("exit from the tower?"), None);
    }

    #[test]
    fn test_attempts_command() {
        assert_eq!(
            ReplCommand::parse("/attempts 3"),
            Some(ReplCommand::Attempts(AttemptCount::new(3).unwrap()))
        );
        assert!(matches!(
            ReplCommand::parse("/attempts 9"),
            Some(ReplCommand::Invalid(_))
        ));
        assert!(matches!(
            ReplCommand::parse("/attempts"),
            Some(ReplCommand::Invalid(_))
        ));
    }

    #[test]
    fn test_switch_commands() {
        assert_eq!(ReplCommand::parse("/sources on"), Some(ReplCommand::Sources(true)));
        assert_eq!(ReplCommand::parse("/all OFF"), Some(ReplCommand::AllAnswers(false)));
        assert!(matches!(
            ReplCommand::parse("/sources maybe"),
            Some(ReplCommand::Invalid(_))
        ));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ReplCommand::parse("/models"),
            Some(ReplCommand::Unknown("/models".into()))
        );
    }
}
