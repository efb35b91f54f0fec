//! CLI entrypoint for Lorekeeper
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use lorekeeper_application::{ConversationLogger, GetResponsesUseCase};
use lorekeeper_domain::{OutputFormat, Question, SessionContext};
use lorekeeper_infrastructure::{
    ConfigLoader, DenseRetriever, FileConfig, JsonlConversationLogger, KnowledgeBase,
    MistralClient, MistralSettings,
};
use lorekeeper_presentation::{ChatRepl, Cli, ConsoleFormatter, ReplConfig, progress_notifier};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    check_config(&config)?;

    if !config.dialogue.color {
        colored::control::set_override(false);
    }

    info!("Starting Lorekeeper");

    // === Dependency Injection ===
    let settings = MistralSettings::from_config(&config.provider)?;
    let client = Arc::new(MistralClient::new(settings)?);

    let knowledge = KnowledgeBase::open(
        &config.corpus,
        &config.provider.embed_model,
        client.as_ref(),
        cli.rebuild_index,
    )
    .await?;

    let params = config.pipeline_params();
    let dense = Arc::new(DenseRetriever::new(
        knowledge.dense,
        client.clone(),
        params.dense_fetch_k,
    ));

    let mut use_case = GetResponsesUseCase::new(client, dense, knowledge.sparse, params)
        .with_scorer(config.scorer());
    if let Some(logger) = transcript_logger(&config) {
        use_case = use_case.with_conversation_logger(logger);
    }

    let session = session_from(&config, &cli);
    let show_progress = config.dialogue.show_progress && !cli.quiet;

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig::default()
            .with_progress(show_progress)
            .with_fancy_progress(config.dialogue.fancy_progress)
            .with_history_file(config.dialogue.history_file.clone());
        let mut repl = ChatRepl::new(Arc::new(use_case), session).with_config(repl_config);
        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question.as_deref() {
        Some(q) => Question::new(q)?,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.dialogue.format)
        .unwrap_or_default();

    let progress = progress_notifier(
        show_progress && format != OutputFormat::Json,
        config.dialogue.fancy_progress,
    );

    let outcome = use_case.ask(&question, &session, progress.as_ref()).await?;
    println!("{}", ConsoleFormatter::format(&outcome, &session, format));

    Ok(())
}

/// Print every issue; stop on errors
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue);
    }

    let errors: Vec<String> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.to_string())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

fn transcript_logger(config: &FileConfig) -> Option<Arc<dyn ConversationLogger>> {
    if !config.logging.transcript {
        return None;
    }
    let path = match &config.logging.transcript_path {
        Some(path) => PathBuf::from(path),
        None => JsonlConversationLogger::default_path()?,
    };
    let logger = JsonlConversationLogger::open(path)?;
    info!("Writing transcript to {}", logger.path().display());
    Some(Arc::new(logger))
}

/// Session defaults from `[dialogue]`, overridden by command-line flags
fn session_from(config: &FileConfig, cli: &Cli) -> SessionContext {
    let mut session = config.dialogue.session_context();
    if let Some(attempts) = cli.attempt_count() {
        session = session.with_attempts(attempts);
    }
    if cli.sources {
        session = session.with_sources(true);
    }
    if let Some(len) = cli.source_len {
        session = session.with_source_preview_len(len);
    }
    if cli.all_answers {
        session = session.with_all_answers(true);
    }
    session
}
