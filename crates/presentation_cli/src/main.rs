//! Linguadrill CLI
//!
//! Interactive bilingual sentence drills: show a sentence in the source
//! language, let the learner translate it aloud, then reveal the target
//! sentence and speak it.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use application::ports::LessonStorePort;
use application::services::{DrillOutcome, DrillService};
use clap::Parser;
use domain::RunConfig;
use infrastructure::{AppConfig, ConsoleAdapter, PlaybackAdapter, SpeechAdapter, TomlLessonStore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Linguadrill CLI
#[derive(Parser)]
#[command(name = "linguadrill")]
#[command(author, version, about = "Interactive bilingual sentence drills", long_about = None)]
struct Cli {
    /// Language the drill shows for translation practice
    #[arg(long = "source_lang", default_value = "de-DE")]
    source_lang: String,

    /// Language the drill reveals and speaks
    #[arg(long = "target_lang", default_value = "it-IT")]
    target_lang: String,

    /// Lesson file, one TOML table per sentence pair
    #[arg(long = "toml_file", default_value = "data/conjugation.toml")]
    toml_file: String,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("Hello from linguadrill!");

    if let Err(e) = run(cli).await {
        println!("❌ {e}");
        std::process::exit(1);
    }

    Ok(())
}

/// Validate the run parameters, wire the adapters, and drill the lesson
async fn run(cli: Cli) -> anyhow::Result<()> {
    let run_config = RunConfig::new(&cli.source_lang, &cli.target_lang, &cli.toml_file)?;

    let app_config = AppConfig::load()?;

    let console = Arc::new(ConsoleAdapter::new());
    let speech = Arc::new(SpeechAdapter::new(app_config.speech.clone())?);
    let playback = Arc::new(PlaybackAdapter::new(app_config.playback.clone())?);
    let store = TomlLessonStore::new();

    let lesson = store
        .load(
            Some(run_config.lesson_file().to_string()),
            run_config.source_language().clone(),
            run_config.target_language().clone(),
        )
        .await?;

    info!(
        pairs = lesson.len(),
        source = %lesson.source_language(),
        target = %lesson.target_language(),
        "Starting drill"
    );

    let service = DrillService::with_config(
        console,
        speech,
        playback,
        app_config.pacing.drill_config(),
    );

    match service.run(&lesson).await? {
        DrillOutcome::Completed { pairs_drilled } => {
            info!(pairs_drilled, "Lesson completed");
        },
        DrillOutcome::ExitRequested { pairs_drilled } => {
            info!(pairs_drilled, "Lesson ended by the learner");
        },
        DrillOutcome::InputClosed { pairs_drilled } => {
            info!(pairs_drilled, "Lesson ended at end of input");
        },
    }

    Ok(())
}
