//! Homework Bot main entry point
//!
//! This is the command-line interface for the homework review notifier.

use clap::Parser;
use homework_bot::config::{load_config_with_hash, Config, Credentials};
use homework_bot::logging::open_log_file;
use homework_bot::{Bot, BotState};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Homework Bot: review status notifications in Telegram
///
/// Polls the homework review API and forwards every change of the latest
/// submission's review status to a Telegram chat. Secrets are read from
/// PRACTICUM_TOKEN, TELEGRAM_TOKEN and TELEGRAM_CHAT_ID.
#[derive(Parser, Debug)]
#[command(name = "homework-bot")]
#[command(version)]
#[command(about = "Homework review status notifier", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate configuration and credentials, then exit
    #[arg(long, conflicts_with = "once")]
    check: bool,

    /// Run a single poll cycle and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The log file location lives in the config, so it is read before logging starts.
    let (config, config_hash) = match &cli.config {
        Some(path) => {
            let (config, hash) = load_config_with_hash(path)?;
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    let _guard = setup_logging(cli.verbose, cli.quiet, Path::new(&config.logging.file))?;

    match (&cli.config, config_hash) {
        (Some(path), Some(hash)) => tracing::info!(
            "Configuration loaded from {} (hash: {})",
            path.display(),
            hash
        ),
        _ => tracing::info!("No configuration file given, using defaults"),
    }

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!(state = %BotState::Fatal, "CRITICAL: {}", e);
            return Err(e.into());
        }
    };

    if cli.check {
        handle_check(&config, &credentials);
        return Ok(());
    }

    let mut bot = Bot::from_config(&config, &credentials)?;

    if cli.once {
        let outcome = bot.run_cycle().await;
        tracing::info!("Single cycle finished: {:?}", outcome);
        return Ok(());
    }

    bot.run().await;
    Ok(())
}

/// Sets up stdout and log-file output based on verbosity level
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
fn setup_logging(
    verbose: u8,
    quiet: bool,
    log_file: &Path,
) -> Result<WorkerGuard, homework_bot::ConfigError> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("homework_bot=info,warn"),
            1 => EnvFilter::new("homework_bot=debug,info"),
            2 => EnvFilter::new("homework_bot=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let appender = open_log_file(log_file)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_line_number(true),
        )
        .init();

    Ok(guard)
}

/// Handles the --check mode: shows the effective settings
fn handle_check(config: &Config, credentials: &Credentials) {
    println!("=== Homework Bot Check ===\n");

    println!("Review API:");
    println!("  Endpoint: {}", config.api.endpoint);

    println!("\nTelegram:");
    println!("  API URL: {}", config.telegram.api_url);
    println!("  Chat ID: {}", credentials.chat_id);

    println!("\nPolling:");
    println!("  Retry time: {}s", config.poll.retry_time);

    println!("\nLogging:");
    println!("  File: {}", config.logging.file);

    println!("\n✓ Configuration is valid");
    println!("✓ All credentials are present");
}
