//! Social Icons - terminal selector for social media icons
//!
//! Usage:
//!   social-icons [OPTIONS] [COMMAND]
//!
//! Examples:
//!   social-icons                      # Interactive selector
//!   social-icons tui --mode dark      # Start in dark mode
//!   social-icons check github         # One-shot lookup
//!   social-icons check x --format json

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use social_icons_core::{
    icons::icons, tui, AppConfig, DisplayMode, IconNotResolvable, IconRef, Outcome, Resolver,
    ResolutionAttempt,
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "social-icons")]
#[command(about = "Collect social media icons from the Simple Icons CDN", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to <config dir>/social-icons/config.toml)
    #[arg(long, env = "SOCIAL_ICONS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Write logs to this file instead of the default location
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive selector (default)
    Tui {
        /// Display mode to start in (overrides config)
        #[arg(long)]
        mode: Option<ModeArg>,
    },

    /// Check whether an icon exists for a single name
    Check {
        /// Platform name, used as typed
        name: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Display mode options
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
}

impl From<ModeArg> for DisplayMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Light => DisplayMode::Light,
            ModeArg::Dark => DisplayMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON shape of a `check` result
#[derive(Debug, Serialize)]
struct CheckReport {
    raw_input: String,
    normalized_key: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_ref: Option<IconRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transient: Option<bool>,
}

impl From<&ResolutionAttempt> for CheckReport {
    fn from(attempt: &ResolutionAttempt) -> Self {
        let (found, icon_ref, failure) = match &attempt.outcome {
            Outcome::Found(icon_ref) => (true, Some(icon_ref.clone()), None),
            Outcome::NotFound(cause) => (false, None, Some(cause.clone())),
        };

        Self {
            raw_input: attempt.raw_input.clone(),
            normalized_key: attempt.normalized_key.clone(),
            found,
            icon_ref,
            error: failure.as_ref().map(|cause| {
                IconNotResolvable::new(attempt.raw_input.clone(), cause.clone()).to_string()
            }),
            transient: failure.map(|cause| cause.is_transient()),
        }
    }
}

/// Default log file for the interactive selector
fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("social-icons")
        .join("social-icons.log")
}

/// Initialize tracing; the TUI owns the terminal, so it always logs to a file
fn init_tracing(log_level: LogLevel, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let level = Level::from(log_level);

    let filter = EnvFilter::new(format!(
        "social_icons={},social_icons_core={},reqwest=warn,hyper=warn",
        level.as_str().to_lowercase(),
        level.as_str().to_lowercase()
    ));

    let path = match (log_file, interactive) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, true) => Some(default_log_path()),
        (None, false) => None,
    };

    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr) // Logs to stderr, not stdout
                .init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui { mode: None });
    let interactive = matches!(command, Commands::Tui { .. });

    init_tracing(cli.log_level, cli.log_file.as_deref(), interactive)?;
    debug!("social-icons v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let resolver = Resolver::from_config(&config).context("Failed to set up icon resolver")?;

    match command {
        Commands::Tui { mode } => {
            let mode = mode.map(DisplayMode::from).unwrap_or(config.display.mode);
            tui::run(resolver, mode).await
        }
        Commands::Check { name, format } => {
            let attempt = resolver.resolve(&name).await;
            let report = CheckReport::from(&attempt);

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                OutputFormat::Text => match (&report.icon_ref, &report.error) {
                    (Some(icon_ref), _) => {
                        println!("{} {}  {}", icons().success, report.normalized_key, icon_ref)
                    }
                    (None, Some(error)) => println!("{} {}", icons().error, error),
                    (None, None) => {}
                },
            }

            if !report.found {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
