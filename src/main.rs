// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::Path;

use trivox::app_config::{Config, LogLevel};
use trivox::app_controller::Controller;
use trivox::server;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive translation loop (default command)
    Interactive,

    /// Serve the pipeline over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },

    /// Generate shell completions for trivox
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// trivox - three-voice translation assistant
///
/// Splits Portuguese text into sentences, proposes three English renderings
/// per sentence, and refines any pick into three fresh variations.
#[derive(Parser, Debug)]
#[command(name = "trivox")]
#[command(version)]
#[command(about = "AI translation suggestions with interactive refinement")]
#[command(long_about = "trivox routes text through a Groq-hosted language model to produce \
translation and style-refinement suggestions.

EXAMPLES:
    trivox                        # Interactive loop with the default config
    trivox serve --port 8000      # Expose POST /translate and POST /refine
    trivox --log-level debug      # Interactive loop with debug logging
    trivox completions bash       # Generate bash completions

CONFIGURATION:
    Settings are read from conf.json when present; every field has a default.
    The model credential comes only from the GROQ_API_KEY environment
    variable and is required.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger; later level changes go through set_max_level
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "trivox", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load(Path::new(&cli.config_path))
        .context("Failed to load configuration")?;

    if let Some(cmd_log_level) = &cli.log_level {
        config.log_level = cmd_log_level.clone().into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    config.validate().context("Configuration validation failed")?;

    match cli.command {
        Some(Commands::Serve { host, port }) => server::serve(&config, &host, port).await,
        // Interactive is the default; completions returned above
        _ => {
            let controller = Controller::with_config(&config)?;
            controller.run().await
        }
    }
}
