// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{info, warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, ErrorPolicy};
use crate::errors::ValidationError;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod output_naming;
mod subtitle_cleaner;

/// CLI Wrapper for ErrorPolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliErrorPolicy {
    Skip,
    Abort,
}

impl From<CliErrorPolicy> for ErrorPolicy {
    fn from(cli_policy: CliErrorPolicy) -> Self {
        match cli_policy {
            CliErrorPolicy::Skip => ErrorPolicy::Skip,
            CliErrorPolicy::Abort => ErrorPolicy::Abort,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert subtitle files to plain text (default command)
    Convert(ConvertArgs),

    /// Generate shell completions for sub2text
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input subtitle file or directory to process
    #[arg(value_name = "SOURCE_PATH")]
    source_path: PathBuf,

    /// Destination directory for converted files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// What to do when one file in a batch fails to convert
    #[arg(short = 'e', long, value_enum)]
    on_error: Option<CliErrorPolicy>,
}

/// sub2text - Subtitle to plain text converter
///
/// Converts .srt and .vtt subtitle files to .txt by stripping timing codes
/// and markup tags, for a single file or for every subtitle in a directory.
#[derive(Parser, Debug)]
#[command(name = "sub2text")]
#[command(version = "1.0.0")]
#[command(about = "Subtitle to plain text converter")]
#[command(long_about = "sub2text strips timing codes and markup tags from subtitle files and writes the
remaining text as a single normalized paragraph.

EXAMPLES:
    sub2text episode.srt                        # Convert one file next to its source
    sub2text -o texts/ episode.vtt              # Convert one file into texts/
    sub2text /subtitles/                        # Convert every .srt/.vtt in a directory
    sub2text -e abort /subtitles/               # Stop the batch on the first failure
    sub2text --log-level debug /subtitles/      # Convert a directory with debug logging
    sub2text completions bash > sub2text.bash   # Generate bash completions

CONFIGURATION:
    Configuration is read from conf.json when the file exists; command line
    flags override it. Without a config file, built-in defaults apply: output
    next to each source file, .txt extension, skip-and-continue on per-file
    batch failures.

SUPPORTED FORMATS:
    srt - SubRip: numbered cues with --> time codes
    vtt - WebVTT: header token with bare time codes")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file or directory to process
    #[arg(value_name = "SOURCE_PATH")]
    source_path: Option<PathBuf>,

    /// Destination directory for converted files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// What to do when one file in a batch fails to convert
    #[arg(short = 'e', long, value_enum)]
    on_error: Option<CliErrorPolicy>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
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
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "sub2text", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => {
            // Use the explicit convert subcommand args
            run_convert(args)
        }
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let source_path = cli.source_path.ok_or(ValidationError::MissingInput)?;

            let convert_args = ConvertArgs {
                source_path,
                output_dir: cli.output_dir,
                config_path: cli.config_path,
                log_level: cli.log_level,
                on_error: cli.on_error,
            };
            run_convert(convert_args)
        }
    }
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load the configuration when a config file is present; built-in
    // defaults apply otherwise and nothing is written to disk
    let config_path = &options.config_path;
    let mut config: Config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        Config::default()
    };

    // Override config with CLI options if provided
    if let Some(output_dir) = &options.output_dir {
        config.output_dir = Some(output_dir.clone());
    }

    if let Some(on_error) = &options.on_error {
        config.on_error = on_error.clone().into();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    // Run the conversion for the file or directory source
    let summary = controller.run(&options.source_path)?;

    if summary.failed > 0 {
        warn!("{} file(s) failed to convert and were skipped", summary.failed);
    }

    info!("Conversion completed: {} file(s) converted in {:.2?}", summary.converted, summary.elapsed);

    Ok(())
}

// Map the config log level onto the log crate's filter
fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
