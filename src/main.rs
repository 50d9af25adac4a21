// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info};
use std::io::Write;
use std::path::PathBuf;

use crate::database::connection::DEFAULT_DB_FILENAME;
use crate::database::{DatabaseConnection, Repository};

mod database;
mod errors;
mod seed;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for camlex
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// camlex - Cameroon Languages Dictionary Builder
///
/// Builds a SQLite dictionary database mapping French words and phrases to
/// six Cameroonian languages, then runs two demonstration queries.
#[derive(Parser, Debug)]
#[command(name = "camlex")]
#[command(version = "1.0.0")]
#[command(about = "French-to-Cameroonian-languages dictionary database builder")]
#[command(long_about = "camlex creates the dictionary schema, loads the embedded seed data
(6 languages, 24 categories and the full curated translation set) and prints
two demonstration query results.

EXAMPLES:
    camlex                                  # Build cameroon_languages.db in the working directory
    camlex -d /tmp/dictionary.db            # Build at a specific path
    camlex --skip-demo                      # Load data without running the demo queries
    camlex --log-level debug                # Verbose progress on stderr
    camlex completions bash > camlex.bash   # Generate bash completions")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Database file to create or update
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DB_FILENAME)]
    database: PathBuf,

    /// Load the data without running the demonstration queries
    #[arg(long)]
    skip_demo: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Stderr logger with timestamps and level colors
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[0;37m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    let options = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &options.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "camlex", &mut std::io::stdout());
        return Ok(());
    }

    let level = options
        .log_level
        .clone()
        .map_or(LevelFilter::Info, LevelFilter::from);
    CustomLogger::init(level).map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))?;

    run(&options)
}

/// Create the schema, load the seed data and run the demonstration queries
fn run(options: &CommandLineOptions) -> Result<()> {
    let db = DatabaseConnection::new(&options.database)?;
    let repository = Repository::new(db);

    let summary = repository.seed_all()?;
    debug!("Seed summary: {:?}", summary);

    println!("✅ Cameroon Languages Database created successfully!");
    println!("📊 Database file: {}", repository.connection().path().display());

    if !options.skip_demo {
        run_demo_queries(&repository)?;
    }

    info!("{}", repository.connection().stats()?);
    Ok(())
}

/// Print the two example query results
fn run_demo_queries(repository: &Repository) -> Result<()> {
    println!("\n📋 Example Queries:");

    println!("\n1. Ewondo Greetings:");
    for greeting in repository.ewondo_greetings()? {
        println!(
            "  {} -> {} ({})",
            greeting.french_text,
            greeting.translation,
            greeting.pronunciation.as_deref().unwrap_or("-")
        );
    }

    println!("\n2. Word Count per Language:");
    for count in repository.word_counts_per_language()? {
        println!("  {}: {} words", count.language_name, count.word_count);
    }

    Ok(())
}
