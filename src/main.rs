//! Huli - Main entrypoint.
//!
//! This is the main entry point for the Huli application. It initializes
//! the logging system, loads configuration, and runs the requested
//! command, most notably the interactive query loop over a corpus file.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use huli_lib::config::{self, ConfigLoader, HuliConfig};
use huli_lib::error::{set_error_reporter, HuliError, HuliResult, TracingErrorReporter};
use huli_lib::index::{Corpus, LineIndex};

/// Sentinel that ends the interactive query loop.
const QUIT_COMMAND: &str = "xx";

/// Command line arguments for Huli.
#[derive(Parser, Debug)]
#[clap(name = "Huli", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Index a corpus file and answer queries interactively
    Query {
        /// Path to the corpus file, one line per document
        #[clap(value_parser)]
        corpus: PathBuf,

        /// Emit matching lines as a JSON array instead of plain text
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging() -> HuliResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .with_thread_names(true)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| HuliError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Reads queries from stdin and prints the matching corpus lines until the
/// quit sentinel is entered.
fn run_query_loop(index: &LineIndex, json: bool) -> HuliResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut query = String::new();
        if stdin.lock().read_line(&mut query)? == 0 {
            break;
        }
        let query = query.trim();
        if query == QUIT_COMMAND {
            break;
        }
        if query.is_empty() {
            continue;
        }

        let lines = index.search_lines(query);
        if json {
            let rendered = serde_json::to_string(&lines)?;
            writeln!(stdout, "{rendered}")?;
        } else {
            for line in &lines {
                writeln!(stdout, "{line}")?;
            }
            writeln!(stdout, "{} matching line(s)", lines.len())?;
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> HuliResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load configuration
    let env_prefix = "HULI";
    let config_loader = ConfigLoader::new(args.config.as_deref(), env_prefix);

    match args.command {
        Command::Query { corpus, json } => {
            // Load and validate configuration
            let config = match config_loader.load() {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Configuration error: {}", e);
                    process::exit(1);
                }
            };

            // Initialize global configuration
            config::init_global_config(config.clone());

            info!(corpus = %corpus.display(), "Indexing corpus");
            let corpus = Corpus::from_path(&corpus)?;
            let index = LineIndex::build(corpus, &config.index)?;
            info!(
                lines = index.corpus().len(),
                words = index.word_count(),
                "Index ready, enter queries ({} to quit)",
                QUIT_COMMAND
            );

            run_query_loop(&index, json)
        }
        Command::Validate => {
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = HuliConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(HuliError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| HuliError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(HuliError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
