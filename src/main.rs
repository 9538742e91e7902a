//! Lockstep CLI - resolve and check turn scenarios from the command line.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Lockstep - simultaneous move resolution for grid games
#[derive(Parser, Debug)]
#[command(name = "lockstep")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Diagnostic log level: error, warn, info, debug or trace
    #[arg(short, long, global = true, default_value = "warn")]
    verbosity: Level,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve one turn for each scenario file
    Resolve {
        /// Scenario JSON files
        #[arg(required = true)]
        scenarios: Vec<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Also show the board after the turn
        #[arg(short, long)]
        apply: bool,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,
    },

    /// Check that a scenario file is well-formed without resolving it
    Validate {
        /// Scenario JSON file
        #[arg(required = true)]
        scenario: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = cli::init_logging(args.verbosity).and_then(|()| match args.command {
        Commands::Resolve {
            scenarios,
            format,
            apply,
            progress,
            threads,
        } => cli::resolve::execute(&scenarios, format, apply, progress, threads),

        Commands::Validate { scenario } => cli::validate::execute(&scenario),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
