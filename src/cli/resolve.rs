//! Resolve command implementation.

use super::output::{JsonReport, Report, format_text};
use super::{CliError, OutputFormat};
use indicatif::{ProgressBar, ProgressStyle};
use lockstep::{Scenario, ScenarioError, resolve_batch};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Execute the resolve command.
///
/// Scenarios are resolved in parallel; each resolution owns its own board and
/// working state. Reports are printed in the order the files were given.
///
/// # Errors
///
/// Returns an error if any scenario cannot be loaded or resolved.
pub(crate) fn execute(
    scenarios: &[PathBuf],
    format: OutputFormat,
    apply: bool,
    progress: bool,
    threads: Option<usize>,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let mut loaded = Vec::with_capacity(scenarios.len());
    for path in scenarios {
        let scenario = Scenario::load(path)
            .map_err(|e| CliError::new(format!("Failed to load {}: {e}", path.display())))?;
        loaded.push((path.as_path(), scenario));
    }

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(loaded.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} scenarios")
            .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    let results: Vec<Result<Report, (PathBuf, ScenarioError)>> = loaded
        .par_iter()
        .map(|(path, scenario)| {
            let report = build_report(path, scenario, apply)
                .map_err(|e| (path.to_path_buf(), e));
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            report
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    info!(
        scenarios = results.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "resolution finished"
    );

    let mut reports = Vec::with_capacity(results.len());
    for result in results {
        let report = result
            .map_err(|(path, e)| CliError::new(format!("{}: {e}", path.display())))?;
        reports.push(report);
    }

    match format {
        OutputFormat::Text => {
            for report in &reports {
                print!("{}", format_text(report));
                println!();
            }
        }
        OutputFormat::Json => {
            let json: Vec<_> = reports.iter().map(JsonReport::from_report).collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

/// Resolve one scenario into a printable report.
fn build_report(path: &Path, scenario: &Scenario, apply: bool) -> Result<Report, ScenarioError> {
    let before = scenario.board()?;
    let batch = scenario.batch(&before)?;
    let resolution = resolve_batch(&batch);

    let after = if apply {
        let mut board = before.clone();
        board.apply(&resolution)?;
        Some(board)
    } else {
        None
    };

    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());

    Ok(Report {
        name,
        before,
        resolution,
        after,
    })
}
