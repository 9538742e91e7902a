//! Scenario validation command implementation.

use super::CliError;
use lockstep::Scenario;
use std::fs;
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the scenario file cannot be read or is invalid.
pub(crate) fn execute(path: &Path) -> Result<(), CliError> {
    let json = fs::read_to_string(path)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?;

    println!("Validating: {}", path.display());
    println!();

    let scenario = match Scenario::from_json(&json) {
        Ok(scenario) => {
            print_check("Scenario JSON", true);
            scenario
        }
        Err(e) => {
            print_check("Scenario JSON", false);
            return Err(CliError::new(format!("Invalid scenario: {e}")));
        }
    };

    let board = match scenario.board() {
        Ok(board) => {
            print_check("Piece placement", true);
            board
        }
        Err(e) => {
            print_check("Piece placement", false);
            return Err(CliError::new(format!("Invalid placement: {e}")));
        }
    };

    let batch = match scenario.batch(&board) {
        Ok(batch) => {
            print_check("Orders", true);
            batch
        }
        Err(e) => {
            print_check("Orders", false);
            return Err(CliError::new(format!("Invalid orders: {e}")));
        }
    };

    println!();
    println!("Summary:");
    println!("  Board:        {}", board.size());
    println!("  Pieces:       {}", board.len());
    println!("  Orders:       {}", scenario.orders.len());
    println!("  Stationary:   {} (no order given)", batch.len() - scenario.orders.len());

    println!();
    println!("Validation successful!");

    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
