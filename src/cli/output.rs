//! Output formatting utilities for CLI.

use lockstep::{Board, Disposition, LockedSquares, MoveOutcome, Piece, Player, Resolution, Square};
use serde::Serialize;

/// A resolved scenario, ready to print.
#[derive(Debug)]
pub(super) struct Report {
    /// Scenario file name.
    pub(super) name: String,
    /// Board at the start of the turn.
    pub(super) before: Board,
    /// The turn's resolution.
    pub(super) resolution: Resolution,
    /// Board after the turn, when requested.
    pub(super) after: Option<Board>,
}

/// JSON-serializable scenario report.
#[derive(Debug, Serialize)]
pub(super) struct JsonReport {
    /// Scenario file name.
    pub(super) scenario: String,
    /// Board size as `ROWSxCOLS`.
    pub(super) board: String,
    /// Sweeps the resolver needed.
    pub(super) passes: u32,
    /// Per-move outcomes in submission order.
    pub(super) outcomes: Vec<JsonOutcome>,
    /// Locked squares in row-major order.
    pub(super) locked: Vec<JsonLock>,
    /// Pieces after the turn (null unless requested).
    pub(super) pieces_after: Option<Vec<Piece>>,
}

/// JSON-serializable move outcome.
#[derive(Debug, Serialize)]
pub(super) struct JsonOutcome {
    /// Piece id.
    pub(super) piece: u32,
    /// Starting square.
    pub(super) current: Square,
    /// Target square.
    pub(super) next: Square,
    /// Single-value verdict.
    pub(super) disposition: Disposition,
    /// Raw flags, as the resolver reports them.
    pub(super) should_move: bool,
    pub(super) is_bounce: bool,
    pub(super) is_stationary: bool,
}

/// JSON-serializable locked square.
#[derive(Debug, Serialize)]
pub(super) struct JsonLock {
    /// The locked square.
    pub(super) square: Square,
    /// Piece left standing on it.
    pub(super) piece: u32,
    /// Why it was first locked.
    pub(super) cause: String,
}

impl JsonReport {
    /// Create from a report.
    pub(super) fn from_report(report: &Report) -> Self {
        let resolution = &report.resolution;
        Self {
            scenario: report.name.clone(),
            board: resolution.size().to_string(),
            passes: resolution.passes(),
            outcomes: resolution.outcomes().iter().map(JsonOutcome::from_outcome).collect(),
            locked: resolution
                .locked()
                .iter()
                .map(|(square, cause)| JsonLock {
                    square,
                    piece: cause.piece().0,
                    cause: cause.to_string(),
                })
                .collect(),
            pieces_after: report
                .after
                .as_ref()
                .map(|board| board.pieces().copied().collect()),
        }
    }
}

impl JsonOutcome {
    fn from_outcome(outcome: &MoveOutcome) -> Self {
        Self {
            piece: outcome.piece().0,
            current: outcome.current_square(),
            next: outcome.next_square,
            disposition: outcome.disposition(),
            should_move: outcome.should_move,
            is_bounce: outcome.is_bounce,
            is_stationary: outcome.is_stationary,
        }
    }
}

/// Render a board as ASCII art.
///
/// Pieces show as their owner's letter, lowercase when their square is
/// locked. Empty locked squares show as `#`, other empty squares as `.`.
pub(super) fn render_board(board: &Board, locked: Option<&LockedSquares>) -> String {
    let size = board.size();
    let mut output = String::with_capacity(usize::from(size.rows()) * (usize::from(size.cols()) + 1));

    for row in 0..size.rows() {
        for col in 0..size.cols() {
            let square = Square::new(row, col);
            let is_locked = locked.is_some_and(|locked| locked.is_locked(square));
            let symbol = match (board.piece_at(square), is_locked) {
                (Some(piece), false) => owner_symbol(piece.owner),
                (Some(piece), true) => owner_symbol(piece.owner).to_ascii_lowercase(),
                (None, true) => '#',
                (None, false) => '.',
            };
            output.push(symbol);
        }
        output.push('\n');
    }

    output
}

fn owner_symbol(owner: Player) -> char {
    match owner {
        Player::A => 'A',
        Player::B => 'B',
    }
}

/// Format a report as human-readable text.
pub(super) fn format_text(report: &Report) -> String {
    let resolution = &report.resolution;
    let mut output = String::new();

    output.push_str(&format!(
        "Scenario {} ({} board, {} passes)\n\n",
        report.name,
        resolution.size(),
        resolution.passes()
    ));
    output.push_str(&render_board(&report.before, Some(resolution.locked())));
    output.push('\n');

    for outcome in resolution.outcomes() {
        // Padding needs owned strings; the Display impls ignore width.
        let piece = outcome.piece().to_string();
        let direction = outcome.order.direction.to_string();
        output.push_str(&format!(
            "  Piece {piece:>4}: {} {direction:<10} -> {} {}\n",
            outcome.current_square(),
            outcome.next_square,
            outcome.disposition()
        ));
    }

    if !resolution.locked().is_empty() {
        output.push_str("\n  Locked:\n");
        for (square, cause) in resolution.locked() {
            output.push_str(&format!("    {square} {cause}\n"));
        }
    }

    output.push_str(&format!(
        "\n  Moved: {}  Stationary: {}  Bounced: {}  Blocked: {}\n",
        resolution.count(Disposition::Moved),
        resolution.count(Disposition::Stationary),
        resolution.count(Disposition::Bounced),
        resolution.count(Disposition::Blocked)
    ));

    if let Some(after) = &report.after {
        output.push_str("\nAfter the turn:\n");
        output.push_str(&render_board(after, None));
    }

    output
}
