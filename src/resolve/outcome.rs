//! Per-move verdicts and the result of a resolution.

use std::fmt;

use serde::Serialize;

use crate::board::{BoardSize, PieceId, Square};
use crate::resolve::{LockedSquares, Move};

/// What happened to a move, as a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// The piece steps to its target.
    Moved,
    /// The piece was not going anywhere.
    Stationary,
    /// The piece contested its target with another piece and stays put.
    Bounced,
    /// The piece was stopped for any other reason and stays put.
    Blocked,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Disposition::Moved => "moved",
            Disposition::Stationary => "stationary",
            Disposition::Bounced => "bounced",
            Disposition::Blocked => "blocked",
        };
        f.write_str(name)
    }
}

/// Verdict for one move.
///
/// Exactly one of `should_move` and `is_stationary` is set, or neither, which
/// means the move was blocked. `is_bounce` refines a blocked move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// The move as submitted.
    pub order: Move,
    /// Where the move would have taken the piece.
    pub next_square: Square,
    /// The piece steps to `next_square`.
    pub should_move: bool,
    /// The piece contested `next_square` with another piece.
    pub is_bounce: bool,
    /// The piece was not moving in the first place.
    pub is_stationary: bool,
}

impl MoveOutcome {
    /// The moving piece.
    #[must_use]
    pub const fn piece(&self) -> PieceId {
        self.order.piece
    }

    /// Square the piece started the turn on.
    #[must_use]
    pub const fn current_square(&self) -> Square {
        self.order.current
    }

    /// Square the piece ends the turn on.
    #[must_use]
    pub const fn final_square(&self) -> Square {
        if self.should_move {
            self.next_square
        } else {
            self.order.current
        }
    }

    /// Collapse the flags into a single disposition.
    #[must_use]
    pub const fn disposition(&self) -> Disposition {
        if self.should_move {
            Disposition::Moved
        } else if self.is_stationary {
            Disposition::Stationary
        } else if self.is_bounce {
            Disposition::Bounced
        } else {
            Disposition::Blocked
        }
    }

    /// Check if the move was blocked, bounces included.
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        !self.should_move && !self.is_stationary
    }
}

/// Result of resolving one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    size: BoardSize,
    outcomes: Vec<MoveOutcome>,
    locked: LockedSquares,
    passes: u32,
}

impl Resolution {
    pub(crate) fn new(
        size: BoardSize,
        outcomes: Vec<MoveOutcome>,
        locked: LockedSquares,
        passes: u32,
    ) -> Self {
        Self {
            size,
            outcomes,
            locked,
            passes,
        }
    }

    /// Board size the turn was resolved on.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// One outcome per submitted move, in submission order.
    #[must_use]
    pub fn outcomes(&self) -> &[MoveOutcome] {
        &self.outcomes
    }

    /// Squares locked when the resolution finished.
    #[must_use]
    pub const fn locked(&self) -> &LockedSquares {
        &self.locked
    }

    /// Number of sweeps over the active moves, including the final one that
    /// changed nothing.
    #[must_use]
    pub const fn passes(&self) -> u32 {
        self.passes
    }

    /// Outcome for a specific piece.
    #[must_use]
    pub fn outcome(&self, piece: PieceId) -> Option<&MoveOutcome> {
        self.outcomes.iter().find(|outcome| outcome.piece() == piece)
    }

    /// Outcomes of the moves that go ahead.
    pub fn moved(&self) -> impl Iterator<Item = &MoveOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.should_move)
    }

    /// Count outcomes with the given disposition.
    #[must_use]
    pub fn count(&self, disposition: Disposition) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.disposition() == disposition)
            .count()
    }
}
