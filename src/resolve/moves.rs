//! Moves and validated move batches.

use std::collections::HashMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::board::{BoardSize, Direction, PieceId, Square};
use crate::error::BatchError;

/// A piece's order for this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The moving piece.
    pub piece: PieceId,
    /// Square the piece stands on when the turn starts.
    pub current: Square,
    /// Where it is ordered to go.
    pub direction: Direction,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(piece: PieceId, current: Square, direction: Direction) -> Self {
        Self {
            piece,
            current,
            direction,
        }
    }

    /// Create a move that keeps the piece where it is.
    #[must_use]
    pub const fn stationary(piece: PieceId, current: Square) -> Self {
        Self::new(piece, current, Direction::Stationary)
    }

    /// Destination of this move on a board of the given size.
    #[must_use]
    pub fn target(self, size: BoardSize) -> Square {
        size.next_square(self.current, self.direction)
    }
}

/// A well-formed set of moves for one turn.
///
/// Each piece appears at most once, every starting square is on the board and
/// no two pieces start on the same square. The resolver only accepts batches,
/// so it never has to second-guess its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveBatch {
    size: BoardSize,
    moves: Vec<Move>,
}

impl MoveBatch {
    /// Validate a list of moves against a board size.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in input order.
    pub fn new(size: BoardSize, moves: Vec<Move>) -> Result<Self, BatchError> {
        let mut pieces = HashSet::with_capacity(moves.len());
        let mut squares: HashMap<Square, PieceId> = HashMap::with_capacity(moves.len());

        for mv in &moves {
            if !size.contains(mv.current) {
                return Err(BatchError::OffBoard {
                    piece: mv.piece,
                    square: mv.current,
                    size,
                });
            }
            if !pieces.insert(mv.piece) {
                return Err(BatchError::DuplicatePiece(mv.piece));
            }
            if let Some(&first) = squares.get(&mv.current) {
                return Err(BatchError::SharedSquare {
                    square: mv.current,
                    first,
                    second: mv.piece,
                });
            }
            squares.insert(mv.current, mv.piece);
        }

        Ok(Self { size, moves })
    }

    /// Board size the batch was validated against.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// The moves, in submission order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if the batch has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
