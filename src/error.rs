//! Error types for board setup and move batch validation.
//!
//! Everything here is a caller error: the resolver itself never fails on a
//! well-formed [`MoveBatch`](crate::resolve::MoveBatch). Algorithm defects are
//! reported as panics, not as values of these types.

use thiserror::Error;

use crate::board::{BoardSize, PieceId, Square};

/// Errors raised while building or advancing a [`Board`](crate::board::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A board needs at least one row and one column.
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard {
        /// Requested row count.
        rows: u16,
        /// Requested column count.
        cols: u16,
    },
    /// A piece was placed outside the board.
    #[error("square {square} is outside the {size} board")]
    OutOfBounds {
        /// The offending square.
        square: Square,
        /// The board it was checked against.
        size: BoardSize,
    },
    /// A piece was placed on a square that already holds another piece.
    #[error("square {square} is already occupied by piece {occupant}")]
    SquareOccupied {
        /// The contested square.
        square: Square,
        /// The piece already standing there.
        occupant: PieceId,
    },
    /// Two pieces were given the same id.
    #[error("piece {0} is already on the board")]
    DuplicatePiece(PieceId),
    /// A resolution was applied to a board it was not computed for.
    #[error("resolution does not match the board for piece {0}")]
    StaleResolution(PieceId),
    /// A resolution computed for one board size was applied to another.
    #[error("resolution is for a {actual} board, not {expected}")]
    SizeMismatch {
        /// Size of the board being advanced.
        expected: BoardSize,
        /// Size the resolution was computed for.
        actual: BoardSize,
    },
}

/// A move batch rejected before it reaches the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BatchError {
    /// The same piece appears in more than one move.
    #[error("piece {0} has more than one move in the batch")]
    DuplicatePiece(PieceId),
    /// A move starts from a square outside the board.
    #[error("piece {piece} starts at {square}, outside the {size} board")]
    OffBoard {
        /// The moving piece.
        piece: PieceId,
        /// Its claimed starting square.
        square: Square,
        /// The board it was checked against.
        size: BoardSize,
    },
    /// A move references a piece that is not on the board.
    #[error("piece {0} is not on the board")]
    UnknownPiece(PieceId),
    /// Two moves start from the same square.
    #[error("pieces {first} and {second} both start at {square}")]
    SharedSquare {
        /// The doubly claimed square.
        square: Square,
        /// The piece listed first.
        first: PieceId,
        /// The piece listed second.
        second: PieceId,
    },
    /// A move claims a starting square the piece is not standing on.
    #[error("piece {piece} is at {actual}, not {claimed}")]
    SquareMismatch {
        /// The moving piece.
        piece: PieceId,
        /// The square the move claims.
        claimed: Square,
        /// The square the board records.
        actual: Square,
    },
}
