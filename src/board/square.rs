//! Squares and directions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A square on the board.
///
/// Squares carry no bounds of their own; whether a square is on the board
/// depends on the [`BoardSize`](crate::board::BoardSize) it is checked against.
/// Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    /// Row index, 0 at the top.
    pub row: u16,
    /// Column index, 0 at the left.
    pub col: u16,
}

impl Square {
    /// Create a new square.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The move a piece is ordered to make this turn.
///
/// `Stationary` is an order in its own right, not a step of length zero:
/// geometry never steps a piece in the `Stationary` direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
    /// Stay in place.
    Stationary,
}

impl Direction {
    /// Every direction, stepping ones first.
    pub const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Stationary,
    ];

    /// Check if this is the explicit "stay in place" order.
    #[must_use]
    pub const fn is_stationary(self) -> bool {
        matches!(self, Direction::Stationary)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Stationary => "stationary",
        };
        f.write_str(name)
    }
}
