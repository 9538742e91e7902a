//! Board size and step geometry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Direction, Square};
use crate::error::BoardError;

/// Default board edge, in squares.
const DEFAULT_EDGE: u16 = 16;

/// Dimensions of a rectangular board.
///
/// This is the only configuration the resolver needs. Both dimensions are
/// non-zero; deserialization goes through [`BoardSize::new`] to keep it so.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardSize")]
pub struct BoardSize {
    rows: u16,
    cols: u16,
}

#[derive(Deserialize)]
struct RawBoardSize {
    rows: u16,
    cols: u16,
}

impl TryFrom<RawBoardSize> for BoardSize {
    type Error = BoardError;

    fn try_from(raw: RawBoardSize) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.cols)
    }
}

impl BoardSize {
    /// Create a board size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyBoard`] if either dimension is zero.
    pub const fn new(rows: u16, cols: u16) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyBoard { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(self) -> u16 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(self) -> u16 {
        self.cols
    }

    /// Check if a square lies on the board.
    #[must_use]
    pub const fn contains(self, square: Square) -> bool {
        square.row < self.rows && square.col < self.cols
    }

    /// The square a piece on `square` reaches by stepping once in `direction`.
    ///
    /// Steps are clamped at the edges: a piece ordered off the board ends up
    /// where it started. `Stationary` returns `square` unchanged.
    #[must_use]
    pub fn next_square(self, square: Square, direction: Direction) -> Square {
        let Square { row, col } = square;
        match direction {
            Direction::Up => Square::new(row.saturating_sub(1), col),
            Direction::Down => Square::new(row.saturating_add(1).min(self.rows - 1), col),
            Direction::Left => Square::new(row, col.saturating_sub(1)),
            Direction::Right => Square::new(row, col.saturating_add(1).min(self.cols - 1)),
            Direction::Stationary => square,
        }
    }

    /// Iterate over every square in row-major order.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Square::new(row, col)))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            rows: DEFAULT_EDGE,
            cols: DEFAULT_EDGE,
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_by_three() -> BoardSize {
        BoardSize::new(3, 3).unwrap()
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(BoardSize::new(0, 3).is_err());
        assert!(BoardSize::new(3, 0).is_err());
        assert!(BoardSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_step_in_each_direction() {
        let size = three_by_three();
        let center = Square::new(1, 1);
        assert_eq!(size.next_square(center, Direction::Up), Square::new(0, 1));
        assert_eq!(size.next_square(center, Direction::Down), Square::new(2, 1));
        assert_eq!(size.next_square(center, Direction::Left), Square::new(1, 0));
        assert_eq!(size.next_square(center, Direction::Right), Square::new(1, 2));
        assert_eq!(size.next_square(center, Direction::Stationary), center);
    }

    #[test]
    fn test_steps_clamp_at_edges() {
        let size = three_by_three();
        assert_eq!(size.next_square(Square::new(0, 0), Direction::Up), Square::new(0, 0));
        assert_eq!(size.next_square(Square::new(0, 0), Direction::Left), Square::new(0, 0));
        assert_eq!(size.next_square(Square::new(2, 2), Direction::Down), Square::new(2, 2));
        assert_eq!(size.next_square(Square::new(2, 2), Direction::Right), Square::new(2, 2));
    }

    #[test]
    fn test_single_square_board_never_moves() {
        let size = BoardSize::new(1, 1).unwrap();
        let only = Square::new(0, 0);
        for direction in Direction::ALL {
            assert_eq!(size.next_square(only, direction), only);
        }
    }

    #[test]
    fn test_contains() {
        let size = BoardSize::new(2, 4).unwrap();
        assert!(size.contains(Square::new(1, 3)));
        assert!(!size.contains(Square::new(2, 0)));
        assert!(!size.contains(Square::new(0, 4)));
        assert_eq!(size.squares().count(), 8);
    }

    #[test]
    fn test_default_is_sixteen_square() {
        let size = BoardSize::default();
        assert_eq!((size.rows(), size.cols()), (16, 16));
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let ok: BoardSize = serde_json::from_str(r#"{"rows":2,"cols":5}"#).unwrap();
        assert_eq!(ok.to_string(), "2x5");
        assert!(serde_json::from_str::<BoardSize>(r#"{"rows":0,"cols":5}"#).is_err());
    }
}
