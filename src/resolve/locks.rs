//! Locked-square tracking for one resolution.

use std::collections::BTreeMap;
use std::collections::btree_map::{self, Entry};
use std::fmt;

use crate::board::{PieceId, Square};

/// Why a square was locked.
///
/// Only the first lock of a square is remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockCause {
    /// The piece on the square is not moving.
    Stationary(PieceId),
    /// The piece on the square tried to enter a locked square.
    Blocked {
        /// The blocked piece.
        piece: PieceId,
        /// The locked square it tried to enter.
        target: Square,
    },
    /// The piece on the square contested its target with another piece.
    Bounce {
        /// The bounced piece.
        piece: PieceId,
        /// The piece it contested the target with.
        other: PieceId,
    },
    /// The piece on the square tried to trade squares with another piece.
    Swap {
        /// The blocked piece.
        piece: PieceId,
        /// The piece it tried to trade with.
        other: PieceId,
    },
}

impl LockCause {
    /// The piece left standing on the locked square.
    #[must_use]
    pub const fn piece(self) -> PieceId {
        match self {
            LockCause::Stationary(piece)
            | LockCause::Blocked { piece, .. }
            | LockCause::Bounce { piece, .. }
            | LockCause::Swap { piece, .. } => piece,
        }
    }
}

impl fmt::Display for LockCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockCause::Stationary(piece) => write!(f, "{piece} stationary"),
            LockCause::Blocked { piece, target } => write!(f, "{piece} blocked entering {target}"),
            LockCause::Bounce { piece, other } => write!(f, "{piece} bounced with {other}"),
            LockCause::Swap { piece, other } => write!(f, "{piece} swap with {other}"),
        }
    }
}

/// Squares no piece may enter for the rest of a resolution.
///
/// The set only grows: once a square is locked it stays locked until the
/// resolution that owns the set is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockedSquares {
    squares: BTreeMap<Square, LockCause>,
}

impl LockedSquares {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock a square.
    ///
    /// Returns `true` if the square was not locked before. Locking an already
    /// locked square keeps its original cause.
    pub fn lock(&mut self, square: Square, cause: LockCause) -> bool {
        match self.squares.entry(square) {
            Entry::Vacant(entry) => {
                entry.insert(cause);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Check if a square is locked.
    #[must_use]
    pub fn is_locked(&self, square: Square) -> bool {
        self.squares.contains_key(&square)
    }

    /// Why a square was first locked.
    #[must_use]
    pub fn cause(&self, square: Square) -> Option<LockCause> {
        self.squares.get(&square).copied()
    }

    /// Number of locked squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Check if nothing is locked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Iterate over locked squares and their causes, in row-major order.
    #[must_use]
    pub fn iter(&self) -> LockedIter<'_> {
        LockedIter {
            inner: self.squares.iter(),
        }
    }

    /// Iterate over locked squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.keys().copied()
    }
}

impl<'a> IntoIterator for &'a LockedSquares {
    type Item = (Square, LockCause);
    type IntoIter = LockedIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`LockedSquares`] set, in row-major order.
#[derive(Debug, Clone)]
pub struct LockedIter<'a> {
    inner: btree_map::Iter<'a, Square, LockCause>,
}

impl Iterator for LockedIter<'_> {
    type Item = (Square, LockCause);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&square, &cause)| (square, cause))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for LockedIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_is_idempotent_and_keeps_first_cause() {
        let mut locked = LockedSquares::new();
        let square = Square::new(1, 1);

        assert!(!locked.is_locked(square));
        assert!(locked.lock(square, LockCause::Stationary(PieceId(1))));
        assert!(!locked.lock(
            square,
            LockCause::Swap {
                piece: PieceId(1),
                other: PieceId(2),
            }
        ));

        assert!(locked.is_locked(square));
        assert_eq!(locked.len(), 1);
        assert_eq!(locked.cause(square), Some(LockCause::Stationary(PieceId(1))));
    }

    #[test]
    fn test_iteration_is_row_major() {
        let mut locked = LockedSquares::new();
        locked.lock(Square::new(2, 0), LockCause::Stationary(PieceId(1)));
        locked.lock(Square::new(0, 2), LockCause::Stationary(PieceId(2)));
        locked.lock(Square::new(0, 1), LockCause::Stationary(PieceId(3)));

        let squares: Vec<_> = locked.squares().collect();
        assert_eq!(squares, vec![Square::new(0, 1), Square::new(0, 2), Square::new(2, 0)]);

        let mut pieces = Vec::new();
        for (_, cause) in &locked {
            pieces.push(cause.piece());
        }
        assert_eq!(pieces, vec![PieceId(3), PieceId(2), PieceId(1)]);
        assert_eq!(locked.iter().len(), 3);
    }

    #[test]
    fn test_cause_names_piece() {
        let cause = LockCause::Blocked {
            piece: PieceId(9),
            target: Square::new(0, 0),
        };
        assert_eq!(cause.piece(), PieceId(9));
        assert_eq!(cause.to_string(), "#9 blocked entering (0, 0)");
    }
}
