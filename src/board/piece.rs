//! Pieces and their owners.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Square;

/// Unique identifier for a piece, stable across turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player.
    A,
    /// Second player.
    B,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => f.write_str("A"),
            Player::B => f.write_str("B"),
        }
    }
}

/// A piece in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Unique identifier.
    pub id: PieceId,
    /// Owning player.
    pub owner: Player,
    /// Square the piece stands on at the start of the turn.
    pub square: Square,
}

impl Piece {
    /// Create a new piece.
    #[must_use]
    pub const fn new(id: PieceId, owner: Player, square: Square) -> Self {
        Self { id, owner, square }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_json_shape() {
        let piece = Piece::new(PieceId(3), Player::B, Square::new(1, 2));
        let json = serde_json::to_string(&piece).unwrap();
        assert_eq!(json, r#"{"id":3,"owner":"B","square":{"row":1,"col":2}}"#);
    }
}
