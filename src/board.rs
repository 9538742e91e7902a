//! Board model.
//!
//! - Squares and movement directions
//! - Board size and the step geometry (`next_square`)
//! - Pieces and their owners
//! - The board itself: piece placement, turn validation, applying a resolution

mod geometry;
mod piece;
mod square;
mod state;

pub use geometry::BoardSize;
pub use piece::{Piece, PieceId, Player};
pub use square::{Direction, Square};
pub use state::Board;
