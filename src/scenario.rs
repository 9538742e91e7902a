//! Scenario files.
//!
//! A scenario is one turn's worth of input in JSON: the board size, the pieces
//! in play and the orders given to them.
//!
//! ```json
//! {
//!   "board": { "rows": 3, "cols": 3 },
//!   "pieces": [
//!     { "id": 1, "owner": "A", "square": { "row": 0, "col": 0 } },
//!     { "id": 2, "owner": "B", "square": { "row": 0, "col": 2 } }
//!   ],
//!   "orders": [
//!     { "piece": 1, "direction": "right" },
//!     { "piece": 2, "direction": "left" }
//!   ]
//! }
//! ```
//!
//! Pieces without an order stay where they are.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, BoardSize, Direction, Piece, PieceId};
use crate::error::{BatchError, BoardError};
use crate::resolve::{MoveBatch, Resolution, resolve_batch};

/// Errors from loading or resolving a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Reading or writing the file failed.
    #[error("scenario I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The file is not a valid scenario document.
    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The pieces cannot be placed.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The orders do not form a valid batch.
    #[error(transparent)]
    Batch(#[from] BatchError),
}

/// An order for one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// The ordered piece.
    pub piece: PieceId,
    /// Where it goes.
    pub direction: Direction,
}

/// One turn's input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Board dimensions. Defaults to 16x16.
    #[serde(default)]
    pub board: BoardSize,
    /// Pieces in play.
    #[serde(default)]
    pub pieces: Vec<Piece>,
    /// Orders for this turn.
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Scenario {
    /// Parse a scenario from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Json`] if the text is not a valid scenario.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a scenario from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save the scenario to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ScenarioError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Build a scenario from a board and orders.
    #[must_use]
    pub fn from_board(board: &Board, orders: Vec<Order>) -> Self {
        Self {
            board: board.size(),
            pieces: board.pieces().copied().collect(),
            orders,
        }
    }

    /// Place the pieces on a fresh board.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Board`] if a piece cannot be placed.
    pub fn board(&self) -> Result<Board, ScenarioError> {
        let mut board = Board::new(self.board);
        for piece in &self.pieces {
            board.place(*piece)?;
        }
        Ok(board)
    }

    /// Turn the orders into a batch for `board`.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Batch`] if the orders are invalid.
    pub fn batch(&self, board: &Board) -> Result<MoveBatch, ScenarioError> {
        let orders: Vec<_> = self
            .orders
            .iter()
            .map(|order| (order.piece, order.direction))
            .collect();
        Ok(board.batch(&orders)?)
    }

    /// Resolve the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the pieces or orders are invalid.
    pub fn resolve(&self) -> Result<Resolution, ScenarioError> {
        let board = self.board()?;
        let batch = self.batch(&board)?;
        Ok(resolve_batch(&batch))
    }

    /// Resolve the turn and return the board after it, along with the
    /// resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the pieces or orders are invalid.
    pub fn next_turn(&self) -> Result<(Board, Resolution), ScenarioError> {
        let mut board = self.board()?;
        let batch = self.batch(&board)?;
        let resolution = resolve_batch(&batch);
        board.apply(&resolution)?;
        Ok((board, resolution))
    }
}
