// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Lockstep: simultaneous move resolution for turn-based grid games.
//!
//! Every piece on the board gets one move per turn and all moves happen at
//! once. This crate decides, as one atomic computation, which moves go ahead,
//! which pieces bounce off each other and which are blocked, including blocks
//! that cascade through lines of pieces.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Scenario files / turn controller  │
//! ├─────────────────────────────────────┤
//! │   Move resolver (fixed point)       │
//! ├─────────────────────────────────────┤
//! │   Locked squares │ Board geometry   │
//! └─────────────────────────────────────┘
//! ```
//!
//! Resolution is deterministic and independent of the order moves are
//! submitted in. Each call owns its working state, so independent games can
//! be resolved concurrently.

pub mod board;
pub mod error;
pub mod resolve;
pub mod scenario;

pub use error::{BatchError, BoardError};

// Re-export key types at crate root for convenience
pub use board::{Board, BoardSize, Direction, Piece, PieceId, Player, Square};
pub use resolve::{
    Disposition, LockCause, LockedSquares, Move, MoveBatch, MoveOutcome, Resolution, Resolver,
    resolve_batch,
};
pub use scenario::{Order, Scenario, ScenarioError};
