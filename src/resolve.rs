//! Simultaneous move resolution.
//!
//! Every piece submits one move per turn and all moves are resolved together:
//! - Stationary pieces (explicit, or clamped into their own square) hold
//! - Two pieces stepping onto the same square bounce
//! - Two pieces trading squares directly block each other
//! - A piece stepping onto a locked square is blocked, locking its own square
//!
//! Blocking cascades, so the resolver sweeps the remaining moves until a
//! sweep invalidates nothing.

mod invariants;
mod locks;
mod moves;
mod outcome;
mod resolver;

pub use invariants::{InvariantViolation, assert_invariants, check_resolution};
pub use locks::{LockCause, LockedIter, LockedSquares};
pub use moves::{Move, MoveBatch};
pub use outcome::{Disposition, MoveOutcome, Resolution};
pub use resolver::{Resolver, resolve_batch};
