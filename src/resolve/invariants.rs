//! Resolution invariants - sanity checks that detect resolver bugs.
//!
//! These should NEVER trigger for a resolution produced by
//! [`resolve_batch`](crate::resolve::resolve_batch). If they do, the sweep is
//! broken.

use std::collections::HashMap;

use crate::resolve::Resolution;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all resolution invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_resolution(resolution: &Resolution) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let size = resolution.size();
    let locked = resolution.locked();
    let mut targets = HashMap::new();

    for outcome in resolution.outcomes() {
        let piece = outcome.piece();

        if outcome.should_move && outcome.is_stationary {
            violations.push(InvariantViolation {
                message: format!("Piece {piece} is both moving and stationary"),
            });
        }

        if outcome.next_square != outcome.order.target(size) {
            violations.push(InvariantViolation {
                message: format!(
                    "Piece {piece} has next square {} but its move leads to {}",
                    outcome.next_square,
                    outcome.order.target(size)
                ),
            });
        }

        if outcome.is_stationary
            && !outcome.order.direction.is_stationary()
            && outcome.next_square != outcome.current_square()
        {
            violations.push(InvariantViolation {
                message: format!("Piece {piece} is stationary but steps to {}", outcome.next_square),
            });
        }

        if !outcome.should_move {
            if !locked.is_locked(outcome.current_square()) {
                violations.push(InvariantViolation {
                    message: format!(
                        "Piece {piece} stays on {} but the square is not locked",
                        outcome.current_square()
                    ),
                });
            }
            continue;
        }

        if outcome.is_bounce {
            violations.push(InvariantViolation {
                message: format!("Piece {piece} moves but is flagged as a bounce"),
            });
        }

        if locked.is_locked(outcome.next_square) {
            violations.push(InvariantViolation {
                message: format!("Piece {piece} moves into locked square {}", outcome.next_square),
            });
        }

        if let Some(first) = targets.insert(outcome.next_square, piece) {
            violations.push(InvariantViolation {
                message: format!(
                    "Pieces {first} and {piece} both move into {}",
                    outcome.next_square
                ),
            });
        }
    }

    violations
}

/// Assert all resolution invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(resolution: &Resolution) {
    let violations = check_resolution(resolution);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Resolution invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_resolution: &Resolution) {}
