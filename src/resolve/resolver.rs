//! Fixed-point move resolver.
//!
//! Working state lives in an index-addressed arena of [`Entry`] values owned by
//! a single call. Each sweep reads the active set and the locks as they stood
//! when the sweep began and only then applies what it found, so the verdicts
//! do not depend on the order moves were submitted in.

use tracing::{debug, instrument, trace};

use crate::board::{BoardSize, Square};
use crate::error::BatchError;
use crate::resolve::invariants::assert_invariants;
use crate::resolve::{LockCause, LockedSquares, Move, MoveBatch, MoveOutcome, Resolution};

/// Resolves turns on a board of a fixed size.
///
/// A resolver holds no state between calls; one value can serve any number
/// of turns, from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolver {
    size: BoardSize,
}

impl Resolver {
    /// Create a resolver for the given board size.
    #[must_use]
    pub const fn new(size: BoardSize) -> Self {
        Self { size }
    }

    /// Board size this resolver works on.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Validate and resolve one turn's moves.
    ///
    /// # Errors
    ///
    /// Returns a [`BatchError`] if the moves do not form a valid batch.
    pub fn resolve(&self, moves: &[Move]) -> Result<Resolution, BatchError> {
        let batch = MoveBatch::new(self.size, moves.to_vec())?;
        Ok(resolve_batch(&batch))
    }
}

/// Where a move stands during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// Still in contention.
    Active,
    /// Never moving; settled before the first sweep.
    Stationary,
    /// Stopped by a conflict or a locked target.
    Invalidated,
}

/// Working record for one move.
#[derive(Debug, Clone, Copy)]
struct Entry {
    order: Move,
    next: Square,
    status: Status,
    bounce: bool,
}

/// A move found invalid during a sweep.
#[derive(Debug, Clone, Copy)]
struct Invalidation {
    index: usize,
    cause: LockCause,
}

/// Resolve a validated batch.
///
/// 1. Stationary moves (explicit, or clamped into their own square) lock
///    their square.
/// 2. Sweep the active moves until a sweep invalidates nothing. A move is
///    invalidated when its target is locked, when another active move has
///    the same target (a bounce), or when it and another active move would
///    trade squares (a swap). Every invalidated move locks its own square.
/// 3. Moves still active go ahead.
/// 4. A bounce only stands if its target ended up unlocked.
///
/// # Panics
///
/// Panics if a move that goes ahead targets a locked square or is flagged
/// as a bounce. Either means the sweep is broken, not that the input is bad.
#[must_use]
#[instrument(level = "debug", skip_all, fields(size = %batch.size(), moves = batch.len()))]
pub fn resolve_batch(batch: &MoveBatch) -> Resolution {
    let size = batch.size();
    let mut locked = LockedSquares::new();
    let mut entries: Vec<Entry> = batch
        .moves()
        .iter()
        .map(|&order| Entry {
            order,
            next: order.target(size),
            status: Status::Active,
            bounce: false,
        })
        .collect();

    settle_stationary(&mut entries, &mut locked);

    let mut active: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.status == Status::Active)
        .map(|(index, _)| index)
        .collect();

    let mut passes = 0u32;
    loop {
        passes += 1;
        let invalidations = sweep(&entries, &active, &locked);
        debug!(
            pass = passes,
            active = active.len(),
            invalidated = invalidations.len(),
            "sweep complete"
        );
        if invalidations.is_empty() {
            break;
        }

        for Invalidation { index, cause } in invalidations {
            let entry = &mut entries[index];
            entry.status = Status::Invalidated;
            if matches!(cause, LockCause::Bounce { .. }) {
                entry.bounce = true;
            }
            trace!(piece = %entry.order.piece, %cause, "move invalidated");
            locked.lock(entry.order.current, cause);
        }
        active.retain(|&index| entries[index].status == Status::Active);
    }

    for &index in &active {
        assert_cleared(&entries[index], &locked);
    }

    // Bounces are judged against the final locks, not the locks at the time
    // of the conflict.
    for entry in &mut entries {
        if entry.bounce && locked.is_locked(entry.next) {
            entry.bounce = false;
        }
    }

    let outcomes = entries
        .iter()
        .map(|entry| MoveOutcome {
            order: entry.order,
            next_square: entry.next,
            should_move: entry.status == Status::Active,
            is_bounce: entry.bounce,
            is_stationary: entry.status == Status::Stationary,
        })
        .collect();

    let resolution = Resolution::new(size, outcomes, locked, passes);
    debug!(
        passes,
        locked = resolution.locked().len(),
        moved = resolution.moved().count(),
        "turn resolved"
    );
    assert_invariants(&resolution);
    resolution
}

/// Check that a move left active after the last sweep may really go ahead.
///
/// # Panics
///
/// Panics if the move is stationary, flagged as a bounce, or targets a
/// locked square.
fn assert_cleared(entry: &Entry, locked: &LockedSquares) {
    assert!(
        entry.status != Status::Stationary,
        "piece {} cleared to move while stationary",
        entry.order.piece
    );
    assert!(
        !entry.bounce,
        "piece {} cleared to move while flagged as a bounce",
        entry.order.piece
    );
    assert!(
        !locked.is_locked(entry.next),
        "piece {} cleared to enter locked square {}",
        entry.order.piece,
        entry.next
    );
}

/// Mark stationary moves and lock their squares.
///
/// Explicit `Stationary` orders and steps clamped back onto the starting
/// square are separate rules with the same result.
fn settle_stationary(entries: &mut [Entry], locked: &mut LockedSquares) {
    for entry in entries {
        let explicit = entry.order.direction.is_stationary();
        let clamped = entry.next == entry.order.current;
        if explicit || clamped {
            entry.status = Status::Stationary;
            locked.lock(entry.order.current, LockCause::Stationary(entry.order.piece));
        }
    }
}

/// Find every active move that cannot go ahead given the current locks.
///
/// A move may be reported more than once; the caller applies all reports.
fn sweep(entries: &[Entry], active: &[usize], locked: &LockedSquares) -> Vec<Invalidation> {
    let mut invalidations = Vec::new();

    for &a in active {
        let mover = &entries[a];
        if mover.bounce {
            continue;
        }

        if locked.is_locked(mover.next) {
            invalidations.push(Invalidation {
                index: a,
                cause: LockCause::Blocked {
                    piece: mover.order.piece,
                    target: mover.next,
                },
            });
            continue;
        }

        for &b in active {
            if a == b {
                continue;
            }
            let other = &entries[b];

            if mover.next == other.next {
                invalidations.push(Invalidation {
                    index: a,
                    cause: LockCause::Bounce {
                        piece: mover.order.piece,
                        other: other.order.piece,
                    },
                });
                invalidations.push(Invalidation {
                    index: b,
                    cause: LockCause::Bounce {
                        piece: other.order.piece,
                        other: mover.order.piece,
                    },
                });
            }

            if mover.next == other.order.current && mover.order.current == other.next {
                invalidations.push(Invalidation {
                    index: a,
                    cause: LockCause::Swap {
                        piece: mover.order.piece,
                        other: other.order.piece,
                    },
                });
                invalidations.push(Invalidation {
                    index: b,
                    cause: LockCause::Swap {
                        piece: other.order.piece,
                        other: mover.order.piece,
                    },
                });
            }
        }
    }

    invalidations
}
