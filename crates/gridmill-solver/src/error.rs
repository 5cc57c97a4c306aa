//! Solver error types.
//!
//! Two classes of failure are kept apart. [`ContradictionError`] means the
//! input itself is unsolvable (two givens conflict) and is a normal outcome
//! callers are expected to handle. [`InvariantError`] means the engine's own
//! bookkeeping was violated; it aborts the current attempt rather than let a
//! corrupted possibility table produce a wrong answer.

use derive_more::{Display, Error, From};

/// The starting givens conflict with each other.
///
/// Raised by `reset`/`set_puzzle` when a given lands on a candidate slot
/// that an earlier given in the same row, column, or section has already
/// eliminated. The puzzle is "not solvable as given"; no solving should be
/// attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("conflicting given {value} at cell {cell}")]
pub struct ContradictionError {
    /// Cell of the later, conflicting given.
    pub cell: usize,
    /// The conflicting value.
    pub value: u8,
}

/// An internal bookkeeping invariant was violated.
///
/// These indicate a defect in the engine, not bad input; the operation that
/// detected the violation aborts instead of continuing with corrupt state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvariantError {
    /// A value was placed into a cell that already holds one.
    #[display("placing into cell {cell} which is already placed")]
    CellAlreadyPlaced {
        /// The offending cell.
        cell: usize,
    },
    /// A cell's placement round was set twice.
    #[display("cell {cell} already has a placement round")]
    RoundAlreadySet {
        /// The offending cell.
        cell: usize,
    },
    /// A value was placed whose candidate slot is already eliminated.
    #[display("placing eliminated candidate {value} at cell {cell}")]
    CandidateEliminated {
        /// The offending cell.
        cell: usize,
        /// The value whose slot was dead.
        value: u8,
    },
}

/// Any failure surfaced by [`Solver`](crate::Solver) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolverError {
    /// The givens are contradictory; the puzzle has no solution as given.
    Contradiction(ContradictionError),
    /// The engine violated one of its own invariants.
    Invariant(InvariantError),
}
