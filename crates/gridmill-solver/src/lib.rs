//! Constraint-based Sudoku solving for the gridmill engine.
//!
//! The solver works on a round-tagged possibility table: every candidate
//! slot records the search round at which it was eliminated (0 = still
//! live), which makes rolling back a failed guess a single linear sweep.
//! Solving alternates a fixed battery of logical techniques (even rounds)
//! with guesses (odd rounds); the recorded log of technique applications
//! feeds the difficulty classifier.
//!
//! # Overview
//!
//! - [`Board`]: the constraint state (puzzle, solution, placement rounds,
//!   possibility table)
//! - [`Solver`]: backtracking search driver with deduction, guessing,
//!   rollback, and solution counting
//! - [`difficulty`]: technique-usage counts and the grading rules
//! - [`technique`]: the individual deduction techniques
//!
//! # Examples
//!
//! ```
//! use gridmill_core::{BoardShape, text};
//! use gridmill_solver::Solver;
//!
//! let shape = BoardShape::GRID_9X9;
//! let givens = text::parse_board(
//!     shape,
//!     "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//!     ",
//! )?;
//!
//! let mut solver = Solver::new(shape);
//! solver.set_puzzle(&givens)?;
//! assert!(solver.solve()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    board::Board,
    error::{ContradictionError, InvariantError, SolverError},
    journal::Journal,
    solver::Solver,
};

mod board;
pub mod difficulty;
mod error;
mod journal;
mod solver;
pub mod technique;
