//! Puzzle generation for the gridmill engine.
//!
//! [`Generator`] produces a single puzzle: it fills an empty board with a
//! random complete solution, then digs givens back out while the puzzle
//! keeps a unique solution. [`Controller`] runs generators on a pool of
//! worker threads to produce batches, optionally filtered by difficulty.
//!
//! # Examples
//!
//! ```no_run
//! use gridmill_core::{BoardShape, Difficulty, Symmetry};
//! use gridmill_generator::{Controller, GenerationRequest};
//!
//! let request = GenerationRequest {
//!     symmetry: Symmetry::Rotate180,
//!     difficulty: Difficulty::Easy,
//!     count: 3,
//!     ..GenerationRequest::new(BoardShape::GRID_9X9)
//! };
//! let puzzles = Controller::generate_multiple(&request);
//! assert_eq!(puzzles.len(), 3);
//! ```

pub use self::{
    controller::{Controller, GenerationRequest, SolveOutcome},
    generate::Generator,
};

mod controller;
mod generate;
