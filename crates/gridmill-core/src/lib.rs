//! Core data structures for the gridmill Sudoku engine.
//!
//! This crate provides the shared value types used by the solving and
//! generation crates:
//!
//! - [`shape`]: [`BoardShape`], the immutable board geometry (side length and
//!   section dimensions) with pure cell/row/column/section conversions
//! - [`difficulty`]: [`Difficulty`], the ordered puzzle grading scale
//! - [`symmetry`]: [`Symmetry`], the dig-time symmetry classes
//! - [`log`]: [`LogEntry`] and [`TechniqueKind`], the solve-log vocabulary
//! - [`text`]: board printing and parsing in three interchange styles
//!
//! Boards themselves are plain `[u8]` slices of length
//! [`BoardShape::cell_count`], with `0` meaning blank and `1..=side` meaning
//! a placed value. All geometry is carried by value in a [`BoardShape`];
//! nothing in this crate holds global state.
//!
//! # Examples
//!
//! ```
//! use gridmill_core::BoardShape;
//!
//! let shape = BoardShape::GRID_6X6;
//! assert_eq!(shape.cell_count(), 36);
//! // 6x6 boards use 2x3 sections.
//! assert_eq!(shape.section_of(3), 1);
//! ```

pub mod difficulty;
pub mod log;
pub mod shape;
pub mod symmetry;
pub mod text;

pub use self::{
    difficulty::Difficulty,
    log::{LogEntry, TechniqueKind},
    shape::{BoardShape, ShapeError},
    symmetry::Symmetry,
    text::{ParseBoardError, PrintStyle},
};
