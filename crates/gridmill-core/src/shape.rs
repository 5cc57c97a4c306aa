//! Board geometry.
//!
//! [`BoardShape`] describes a square board of side `N` partitioned into
//! rectangular sections of `section_height x section_width` cells, with
//! `section_height * section_width == N`. All conversions between linear
//! cell indices and rows/columns/sections are pure methods on the shape;
//! a shape is a small `Copy` value meant to be passed around freely.

use derive_more::{Display, Error};

/// Error returned when constructing an invalid [`BoardShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ShapeError {
    /// The section dimensions do not multiply to the side length.
    #[display("section {section_height}x{section_width} does not tile a side of {side}")]
    SectionMismatch {
        /// Requested side length.
        side: u8,
        /// Requested section height.
        section_height: u8,
        /// Requested section width.
        section_width: u8,
    },
    /// The side length is zero.
    #[display("side length must be at least 1")]
    ZeroSide,
}

/// The geometry of a Sudoku board.
///
/// Cells are indexed linearly in row-major order, `0..cell_count`.
/// Candidate slots pair a cell with a zero-based value index,
/// `0..candidate_slot_count` (see [`candidate_slot`](Self::candidate_slot)).
///
/// # Examples
///
/// ```
/// use gridmill_core::BoardShape;
///
/// let shape = BoardShape::GRID_9X9;
/// assert_eq!(shape.row_of(40), 4);
/// assert_eq!(shape.column_of(40), 4);
/// assert_eq!(shape.section_of(40), 4);
/// assert_eq!(shape.cell_at(4, 4), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardShape {
    side: u8,
    section_height: u8,
    section_width: u8,
}

impl BoardShape {
    /// Standard 9x9 board with 3x3 sections.
    pub const GRID_9X9: Self = Self {
        side: 9,
        section_height: 3,
        section_width: 3,
    };

    /// 6x6 board with 2x3 sections.
    pub const GRID_6X6: Self = Self {
        side: 6,
        section_height: 2,
        section_width: 3,
    };

    /// 12x12 board with 3x4 sections.
    pub const GRID_12X12: Self = Self {
        side: 12,
        section_height: 3,
        section_width: 4,
    };

    /// Creates a shape, validating that the sections tile the board.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if `side` is zero or
    /// `section_height * section_width != side`.
    pub const fn new(side: u8, section_height: u8, section_width: u8) -> Result<Self, ShapeError> {
        if side == 0 {
            return Err(ShapeError::ZeroSide);
        }
        if section_height as u16 * section_width as u16 != side as u16 {
            return Err(ShapeError::SectionMismatch {
                side,
                section_height,
                section_width,
            });
        }
        Ok(Self {
            side,
            section_height,
            section_width,
        })
    }

    /// Side length `N`; also the number of rows, columns, sections, and values.
    #[must_use]
    pub const fn side(self) -> usize {
        self.side as usize
    }

    /// Section height in rows.
    #[must_use]
    pub const fn section_height(self) -> usize {
        self.section_height as usize
    }

    /// Section width in columns.
    #[must_use]
    pub const fn section_width(self) -> usize {
        self.section_width as usize
    }

    /// Number of cells spanned by one horizontal band of sections
    /// (`side * section_height`).
    #[must_use]
    pub const fn section_group_size(self) -> usize {
        self.side() * self.section_height()
    }

    /// Total number of cells (`N * N`).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Total number of candidate slots (`N * N * N`).
    #[must_use]
    pub const fn candidate_slot_count(self) -> usize {
        self.cell_count() * self.side()
    }

    /// Row of a cell.
    #[must_use]
    pub const fn row_of(self, cell: usize) -> usize {
        cell / self.side()
    }

    /// Column of a cell.
    #[must_use]
    pub const fn column_of(self, cell: usize) -> usize {
        cell % self.side()
    }

    /// Section of a cell.
    #[must_use]
    pub const fn section_of(self, cell: usize) -> usize {
        cell / self.section_group_size() * self.section_height()
            + self.column_of(cell) / self.section_width()
    }

    /// First (upper-left) cell of the section containing `cell`.
    #[must_use]
    pub const fn section_start_of(self, cell: usize) -> usize {
        cell / self.section_group_size() * self.section_group_size()
            + self.column_of(cell) / self.section_width() * self.section_width()
    }

    /// First cell of a row.
    #[must_use]
    pub const fn row_first_cell(self, row: usize) -> usize {
        row * self.side()
    }

    /// First cell of a column.
    #[must_use]
    pub const fn column_first_cell(self, column: usize) -> usize {
        column
    }

    /// First (upper-left) cell of a section.
    #[must_use]
    pub const fn section_first_cell(self, section: usize) -> usize {
        section % self.section_height() * self.section_width()
            + section / self.section_height() * self.section_group_size()
    }

    /// Cell at a row/column intersection.
    #[must_use]
    pub const fn cell_at(self, row: usize, column: usize) -> usize {
        row * self.side() + column
    }

    /// Cell at `offset` (row-major, `0..side`) within a section.
    #[must_use]
    pub const fn section_cell(self, section: usize, offset: usize) -> usize {
        self.section_first_cell(section)
            + offset / self.section_width() * self.side()
            + offset % self.section_width()
    }

    /// Index of the candidate slot for a zero-based value index at a cell.
    #[must_use]
    pub const fn candidate_slot(self, value_index: usize, cell: usize) -> usize {
        value_index + self.side() * cell
    }
}
