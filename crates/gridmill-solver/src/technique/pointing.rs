//! Pointing pair/triple: a candidate confined to one line of a section.
//!
//! If every live cell for a value inside a section falls on the same row (or
//! column), the value must be placed there, so it can be eliminated from the
//! rest of that row (or column) outside the section.

use gridmill_core::{LogEntry, TechniqueKind};

use super::value_at;
use crate::{Board, Journal};

/// Row variant: eliminates along the row the section pins the value to.
pub fn row(board: &mut Board, round: u32, journal: &mut Journal) -> bool {
    let shape = board.shape();
    for value_index in 0..shape.side() {
        for section in 0..shape.side() {
            let mut confined = Some(None);
            for offset in 0..shape.side() {
                let cell = shape.section_cell(section, offset);
                if board.is_candidate(cell, value_index) {
                    let row_offset = offset / shape.section_width();
                    confined = match confined {
                        Some(None) => Some(Some(row_offset)),
                        Some(Some(r)) if r == row_offset => confined,
                        _ => None,
                    };
                }
            }
            let Some(Some(row_offset)) = confined else {
                continue;
            };
            let row = shape.row_of(shape.section_first_cell(section)) + row_offset;
            let row_start = shape.row_first_cell(row);
            let mut done = false;
            for column in 0..shape.side() {
                let cell = shape.cell_at(row, column);
                if shape.section_of(cell) != section {
                    done |= board.eliminate(cell, value_index, round);
                }
            }
            if done {
                journal.add(LogEntry::new(
                    round,
                    TechniqueKind::PointingPairRow,
                    value_at(value_index),
                    row_start,
                ));
                return true;
            }
        }
    }
    false
}

/// Column variant: eliminates along the column the section pins the value to.
pub fn column(board: &mut Board, round: u32, journal: &mut Journal) -> bool {
    let shape = board.shape();
    for value_index in 0..shape.side() {
        for section in 0..shape.side() {
            let mut confined = Some(None);
            for offset in 0..shape.side() {
                let cell = shape.section_cell(section, offset);
                if board.is_candidate(cell, value_index) {
                    let column_offset = offset % shape.section_width();
                    confined = match confined {
                        Some(None) => Some(Some(column_offset)),
                        Some(Some(c)) if c == column_offset => confined,
                        _ => None,
                    };
                }
            }
            let Some(Some(column_offset)) = confined else {
                continue;
            };
            let column = shape.column_of(shape.section_first_cell(section)) + column_offset;
            let column_start = shape.column_first_cell(column);
            let mut done = false;
            for row in 0..shape.side() {
                let cell = shape.cell_at(row, column);
                if shape.section_of(cell) != section {
                    done |= board.eliminate(cell, value_index, round);
                }
            }
            if done {
                journal.add(LogEntry::new(
                    round,
                    TechniqueKind::PointingPairColumn,
                    value_at(value_index),
                    column_start,
                ));
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use gridmill_core::BoardShape;

    use super::*;

    #[test]
    fn test_row_pointing_eliminates_outside_section() {
        let shape = BoardShape::GRID_9X9;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        // Confine value 1 within section 0 to row 0: kill it in rows 1-2.
        for offset in 3..9 {
            board.eliminate(shape.section_cell(0, offset), 0, 2);
        }

        assert!(row(&mut board, 2, &mut journal));
        // Eliminated in row 0 outside section 0.
        assert!(!board.is_candidate(3, 0));
        assert!(!board.is_candidate(8, 0));
        // Still live inside the section.
        assert!(board.is_candidate(0, 0));
        assert_eq!(journal.count(TechniqueKind::PointingPairRow), 1);
    }

    #[test]
    fn test_column_pointing_eliminates_outside_section() {
        let shape = BoardShape::GRID_9X9;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        // Confine value 6 within section 0 to column 1.
        for offset in 0..9 {
            if offset % 3 != 1 {
                board.eliminate(shape.section_cell(0, offset), 5, 2);
            }
        }

        assert!(column(&mut board, 2, &mut journal));
        assert!(!board.is_candidate(shape.cell_at(4, 1), 5));
        assert!(board.is_candidate(shape.cell_at(1, 1), 5));
        assert_eq!(journal.count(TechniqueKind::PointingPairColumn), 1);
    }

    #[test]
    fn test_no_progress_when_value_spans_two_rows() {
        let shape = BoardShape::GRID_9X9;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        // Value 1 live in rows 0 and 1 of section 0.
        for offset in 6..9 {
            board.eliminate(shape.section_cell(0, offset), 0, 2);
        }
        assert!(!row(&mut board, 2, &mut journal));
    }
}
