//! Box/line reduction: a candidate confined to one section of a line.
//!
//! The mirror image of pointing: if every live cell for a value in a row (or
//! column) sits inside one section, the value can be eliminated from that
//! section's other lines.

use gridmill_core::{LogEntry, TechniqueKind};

use super::value_at;
use crate::{Board, Journal};

/// Row variant: a row confines a value to one section.
pub fn row(board: &mut Board, round: u32, journal: &mut Journal) -> bool {
    let shape = board.shape();
    for value_index in 0..shape.side() {
        for row in 0..shape.side() {
            let mut confined = Some(None);
            for column in 0..shape.side() {
                let cell = shape.cell_at(row, column);
                if board.is_candidate(cell, value_index) {
                    let box_index = column / shape.section_width();
                    confined = match confined {
                        Some(None) => Some(Some(box_index)),
                        Some(Some(b)) if b == box_index => confined,
                        _ => None,
                    };
                }
            }
            let Some(Some(box_index)) = confined else {
                continue;
            };
            let section = shape.section_of(shape.cell_at(row, box_index * shape.section_width()));
            let mut done = false;
            for offset in 0..shape.side() {
                let cell = shape.section_cell(section, offset);
                if shape.row_of(cell) != row {
                    done |= board.eliminate(cell, value_index, round);
                }
            }
            if done {
                journal.add(LogEntry::new(
                    round,
                    TechniqueKind::RowBoxReduction,
                    value_at(value_index),
                    shape.row_first_cell(row),
                ));
                return true;
            }
        }
    }
    false
}

/// Column variant: a column confines a value to one section.
pub fn column(board: &mut Board, round: u32, journal: &mut Journal) -> bool {
    let shape = board.shape();
    for value_index in 0..shape.side() {
        for col in 0..shape.side() {
            let mut confined = Some(None);
            for row in 0..shape.side() {
                let cell = shape.cell_at(row, col);
                if board.is_candidate(cell, value_index) {
                    let box_index = row / shape.section_height();
                    confined = match confined {
                        Some(None) => Some(Some(box_index)),
                        Some(Some(b)) if b == box_index => confined,
                        _ => None,
                    };
                }
            }
            let Some(Some(box_index)) = confined else {
                continue;
            };
            let section =
                shape.section_of(shape.cell_at(box_index * shape.section_height(), col));
            let mut done = false;
            for offset in 0..shape.side() {
                let cell = shape.section_cell(section, offset);
                if shape.column_of(cell) != col {
                    done |= board.eliminate(cell, value_index, round);
                }
            }
            if done {
                journal.add(LogEntry::new(
                    round,
                    TechniqueKind::ColumnBoxReduction,
                    value_at(value_index),
                    shape.column_first_cell(col),
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
    fn test_row_confinement_clears_section_remainder() {
        let shape = BoardShape::GRID_9X9;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        // Value 4 in row 0 survives only in columns 0-2 (section 0).
        for column in 3..9 {
            board.eliminate(shape.cell_at(0, column), 3, 2);
        }

        assert!(row(&mut board, 2, &mut journal));
        // Cleared from section 0's other rows.
        assert!(!board.is_candidate(shape.cell_at(1, 0), 3));
        assert!(!board.is_candidate(shape.cell_at(2, 2), 3));
        // Row 0 itself keeps the candidate.
        assert!(board.is_candidate(shape.cell_at(0, 1), 3));
        assert_eq!(journal.count(TechniqueKind::RowBoxReduction), 1);
    }

    #[test]
    fn test_column_confinement_clears_section_remainder() {
        let shape = BoardShape::GRID_6X6;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        // Value 5 in column 0 survives only in rows 0-1 (section 0).
        for r in 2..6 {
            board.eliminate(shape.cell_at(r, 0), 4, 2);
        }

        assert!(column(&mut board, 2, &mut journal));
        assert!(!board.is_candidate(shape.cell_at(0, 1), 4));
        assert!(!board.is_candidate(shape.cell_at(1, 2), 4));
        assert!(board.is_candidate(shape.cell_at(0, 0), 4));
        assert_eq!(journal.count(TechniqueKind::ColumnBoxReduction), 1);
    }
}
