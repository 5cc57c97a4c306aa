//! Naked pair: two cells in one house restricted to the same two candidates.
//!
//! Those two values must land in those two cells, so every other cell of the
//! shared house loses both candidates. A single pair of cells can share a row
//! and a section (or a column and a section) at once; all shared houses are
//! tried before moving on.

use gridmill_core::{LogEntry, TechniqueKind};

use crate::{Board, Journal};

/// Eliminates candidates from the first productive naked pair found.
pub fn apply(board: &mut Board, round: u32, journal: &mut Journal) -> bool {
    let shape = board.shape();
    for cell in 0..shape.cell_count() {
        if board.candidate_count(cell) != 2 {
            continue;
        }
        for other in cell + 1..shape.cell_count() {
            if board.candidate_count(other) != 2 || !board.candidates_match(cell, other) {
                continue;
            }
            if shape.row_of(cell) == shape.row_of(other) {
                let row = shape.row_of(cell);
                let mut done = false;
                for column in 0..shape.side() {
                    let target = shape.cell_at(row, column);
                    if target != cell && target != other {
                        done |= strip_pair(board, cell, target, round);
                    }
                }
                if done {
                    journal.add(LogEntry::positional(round, TechniqueKind::NakedPairRow, cell));
                    return true;
                }
            }
            if shape.column_of(cell) == shape.column_of(other) {
                let column = shape.column_of(cell);
                let mut done = false;
                for row in 0..shape.side() {
                    let target = shape.cell_at(row, column);
                    if target != cell && target != other {
                        done |= strip_pair(board, cell, target, round);
                    }
                }
                if done {
                    journal.add(LogEntry::positional(
                        round,
                        TechniqueKind::NakedPairColumn,
                        cell,
                    ));
                    return true;
                }
            }
            if shape.section_of(cell) == shape.section_of(other) {
                let section = shape.section_of(cell);
                let mut done = false;
                for offset in 0..shape.side() {
                    let target = shape.section_cell(section, offset);
                    if target != cell && target != other {
                        done |= strip_pair(board, cell, target, round);
                    }
                }
                if done {
                    journal.add(LogEntry::positional(
                        round,
                        TechniqueKind::NakedPairSection,
                        cell,
                    ));
                    return true;
                }
            }
        }
    }
    false
}

/// Removes the pair cell's live candidates from the target cell.
fn strip_pair(board: &mut Board, pair_cell: usize, target: usize, round: u32) -> bool {
    let mut done = false;
    for value_index in 0..board.shape().side() {
        if board.is_candidate(pair_cell, value_index) {
            done |= board.eliminate(target, value_index, round);
        }
    }
    done
}

#[cfg(test)]
mod tests {
    use gridmill_core::BoardShape;

    use super::*;

    fn restrict_to(board: &mut Board, cell: usize, keep: [usize; 2]) {
        for value_index in (0..board.shape().side()).filter(|v| !keep.contains(v)) {
            board.eliminate(cell, value_index, 2);
        }
    }

    #[test]
    fn test_pair_in_row_strips_other_cells() {
        let shape = BoardShape::GRID_9X9;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        // Cells (0,0) and (0,5): different sections, same row, both {3, 4}.
        restrict_to(&mut board, 0, [2, 3]);
        restrict_to(&mut board, 5, [2, 3]);

        assert!(apply(&mut board, 2, &mut journal));
        assert!(!board.is_candidate(1, 2));
        assert!(!board.is_candidate(8, 3));
        // The pair itself keeps its candidates.
        assert!(board.is_candidate(0, 2));
        assert!(board.is_candidate(5, 3));
        assert_eq!(journal.count(TechniqueKind::NakedPairRow), 1);
    }

    #[test]
    fn test_pair_needs_matching_candidates() {
        let shape = BoardShape::GRID_9X9;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        restrict_to(&mut board, 0, [2, 3]);
        restrict_to(&mut board, 5, [2, 4]);
        assert!(!apply(&mut board, 2, &mut journal));
    }

    #[test]
    fn test_pair_in_section() {
        let shape = BoardShape::GRID_9X9;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        // Cells 0 and 10: same section, different row and column.
        restrict_to(&mut board, 0, [7, 8]);
        restrict_to(&mut board, 10, [7, 8]);

        assert!(apply(&mut board, 2, &mut journal));
        assert!(!board.is_candidate(20, 7));
        assert_eq!(journal.count(TechniqueKind::NakedPairSection), 1);
    }
}
