//! Hidden pair: two values each restricted to the same two cells of a house.
//!
//! Those two cells must take those two values, so any other candidate in
//! either cell is eliminated. Unlike the naked pair, the pair cells may carry
//! many candidates before the reduction.

use gridmill_core::{LogEntry, TechniqueKind};

use super::value_at;
use crate::{Board, Journal};

/// Scans rows for a hidden pair.
pub fn in_row(board: &mut Board, round: u32, journal: &mut Journal) -> bool {
    let shape = board.shape();
    for row in 0..shape.side() {
        if scan_house(
            board,
            |i| shape.cell_at(row, i),
            round,
            journal,
            TechniqueKind::HiddenPairRow,
        ) {
            return true;
        }
    }
    false
}

/// Scans columns for a hidden pair.
pub fn in_column(board: &mut Board, round: u32, journal: &mut Journal) -> bool {
    let shape = board.shape();
    for column in 0..shape.side() {
        if scan_house(
            board,
            |i| shape.cell_at(i, column),
            round,
            journal,
            TechniqueKind::HiddenPairColumn,
        ) {
            return true;
        }
    }
    false
}

/// Scans sections for a hidden pair.
pub fn in_section(board: &mut Board, round: u32, journal: &mut Journal) -> bool {
    let shape = board.shape();
    for section in 0..shape.side() {
        if scan_house(
            board,
            |i| shape.section_cell(section, i),
            round,
            journal,
            TechniqueKind::HiddenPairSection,
        ) {
            return true;
        }
    }
    false
}

/// Looks for two values confined to the same two cells of one house and
/// strips every other candidate from those cells.
fn scan_house(
    board: &mut Board,
    cell_at: impl Fn(usize) -> usize,
    round: u32,
    journal: &mut Journal,
    kind: TechniqueKind,
) -> bool {
    let side = board.shape().side();
    for value_index in 0..side {
        let Some(pair) = pair_cells(board, &cell_at, value_index) else {
            continue;
        };
        for value_index2 in value_index + 1..side {
            if pair_cells(board, &cell_at, value_index2) != Some(pair) {
                continue;
            }
            let (first, second) = pair;
            let mut done = false;
            for other in 0..side {
                if other != value_index && other != value_index2 {
                    done |= board.eliminate(first, other, round);
                    done |= board.eliminate(second, other, round);
                }
            }
            if done {
                journal.add(LogEntry::new(round, kind, value_at(value_index), first));
                return true;
            }
        }
    }
    false
}

/// The two cells a value is confined to within a house, if exactly two.
fn pair_cells(
    board: &Board,
    cell_at: &impl Fn(usize) -> usize,
    value_index: usize,
) -> Option<(usize, usize)> {
    let mut first = None;
    let mut second = None;
    let mut count = 0;
    for i in 0..board.shape().side() {
        let cell = cell_at(i);
        if board.is_candidate(cell, value_index) {
            if first.is_none() {
                first = Some(cell);
            } else if second.is_none() {
                second = Some(cell);
            }
            count += 1;
        }
    }
    if count == 2 {
        Some((first?, second?))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use gridmill_core::BoardShape;

    use super::*;

    #[test]
    fn test_hidden_pair_in_row_strips_pair_cells() {
        let shape = BoardShape::GRID_9X9;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        // Values 1 and 2 live only at (0,4) and (0,7); everything else in the
        // row keeps full candidates.
        for column in (0..9).filter(|&c| c != 4 && c != 7) {
            board.eliminate(shape.cell_at(0, column), 0, 2);
            board.eliminate(shape.cell_at(0, column), 1, 2);
        }

        assert!(in_row(&mut board, 2, &mut journal));
        let (a, b) = (shape.cell_at(0, 4), shape.cell_at(0, 7));
        for value_index in 2..9 {
            assert!(!board.is_candidate(a, value_index));
            assert!(!board.is_candidate(b, value_index));
        }
        assert!(board.is_candidate(a, 0));
        assert!(board.is_candidate(b, 1));
        assert_eq!(journal.count(TechniqueKind::HiddenPairRow), 1);
    }

    #[test]
    fn test_requires_identical_cell_pairs() {
        let shape = BoardShape::GRID_9X9;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        // Value 1 confined to (0,4)/(0,7) but value 2 to (0,4)/(0,8).
        for column in (0..9).filter(|&c| c != 4 && c != 7) {
            board.eliminate(shape.cell_at(0, column), 0, 2);
        }
        for column in (0..9).filter(|&c| c != 4 && c != 8) {
            board.eliminate(shape.cell_at(0, column), 1, 2);
        }
        assert!(!in_row(&mut board, 2, &mut journal));
    }

    #[test]
    fn test_hidden_pair_in_section() {
        let shape = BoardShape::GRID_9X9;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        // Values 8 and 9 live only at cells 0 and 10 within section 0.
        for offset in 0..9 {
            let cell = shape.section_cell(0, offset);
            if cell != 0 && cell != 10 {
                board.eliminate(cell, 7, 2);
                board.eliminate(cell, 8, 2);
            }
        }

        assert!(in_section(&mut board, 2, &mut journal));
        for value_index in 0..7 {
            assert!(!board.is_candidate(0, value_index));
            assert!(!board.is_candidate(10, value_index));
        }
        assert_eq!(journal.count(TechniqueKind::HiddenPairSection), 1);
    }
}
