//! Naked single: a cell with exactly one live candidate.

use gridmill_core::{LogEntry, TechniqueKind};

use super::value_at;
use crate::{Board, InvariantError, Journal};

/// Places the first cell found whose candidate list has shrunk to one value.
///
/// # Errors
///
/// Propagates an [`InvariantError`] from the placement; this cannot happen
/// unless the possibility table is corrupt.
pub fn apply(
    board: &mut Board,
    round: u32,
    journal: &mut Journal,
) -> Result<bool, InvariantError> {
    let shape = board.shape();
    for cell in 0..shape.cell_count() {
        if board.solution()[cell] != 0 {
            continue;
        }
        let mut count = 0;
        let mut last_index = 0;
        for value_index in 0..shape.side() {
            if board.is_candidate(cell, value_index) {
                count += 1;
                last_index = value_index;
            }
        }
        if count == 1 {
            let value = value_at(last_index);
            board.place(cell, round, value)?;
            journal.add(LogEntry::new(round, TechniqueKind::NakedSingle, value, cell));
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use gridmill_core::BoardShape;

    use super::*;

    #[test]
    fn test_places_lone_candidate() {
        let shape = BoardShape::GRID_9X9;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        // Strip all but value 7 from cell 40.
        for value_index in (0..9).filter(|&v| v != 6) {
            board.eliminate(40, value_index, 2);
        }

        assert!(apply(&mut board, 2, &mut journal).unwrap());
        assert_eq!(board.solution()[40], 7);
        assert_eq!(journal.count(TechniqueKind::NakedSingle), 1);
    }

    #[test]
    fn test_no_progress_on_open_board() {
        let shape = BoardShape::GRID_9X9;
        let mut board = Board::new(shape);
        let mut journal = Journal::new(shape);
        assert!(!apply(&mut board, 2, &mut journal).unwrap());
        assert!(journal.instructions().is_empty());
    }
}
