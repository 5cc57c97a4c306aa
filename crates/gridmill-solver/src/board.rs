//! Round-tagged constraint state.

use gridmill_core::BoardShape;

use crate::InvariantError;

/// The constraint state for one solve or generate attempt.
///
/// Four parallel arrays carry the whole state:
///
/// - `puzzle`: the givens, `0` for blank; immutable while solving
/// - `solution`: values placed so far, built incrementally
/// - `placed_round`: the round each solution value was placed at
///   (`0` = unplaced)
/// - `eliminated`: one slot per (cell, value) candidate, holding the round
///   at which the candidate was eliminated (`0` = still live)
///
/// Tagging eliminations with rounds makes [`rollback`](Self::rollback) a
/// plain linear sweep: everything tagged with the abandoned round is
/// reverted in one pass, with earlier-round attributions untouched.
#[derive(Debug, Clone)]
pub struct Board {
    shape: BoardShape,
    puzzle: Vec<u8>,
    solution: Vec<u8>,
    placed_round: Vec<u32>,
    eliminated: Vec<u32>,
}

impl Board {
    /// Creates an all-blank board for the given shape.
    #[must_use]
    pub fn new(shape: BoardShape) -> Self {
        Self {
            shape,
            puzzle: vec![0; shape.cell_count()],
            solution: vec![0; shape.cell_count()],
            placed_round: vec![0; shape.cell_count()],
            eliminated: vec![0; shape.candidate_slot_count()],
        }
    }

    /// The board geometry.
    #[must_use]
    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    /// The givens, one value per cell, `0` for blank.
    #[must_use]
    pub fn puzzle(&self) -> &[u8] {
        &self.puzzle
    }

    /// The solution built so far, `0` for unplaced cells.
    #[must_use]
    pub fn solution(&self) -> &[u8] {
        &self.solution
    }

    /// The given at a cell.
    #[must_use]
    pub fn puzzle_cell(&self, cell: usize) -> u8 {
        self.puzzle[cell]
    }

    /// Overwrites a single given. Takes effect at the next reset.
    pub fn set_puzzle_cell(&mut self, cell: usize, value: u8) {
        self.puzzle[cell] = value;
    }

    /// Replaces all givens.
    ///
    /// # Panics
    ///
    /// Panics if `givens.len()` does not match the shape's cell count.
    pub fn set_givens(&mut self, givens: &[u8]) {
        assert_eq!(givens.len(), self.shape.cell_count(), "cell count mismatch");
        self.puzzle.copy_from_slice(givens);
    }

    /// Copies the current solution into the givens.
    pub fn adopt_solution_as_puzzle(&mut self) {
        self.puzzle.copy_from_slice(&self.solution);
    }

    /// Number of nonzero givens.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.puzzle.iter().filter(|&&v| v != 0).count()
    }

    /// Clears the solution, placement rounds, and possibility table.
    ///
    /// The givens are kept; re-applying them is the caller's job (the
    /// solver does it as part of its reset, tagging them as round 1).
    pub fn clear_solution(&mut self) {
        self.solution.fill(0);
        self.placed_round.fill(0);
        self.eliminated.fill(0);
    }

    /// The round a cell's value was placed at, `0` if unplaced.
    #[must_use]
    pub fn placed_round(&self, cell: usize) -> u32 {
        self.placed_round[cell]
    }

    /// Whether the candidate (zero-based value index) is still live at a cell.
    #[must_use]
    pub fn is_candidate(&self, cell: usize, value_index: usize) -> bool {
        self.eliminated[self.shape.candidate_slot(value_index, cell)] == 0
    }

    /// Number of live candidates at a cell.
    #[must_use]
    pub fn candidate_count(&self, cell: usize) -> usize {
        (0..self.shape.side())
            .filter(|&value_index| self.is_candidate(cell, value_index))
            .count()
    }

    /// Whether two cells have exactly the same live candidates.
    #[must_use]
    pub fn candidates_match(&self, a: usize, b: usize) -> bool {
        (0..self.shape.side())
            .all(|value_index| self.is_candidate(a, value_index) == self.is_candidate(b, value_index))
    }

    /// Eliminates a candidate at this round.
    ///
    /// Returns `true` if the candidate was live (a real state change). An
    /// already-eliminated candidate keeps its original round so rollbacks
    /// attribute each elimination to the earliest round that caused it.
    pub fn eliminate(&mut self, cell: usize, value_index: usize, round: u32) -> bool {
        let slot = self.shape.candidate_slot(value_index, cell);
        if self.eliminated[slot] == 0 {
            self.eliminated[slot] = round;
            true
        } else {
            false
        }
    }

    /// Places a value and propagates the elimination through the cell's
    /// row, column, and section, plus the cell's own other candidates.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] if the cell is already placed, already
    /// has a placement round, or the candidate slot is already eliminated.
    /// Each of these means the engine itself misbehaved; the board is left
    /// untouched.
    pub fn place(&mut self, cell: usize, round: u32, value: u8) -> Result<(), InvariantError> {
        if self.solution[cell] != 0 {
            return Err(InvariantError::CellAlreadyPlaced { cell });
        }
        if self.placed_round[cell] != 0 {
            return Err(InvariantError::RoundAlreadySet { cell });
        }
        let value_index = usize::from(value) - 1;
        if !self.is_candidate(cell, value_index) {
            return Err(InvariantError::CandidateEliminated { cell, value });
        }

        self.solution[cell] = value;
        self.placed_round[cell] = round;

        let side = self.shape.side();
        let row_start = self.shape.row_first_cell(self.shape.row_of(cell));
        for column in 0..side {
            self.eliminate(row_start + column, value_index, round);
        }
        let column_start = self.shape.column_first_cell(self.shape.column_of(cell));
        for row in 0..side {
            self.eliminate(column_start + row * side, value_index, round);
        }
        let section = self.shape.section_of(cell);
        for offset in 0..side {
            self.eliminate(self.shape.section_cell(section, offset), value_index, round);
        }
        for other_index in 0..side {
            self.eliminate(cell, other_index, round);
        }
        Ok(())
    }

    /// Reverts every placement and elimination tagged with exactly this
    /// round.
    ///
    /// Rounds must be unwound newest-first; rolling back an inner round
    /// while a later one is still applied would leave the later round's
    /// eliminations attributed to state that no longer exists.
    pub fn rollback(&mut self, round: u32) {
        for cell in 0..self.shape.cell_count() {
            if self.placed_round[cell] == round {
                self.placed_round[cell] = 0;
                self.solution[cell] = 0;
            }
        }
        for slot in &mut self.eliminated {
            if *slot == round {
                *slot = 0;
            }
        }
    }

    /// Whether every cell has a placed value.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.iter().all(|&v| v != 0)
    }

    /// Whether some unplaced cell has no live candidates left.
    #[must_use]
    pub fn is_impossible(&self) -> bool {
        (0..self.shape.cell_count())
            .any(|cell| self.solution[cell] == 0 && self.candidate_count(cell) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(BoardShape::GRID_9X9)
    }

    #[test]
    fn test_new_board_all_candidates_live() {
        let board = board();
        for cell in 0..81 {
            assert_eq!(board.candidate_count(cell), 9);
        }
        assert!(!board.is_solved());
        assert!(!board.is_impossible());
    }

    #[test]
    fn test_place_eliminates_peers() {
        let mut board = board();
        board.place(0, 2, 5).unwrap();

        // Value index 4 (value 5) dead in row 0, column 0, and section 0.
        assert!(!board.is_candidate(1, 4));
        assert!(!board.is_candidate(9, 4));
        assert!(!board.is_candidate(10, 4));
        // Unrelated cell untouched.
        assert!(board.is_candidate(80, 4));
        // The placed cell has no live candidates at all.
        assert_eq!(board.candidate_count(0), 0);
        assert_eq!(board.placed_round(0), 2);
    }

    #[test]
    fn test_place_rejects_placed_cell() {
        let mut board = board();
        board.place(0, 2, 5).unwrap();
        assert_eq!(
            board.place(0, 4, 6),
            Err(InvariantError::CellAlreadyPlaced { cell: 0 })
        );
    }

    #[test]
    fn test_place_rejects_eliminated_candidate() {
        let mut board = board();
        board.place(0, 2, 5).unwrap();
        assert_eq!(
            board.place(1, 2, 5),
            Err(InvariantError::CandidateEliminated { cell: 1, value: 5 })
        );
    }

    #[test]
    fn test_rollback_restores_exactly_one_round() {
        let mut board = board();
        board.place(0, 2, 5).unwrap();
        board.place(1, 4, 6).unwrap();

        board.rollback(4);
        assert_eq!(board.solution()[1], 0);
        assert_eq!(board.placed_round(1), 0);
        assert!(board.is_candidate(2, 5));
        // Round 2 state survives.
        assert_eq!(board.solution()[0], 5);
        assert!(!board.is_candidate(1, 4));
    }

    #[test]
    fn test_earliest_round_attribution_survives_rollback() {
        let mut board = board();
        board.place(0, 2, 5).unwrap();
        // Same elimination again at a later round must not re-tag it.
        board.place(20, 4, 5).unwrap();
        board.rollback(4);
        // Cell 2 shares row 0 with cell 0: elimination from round 2 stays.
        assert!(!board.is_candidate(2, 4));
    }

    #[test]
    fn test_placement_invariant() {
        let mut board = board();
        board.place(40, 2, 7).unwrap();
        for cell in 0..81 {
            assert_eq!(
                board.solution()[cell] != 0,
                board.placed_round(cell) != 0,
                "solution and placement round must agree at cell {cell}"
            );
        }
    }

    #[test]
    fn test_is_impossible_detects_dead_cell() {
        let mut board = board();
        for value_index in 0..9 {
            board.eliminate(40, value_index, 2);
        }
        assert!(board.is_impossible());
    }

    #[test]
    fn test_candidates_match() {
        let mut board = board();
        for value_index in 2..9 {
            board.eliminate(0, value_index, 2);
            board.eliminate(1, value_index, 2);
        }
        assert!(board.candidates_match(0, 1));
        board.eliminate(1, 0, 2);
        assert!(!board.candidates_match(0, 1));
    }

    #[test]
    fn test_works_on_6x6_sections() {
        let mut board = Board::new(BoardShape::GRID_6X6);
        board.place(0, 2, 3).unwrap();
        // Section of cell 0 covers rows 0-1, columns 0-2.
        assert!(!board.is_candidate(8, 2));
        // Row 2 cell in the same column is eliminated via the column.
        assert!(!board.is_candidate(12, 2));
        // Different column and section: still live.
        assert!(board.is_candidate(15, 2));
    }
}
