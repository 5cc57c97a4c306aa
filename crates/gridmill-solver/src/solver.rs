//! Backtracking search driver.

use gridmill_core::{BoardShape, Difficulty, LogEntry, TechniqueKind};
use rand::SeedableRng as _;
use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64Mcg;

use crate::difficulty::{self, TechniqueCounts};
use crate::technique::{box_line, hidden_pair, hidden_single, naked_pair, naked_single, pointing};
use crate::{Board, ContradictionError, InvariantError, Journal, SolverError};

/// Sudoku solver and solution counter.
///
/// Solving alternates deduction rounds with guess rounds. Starting from
/// round 2, the full technique battery is applied until it stalls; if the
/// board is neither solved nor dead, a guess opens round `r + 1` and
/// deduction resumes at round `r + 2`. Deduction rounds are therefore always
/// even and guess rounds always odd, which is what lets
/// [`rollback_non_guesses`](Self::rollback_non_guesses) strip deduced cells
/// while keeping guessed ones.
///
/// Guess targets and guess values are tried in per-solver shuffled orders,
/// so two solvers seeded differently explore different solutions of an
/// under-constrained board. The shuffle orders and the RNG are owned by the
/// solver; no state is shared between instances.
#[derive(Debug, Clone)]
pub struct Solver {
    board: Board,
    journal: Journal,
    cell_order: Vec<usize>,
    value_order: Vec<usize>,
    rng: Pcg64Mcg,
    last_solve_round: u32,
}

impl Solver {
    /// Creates a solver seeded from the thread-local RNG.
    #[must_use]
    pub fn new(shape: BoardShape) -> Self {
        Self::with_rng(shape, Pcg64Mcg::from_rng(&mut rand::rng()))
    }

    /// Creates a deterministically seeded solver.
    #[must_use]
    pub fn with_seed(shape: BoardShape, seed: u64) -> Self {
        Self::with_rng(shape, Pcg64Mcg::seed_from_u64(seed))
    }

    fn with_rng(shape: BoardShape, rng: Pcg64Mcg) -> Self {
        Self {
            board: Board::new(shape),
            journal: Journal::new(shape),
            cell_order: (0..shape.cell_count()).collect(),
            value_order: (0..shape.side()).collect(),
            rng,
            last_solve_round: 0,
        }
    }

    /// Replaces the RNG with a deterministically seeded one.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = Pcg64Mcg::seed_from_u64(seed);
    }

    /// The board geometry.
    #[must_use]
    pub fn shape(&self) -> BoardShape {
        self.board.shape()
    }

    /// The current givens.
    #[must_use]
    pub fn puzzle(&self) -> &[u8] {
        self.board.puzzle()
    }

    /// The solution worked out so far, `0` for unplaced cells.
    #[must_use]
    pub fn solution(&self) -> &[u8] {
        self.board.solution()
    }

    /// Number of nonzero givens.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.board.given_count()
    }

    /// Overwrites one given. Takes effect at the next reset or solve.
    pub fn set_puzzle_cell(&mut self, cell: usize, value: u8) {
        self.board.set_puzzle_cell(cell, value);
    }

    /// The given at a cell.
    #[must_use]
    pub fn puzzle_cell(&self, cell: usize) -> u8 {
        self.board.puzzle_cell(cell)
    }

    /// Adopts the current solution as the puzzle's givens.
    pub fn adopt_solution_as_puzzle(&mut self) {
        self.board.adopt_solution_as_puzzle();
    }

    /// Sets the givens and applies them.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if two givens conflict.
    ///
    /// # Panics
    ///
    /// Panics if `givens.len()` does not match the shape's cell count.
    pub fn set_puzzle(&mut self, givens: &[u8]) -> Result<(), SolverError> {
        self.board.set_givens(givens);
        self.reset()
    }

    /// Blanks out the puzzle and all solving state.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Invariant`] if the board state is corrupt; an
    /// empty board cannot contradict itself.
    pub fn clear_puzzle(&mut self) -> Result<(), SolverError> {
        self.board.set_givens(&vec![0; self.shape().cell_count()]);
        self.reset()
    }

    /// Clears all solving state and re-applies the givens as round 1.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if a given lands on a candidate
    /// slot another given has already eliminated.
    pub fn reset(&mut self) -> Result<(), SolverError> {
        self.board.clear_solution();
        self.journal.clear();
        for cell in 0..self.shape().cell_count() {
            let value = self.board.puzzle_cell(cell);
            if value == 0 {
                continue;
            }
            let value_index = usize::from(value) - 1;
            if !self.board.is_candidate(cell, value_index) {
                return Err(ContradictionError { cell, value }.into());
            }
            self.board.place(cell, 1, value)?;
            self.journal
                .add(LogEntry::new(1, TechniqueKind::Given, value, cell));
        }
        Ok(())
    }

    /// Reshuffles the orders in which guess cells and guess values are tried.
    pub fn shuffle_search_order(&mut self) {
        self.cell_order.shuffle(&mut self.rng);
        self.value_order.shuffle(&mut self.rng);
    }

    /// Solves the puzzle, returning whether a solution was found.
    ///
    /// Resets first, so repeated calls are independent (though the shuffled
    /// search order makes them explore an under-constrained board
    /// differently each time).
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Invariant`] if the engine corrupted its own
    /// state. Contradictory givens are not an error here: the puzzle simply
    /// has no solution, and the result is `Ok(false)`.
    pub fn solve(&mut self) -> Result<bool, SolverError> {
        match self.reset() {
            Err(SolverError::Contradiction(_)) => return Ok(false),
            other => other?,
        }
        self.shuffle_search_order();
        Ok(self.solve_round(2)?)
    }

    fn solve_round(&mut self, round: u32) -> Result<bool, InvariantError> {
        self.last_solve_round = round;
        while self.deduce(round)? {
            if self.board.is_solved() {
                return Ok(true);
            }
            if self.board.is_impossible() {
                return Ok(false);
            }
        }
        let guess_round = round + 1;
        let next_round = round + 2;
        let mut guess_number = 0;
        while self.guess(guess_round, guess_number)? {
            if self.board.is_impossible() || !self.solve_round(next_round)? {
                self.rollback_round(next_round);
                self.rollback_round(guess_round);
            } else {
                return Ok(true);
            }
            guess_number += 1;
        }
        Ok(false)
    }

    /// Counts all solutions of the current puzzle.
    ///
    /// Recording is suspended while counting, and any previously recorded
    /// log is discarded by the internal reset.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Invariant`] if the engine corrupted its own
    /// state. Contradictory givens yield `Ok(0)`.
    pub fn count_solutions(&mut self) -> Result<usize, SolverError> {
        self.count_solutions_with_limit(false)
    }

    /// Counts solutions but stops at two.
    ///
    /// Much faster than [`count_solutions`](Self::count_solutions) on
    /// under-constrained boards; use it when only zero/one/many matters.
    ///
    /// # Errors
    ///
    /// Same as [`count_solutions`](Self::count_solutions).
    pub fn count_solutions_limited(&mut self) -> Result<usize, SolverError> {
        self.count_solutions_with_limit(true)
    }

    /// Whether the current puzzle has exactly one solution.
    ///
    /// # Errors
    ///
    /// Same as [`count_solutions`](Self::count_solutions).
    pub fn has_unique_solution(&mut self) -> Result<bool, SolverError> {
        Ok(self.count_solutions_limited()? == 1)
    }

    fn count_solutions_with_limit(&mut self, limit_to_two: bool) -> Result<usize, SolverError> {
        let record = self.journal.records();
        let echo = self.journal.echoes();
        self.journal.set_record(false);
        self.journal.set_echo(false);
        let count = self.count_solutions_inner(limit_to_two);
        self.journal.set_record(record);
        self.journal.set_echo(echo);
        count
    }

    fn count_solutions_inner(&mut self, limit_to_two: bool) -> Result<usize, SolverError> {
        match self.reset() {
            Err(SolverError::Contradiction(_)) => return Ok(0),
            other => other?,
        }
        Ok(self.count_round(2, limit_to_two)?)
    }

    fn count_round(&mut self, round: u32, limit_to_two: bool) -> Result<usize, InvariantError> {
        while self.deduce(round)? {
            if self.board.is_solved() {
                self.rollback_round(round);
                return Ok(1);
            }
            if self.board.is_impossible() {
                self.rollback_round(round);
                return Ok(0);
            }
        }
        let mut solutions = 0;
        let next_round = round + 1;
        let mut guess_number = 0;
        while self.guess(next_round, guess_number)? {
            solutions += self.count_round(next_round, limit_to_two)?;
            if limit_to_two && solutions >= 2 {
                self.rollback_round(round);
                return Ok(solutions);
            }
            guess_number += 1;
        }
        self.rollback_round(round);
        Ok(solutions)
    }

    /// Applies the technique battery once, cheapest technique first.
    ///
    /// The order is load-bearing: the grading rules assume each deduction is
    /// credited to the simplest technique able to make it.
    fn deduce(&mut self, round: u32) -> Result<bool, InvariantError> {
        if naked_single::apply(&mut self.board, round, &mut self.journal)? {
            return Ok(true);
        }
        if hidden_single::in_section(&mut self.board, round, &mut self.journal)? {
            return Ok(true);
        }
        if hidden_single::in_row(&mut self.board, round, &mut self.journal)? {
            return Ok(true);
        }
        if hidden_single::in_column(&mut self.board, round, &mut self.journal)? {
            return Ok(true);
        }
        if naked_pair::apply(&mut self.board, round, &mut self.journal) {
            return Ok(true);
        }
        if pointing::row(&mut self.board, round, &mut self.journal) {
            return Ok(true);
        }
        if pointing::column(&mut self.board, round, &mut self.journal) {
            return Ok(true);
        }
        if box_line::row(&mut self.board, round, &mut self.journal) {
            return Ok(true);
        }
        if box_line::column(&mut self.board, round, &mut self.journal) {
            return Ok(true);
        }
        if hidden_pair::in_row(&mut self.board, round, &mut self.journal) {
            return Ok(true);
        }
        if hidden_pair::in_column(&mut self.board, round, &mut self.journal) {
            return Ok(true);
        }
        Ok(hidden_pair::in_section(
            &mut self.board,
            round,
            &mut self.journal,
        ))
    }

    /// Guesses the `guess_number`-th untried value at the most constrained
    /// open cell.
    fn guess(&mut self, round: u32, guess_number: usize) -> Result<bool, InvariantError> {
        let Some(cell) = self.fewest_candidate_cell() else {
            return Ok(false);
        };
        let mut local_guess = 0;
        for i in 0..self.shape().side() {
            let value_index = self.value_order[i];
            if !self.board.is_candidate(cell, value_index) {
                continue;
            }
            if local_guess == guess_number {
                let value = crate::technique::value_at(value_index);
                self.journal
                    .add(LogEntry::new(round, TechniqueKind::Guess, value, cell));
                self.board.place(cell, round, value)?;
                return Ok(true);
            }
            local_guess += 1;
        }
        Ok(false)
    }

    /// The open cell with the fewest live candidates, ties broken by the
    /// shuffled cell order.
    fn fewest_candidate_cell(&self) -> Option<usize> {
        let mut best = None;
        let mut best_count = self.shape().side() + 1;
        for &cell in &self.cell_order {
            if self.board.solution()[cell] != 0 {
                continue;
            }
            let count = self.board.candidate_count(cell);
            if count < best_count {
                best_count = count;
                best = Some(cell);
            }
        }
        best
    }

    fn rollback_round(&mut self, round: u32) {
        self.journal.rollback(round);
        self.board.rollback(round);
    }

    /// Rolls back every deduction round of the last solve, keeping only the
    /// givens and the guessed cells.
    ///
    /// Used by generation without symmetry: deduced cells are redundant with
    /// the cells they were deduced from, so a puzzle seeded from guesses
    /// alone starts much sparser.
    pub fn rollback_non_guesses(&mut self) {
        for round in (2..=self.last_solve_round).step_by(2) {
            self.rollback_round(round);
        }
    }

    /// Whether every cell of the solution is filled.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Enables or disables recording of solve steps.
    pub fn set_record_history(&mut self, record: bool) {
        self.journal.set_record(record);
    }

    /// Enables or disables echoing of solve steps through [`log`].
    pub fn set_echo_history(&mut self, echo: bool) {
        self.journal.set_echo(echo);
    }

    /// The recorded solve journal.
    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Steps on the successful solve branch, or an empty slice if the last
    /// solve failed.
    #[must_use]
    pub fn instructions(&self) -> &[LogEntry] {
        if self.is_solved() {
            self.journal.instructions()
        } else {
            &[]
        }
    }

    /// Every recorded step, dead branches included.
    #[must_use]
    pub fn history(&self) -> &[LogEntry] {
        self.journal.history()
    }

    /// Technique-usage statistics for the last recorded solve.
    #[must_use]
    pub fn technique_counts(&self) -> TechniqueCounts {
        TechniqueCounts::from_journal(&self.journal)
    }

    /// Grades the last recorded solve.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        difficulty::grade(self.shape(), &self.technique_counts())
    }
}
