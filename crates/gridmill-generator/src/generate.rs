//! Single-puzzle generation by randomized digging.

use gridmill_core::{BoardShape, Difficulty, Symmetry};
use gridmill_solver::{Solver, SolverError};
use rand::{Rng as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

// Offsets the dig RNG stream from the solver's when both derive from one
// seed.
const DIG_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// Puzzle generator owning a solver and its own dig RNG.
///
/// Generation is a two-phase process:
///
/// 1. **fill**: solve an empty board; the solver's shuffled guess orders
///    turn the search into a uniform-ish random grid filler.
/// 2. **dig**: adopt the solution as givens, then visit the cells in a
///    shuffled order, removing each given (plus its symmetry partners) and
///    keeping the removal only if the puzzle still has a unique solution.
///
/// The result is locally minimal: no single given (or symmetric group of
/// givens) can be removed without losing uniqueness. It is not globally
/// minimal, because removals are greedy in visit order.
///
/// Each generator owns all of its state. Nothing is shared between
/// instances, so one generator per worker thread is safe by construction.
#[derive(Debug, Clone)]
pub struct Generator {
    solver: Solver,
    dig_order: Vec<usize>,
    rng: Pcg64Mcg,
}

impl Generator {
    /// Creates a generator seeded from the thread-local RNG.
    #[must_use]
    pub fn new(shape: BoardShape) -> Self {
        Self {
            solver: Solver::new(shape),
            dig_order: (0..shape.cell_count()).collect(),
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a deterministically seeded generator.
    ///
    /// The solver's search and the dig order both derive from `seed`, so
    /// equal seeds produce equal puzzles.
    #[must_use]
    pub fn with_seed(shape: BoardShape, seed: u64) -> Self {
        Self {
            solver: Solver::with_seed(shape, seed),
            dig_order: (0..shape.cell_count()).collect(),
            rng: Pcg64Mcg::seed_from_u64(seed ^ DIG_STREAM),
        }
    }

    /// The board geometry.
    #[must_use]
    pub fn shape(&self) -> BoardShape {
        self.solver.shape()
    }

    /// The solver this generator drives.
    #[must_use]
    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    /// Mutable access to the solver, for re-solving a generated puzzle.
    pub fn solver_mut(&mut self) -> &mut Solver {
        &mut self.solver
    }

    /// Generates one puzzle with a unique solution.
    ///
    /// `Symmetry::Random` picks one of the concrete symmetries first; with
    /// `Symmetry::None`, deduced cells are rolled back after the fill so
    /// digging starts from the guessed cells only. History recording is
    /// suspended for the whole run and restored afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Invariant`] if the engine corrupted its own
    /// state mid-generation.
    pub fn generate(&mut self, symmetry: Symmetry) -> Result<Vec<u8>, SolverError> {
        let symmetry = self.resolve_symmetry(symmetry);
        let record = self.solver.journal().records();
        let echo = self.solver.journal().echoes();
        self.solver.set_record_history(false);
        self.solver.set_echo_history(false);
        let result = self.generate_inner(symmetry);
        self.solver.set_record_history(record);
        self.solver.set_echo_history(echo);
        result
    }

    fn generate_inner(&mut self, symmetry: Symmetry) -> Result<Vec<u8>, SolverError> {
        self.fill()?;
        if symmetry == Symmetry::None {
            self.solver.rollback_non_guesses();
        }
        self.solver.adopt_solution_as_puzzle();
        // Uniqueness checks during the dig should explore the board in an
        // order unrelated to the one the fill placed cells in.
        self.solver.shuffle_search_order();
        self.dig(symmetry)?;
        // Leave the board holding just the applied givens.
        self.solver.reset()?;
        Ok(self.solver.puzzle().to_vec())
    }

    /// Fills the board with a random complete solution.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Invariant`] if the engine corrupted its own
    /// state; an empty board always has solutions.
    pub fn fill(&mut self) -> Result<(), SolverError> {
        self.solver.clear_puzzle()?;
        self.solver.solve()?;
        Ok(())
    }

    /// Digs givens out of the current puzzle while uniqueness holds.
    ///
    /// Visits every cell once in a freshly shuffled order. For each still
    /// present given, the cell and its symmetry partners are blanked; if the
    /// reduced puzzle admits a second solution the whole group is restored.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Invariant`] if the engine corrupted its own
    /// state mid-dig.
    pub fn dig(&mut self, symmetry: Symmetry) -> Result<(), SolverError> {
        let shape = self.shape();
        self.dig_order.shuffle(&mut self.rng);
        for i in 0..shape.cell_count() {
            let cell = self.dig_order[i];
            let saved = self.solver.puzzle_cell(cell);
            if saved == 0 {
                continue;
            }
            let partners = symmetry.partners(shape, cell);
            let saved_partners: Vec<u8> = partners
                .iter()
                .map(|&partner| self.solver.puzzle_cell(partner))
                .collect();
            self.solver.set_puzzle_cell(cell, 0);
            for &partner in &partners {
                self.solver.set_puzzle_cell(partner, 0);
            }
            if self.solver.count_solutions_limited()? > 1 {
                // The group is load-bearing; put it back.
                self.solver.set_puzzle_cell(cell, saved);
                for (&partner, &value) in partners.iter().zip(&saved_partners) {
                    if value != 0 {
                        self.solver.set_puzzle_cell(partner, value);
                    }
                }
            }
        }
        Ok(())
    }

    /// Re-solves the current puzzle with recording on and grades it.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Invariant`] if the engine corrupted its own
    /// state; a generated puzzle is always solvable.
    pub fn grade(&mut self) -> Result<Difficulty, SolverError> {
        self.solver.set_record_history(true);
        self.solver.solve()?;
        Ok(self.solver.difficulty())
    }

    fn resolve_symmetry(&mut self, symmetry: Symmetry) -> Symmetry {
        if symmetry == Symmetry::Random {
            Symmetry::CONCRETE[self.rng.random_range(0..Symmetry::CONCRETE.len())]
        } else {
            symmetry
        }
    }
}
