//! Batch generation on a pool of worker threads.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use gridmill_core::{BoardShape, Difficulty, LogEntry, Symmetry};
use gridmill_solver::{Solver, SolverError};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::Generator;

/// Attempts allowed per requested puzzle before a batch gives up.
///
/// Only relevant when a difficulty filter rejects most candidates; without a
/// filter every attempt is accepted.
const ATTEMPTS_PER_PUZZLE: usize = 400;

/// Parameters for one generation batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Board geometry to generate for.
    pub shape: BoardShape,
    /// Required difficulty; `Unspecified` accepts everything.
    pub difficulty: Difficulty,
    /// Symmetry of the dug givens.
    pub symmetry: Symmetry,
    /// Number of puzzles wanted.
    pub count: usize,
    /// Worker threads; `0` means available hardware parallelism.
    pub workers: usize,
}

impl GenerationRequest {
    /// A request for one puzzle of any difficulty, no symmetry, using all
    /// available parallelism.
    #[must_use]
    pub fn new(shape: BoardShape) -> Self {
        Self {
            shape,
            difficulty: Difficulty::Unspecified,
            symmetry: Symmetry::None,
            count: 1,
            workers: 0,
        }
    }

    fn effective_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        thread::available_parallelism().map_or(1, std::num::NonZero::get)
    }
}

/// Result of solving a caller-supplied puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// A solution of the puzzle (one of them, if several exist).
    pub solution: Vec<u8>,
    /// `0`, `1`, or `2`; `2` stands for "two or more".
    pub solution_count: usize,
    /// The solve steps on the successful branch, givens included.
    pub instructions: Vec<LogEntry>,
    /// Grading of the recorded solve.
    pub difficulty: Difficulty,
}

/// Front end for generating and solving puzzles.
///
/// Batches run on plain OS threads, one [`Generator`] per worker. Workers
/// share nothing but the result sink, two counters, and a done flag; every
/// board, journal, and RNG is thread-local, which is what makes concurrent
/// generation sound.
#[derive(Debug)]
pub struct Controller;

impl Controller {
    /// Generates one puzzle of the requested difficulty.
    ///
    /// Returns `None` if the attempt budget ran out before a matching puzzle
    /// appeared, which can happen for difficulty/shape combinations the
    /// digger rarely produces.
    #[must_use]
    pub fn generate(shape: BoardShape, difficulty: Difficulty) -> Option<Vec<u8>> {
        let request = GenerationRequest {
            difficulty,
            ..GenerationRequest::new(shape)
        };
        Self::generate_multiple(&request).pop()
    }

    /// Generates a batch of puzzles, blocking until the batch is complete or
    /// the attempt budget is exhausted.
    ///
    /// Returns at most `request.count` puzzles; fewer only if the budget ran
    /// out. A worker midway through an attempt when the target is reached
    /// finishes that attempt and drops the overshoot.
    #[must_use]
    pub fn generate_multiple(request: &GenerationRequest) -> Vec<Vec<u8>> {
        let workers = request.effective_workers();
        let shared = BatchState {
            sink: Mutex::new(Vec::with_capacity(request.count)),
            accepted: AtomicUsize::new(0),
            attempted: AtomicUsize::new(0),
            done: AtomicBool::new(false),
            attempt_limit: request.count.saturating_mul(ATTEMPTS_PER_PUZZLE),
        };

        thread::scope(|scope| {
            for worker in 0..workers {
                let shared = &shared;
                scope.spawn(move || worker_loop(worker, request, shared));
            }
        });

        let mut puzzles = shared
            .sink
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        puzzles.truncate(request.count);
        puzzles
    }

    /// Generates a 9×9 puzzle deterministically from a seed, steering away
    /// from guess-requiring puzzles.
    ///
    /// The seed doubles on each retry. A puzzle graded `Challenge` is
    /// rejected with probability `1 - challenge_permission` until
    /// `challenge_iterations` rejections have happened, after which the next
    /// result is accepted no matter what. With `challenge_permission` of
    /// `1.0` the first puzzle is always accepted, making the output a pure
    /// function of the seed.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Invariant`] if the engine corrupted its own
    /// state.
    pub fn generate_from_seed(
        seed: u64,
        challenge_permission: f64,
        challenge_iterations: u32,
    ) -> Result<(Vec<u8>, Difficulty), SolverError> {
        let mut accept_rng = Pcg64Mcg::seed_from_u64(seed);
        let mut seed = seed;
        let mut remaining = challenge_iterations;
        loop {
            seed = seed.wrapping_mul(2);
            let mut generator = Generator::with_seed(BoardShape::GRID_9X9, seed);
            let puzzle = generator.generate(Symmetry::None)?;
            let difficulty = generator.grade()?;
            let accept = difficulty != Difficulty::Challenge
                || accept_rng.random::<f64>() < challenge_permission
                || remaining <= 1;
            if accept {
                return Ok((puzzle, difficulty));
            }
            log::debug!("rejected Challenge puzzle for seed {seed}, retrying");
            remaining -= 1;
        }
    }

    /// Solves a caller-supplied puzzle and reports on it.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if two givens conflict, and
    /// [`SolverError::Invariant`] if the engine corrupted its own state.
    ///
    /// # Panics
    ///
    /// Panics if `givens.len()` does not match the shape's cell count.
    pub fn solve(shape: BoardShape, givens: &[u8]) -> Result<SolveOutcome, SolverError> {
        let mut solver = Solver::new(shape);
        solver.set_puzzle(givens)?;
        let solution_count = solver.count_solutions_limited()?;
        solver.solve()?;
        Ok(SolveOutcome {
            solution: solver.solution().to_vec(),
            solution_count,
            instructions: solver.instructions().to_vec(),
            difficulty: solver.difficulty(),
        })
    }
}

/// State shared by the workers of one batch.
///
/// This is the only cross-thread state in a batch: puzzles land in the
/// locked sink, and the counters/flag coordinate shutdown. Solver state
/// never crosses a thread boundary.
struct BatchState {
    sink: Mutex<Vec<Vec<u8>>>,
    accepted: AtomicUsize,
    attempted: AtomicUsize,
    done: AtomicBool,
    attempt_limit: usize,
}

/// One worker's generate/filter/submit loop.
///
/// The `done` flag is only checked between whole attempts; an in-flight dig
/// runs to completion, so the batch can briefly overshoot its target.
fn worker_loop(worker: usize, request: &GenerationRequest, shared: &BatchState) {
    let mut generator = Generator::new(request.shape);
    while !shared.done.load(Ordering::SeqCst) {
        let puzzle = match generator.generate(request.symmetry) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                log::error!("worker {worker}: generation attempt failed: {err}");
                return;
            }
        };
        if shared.attempted.fetch_add(1, Ordering::SeqCst) + 1 >= shared.attempt_limit {
            shared.signal_done();
        }

        if request.difficulty != Difficulty::Unspecified {
            let graded = match generator.grade() {
                Ok(graded) => graded,
                Err(err) => {
                    log::error!("worker {worker}: grading failed: {err}");
                    return;
                }
            };
            if graded != request.difficulty {
                log::trace!(
                    "worker {worker}: discarding {graded} puzzle, want {}",
                    request.difficulty
                );
                if shared.accepted.load(Ordering::SeqCst) >= request.count {
                    shared.signal_done();
                }
                continue;
            }
        }

        let number_done = shared.accepted.fetch_add(1, Ordering::SeqCst) + 1;
        if number_done >= request.count {
            shared.signal_done();
        }
        if number_done > request.count {
            // Overshoot past the target; drop it.
            continue;
        }
        log::debug!(
            "worker {worker}: accepted puzzle {number_done}/{}",
            request.count
        );
        shared
            .sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(puzzle);
    }
}

impl BatchState {
    fn signal_done(&self) {
        self.done.store(true, Ordering::SeqCst);
    }
}
