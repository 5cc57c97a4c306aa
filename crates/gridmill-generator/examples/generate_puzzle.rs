//! Example demonstrating puzzle generation from the command line.
//!
//! This example shows how to:
//! - Build a `GenerationRequest` and run a batch through `Controller`
//! - Filter puzzles by difficulty and dig with a symmetry
//! - Solve the generated puzzles back and show the grading
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Ask for several puzzles of a given difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 3 --difficulty easy
//! ```
//!
//! Dig with 180-degree symmetry on a 6x6 board:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --shape 6x6 --symmetry rotate180
//! ```
//!
//! Generate deterministically from a seed (9x9 only):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 12345
//! ```
//!
//! Set `RUST_LOG=debug` to watch the workers accept and reject puzzles.

use std::process;

use clap::{Parser, ValueEnum};
use gridmill_core::{BoardShape, Difficulty, PrintStyle, Symmetry, text};
use gridmill_generator::{Controller, GenerationRequest};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShapeArg {
    #[value(name = "6x6")]
    Grid6x6,
    #[value(name = "9x9")]
    Grid9x9,
    #[value(name = "12x12")]
    Grid12x12,
}

impl From<ShapeArg> for BoardShape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Grid6x6 => Self::GRID_6X6,
            ShapeArg::Grid9x9 => Self::GRID_9X9,
            ShapeArg::Grid12x12 => Self::GRID_12X12,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Any,
    Easy,
    Moderate,
    Hard,
    Challenge,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Any => Self::Unspecified,
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Moderate => Self::Moderate,
            DifficultyArg::Hard => Self::Hard,
            DifficultyArg::Challenge => Self::Challenge,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SymmetryArg {
    None,
    Rotate90,
    Rotate180,
    Mirror,
    Flip,
    Random,
}

impl From<SymmetryArg> for Symmetry {
    fn from(arg: SymmetryArg) -> Self {
        match arg {
            SymmetryArg::None => Self::None,
            SymmetryArg::Rotate90 => Self::Rotate90,
            SymmetryArg::Rotate180 => Self::Rotate180,
            SymmetryArg::Mirror => Self::Mirror,
            SymmetryArg::Flip => Self::Flip,
            SymmetryArg::Random => Self::Random,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board shape to generate for.
    #[arg(long, value_name = "SHAPE", default_value = "9x9")]
    shape: ShapeArg,

    /// Required difficulty of the generated puzzles.
    #[arg(long, value_name = "DIFFICULTY", default_value = "any")]
    difficulty: DifficultyArg,

    /// Symmetry of the dug givens.
    #[arg(long, value_name = "SYMMETRY", default_value = "none")]
    symmetry: SymmetryArg,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Worker threads (0 = all available cores).
    #[arg(long, value_name = "WORKERS", default_value_t = 0)]
    workers: usize,

    /// Generate one 9x9 puzzle deterministically from this seed instead of
    /// running a batch.
    #[arg(long, value_name = "SEED", conflicts_with_all = ["shape", "count"])]
    seed: Option<u64>,

    /// Also print each puzzle's solution.
    #[arg(long)]
    print_solution: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let (shape, puzzles) = if let Some(seed) = args.seed {
        match Controller::generate_from_seed(seed, 1.0, 1) {
            Ok((puzzle, difficulty)) => {
                println!("Seed {seed} produced a {difficulty} puzzle");
                (BoardShape::GRID_9X9, vec![puzzle])
            }
            Err(err) => {
                eprintln!("generation failed: {err}");
                process::exit(1);
            }
        }
    } else {
        let request = GenerationRequest {
            difficulty: args.difficulty.into(),
            symmetry: args.symmetry.into(),
            count: args.count,
            workers: args.workers,
            ..GenerationRequest::new(args.shape.into())
        };
        let puzzles = Controller::generate_multiple(&request);
        if puzzles.len() < args.count {
            eprintln!(
                "attempt budget exhausted: produced {} of {} puzzles",
                puzzles.len(),
                args.count
            );
        }
        (request.shape, puzzles)
    };

    for (i, puzzle) in puzzles.iter().enumerate() {
        println!("\nPuzzle {}:", i + 1);
        println!("{}", text::board_to_string(shape, puzzle, PrintStyle::Readable));
        match Controller::solve(shape, puzzle) {
            Ok(outcome) => {
                println!("Difficulty: {}", outcome.difficulty);
                if args.print_solution {
                    println!("Solution:");
                    println!(
                        "{}",
                        text::board_to_string(shape, &outcome.solution, PrintStyle::Readable)
                    );
                }
            }
            Err(err) => {
                eprintln!("solving the generated puzzle failed: {err}");
                process::exit(1);
            }
        }
    }
}
