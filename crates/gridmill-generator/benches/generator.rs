//! Benchmarks for puzzle generation and solving.
//!
//! # Benchmarks
//!
//! - **`generate_none`**: full fill-and-dig generation without symmetry.
//! - **`generate_rotate180`**: generation with 180-degree symmetric digging,
//!   which removes givens in pairs and needs fewer uniqueness checks.
//! - **`solve_generated`**: re-solving a freshly generated puzzle with
//!   history recording on, the same work grading does.
//!
//! Fixed seeds keep the runs reproducible while covering several puzzles.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use gridmill_core::{BoardShape, Symmetry};
use gridmill_generator::Generator;
use gridmill_solver::Solver;

const SEEDS: [u64; 3] = [0x5eed_0001, 0x5eed_0002, 0x5eed_0003];

fn bench_generate(c: &mut Criterion, name: &str, symmetry: Symmetry) {
    for seed in SEEDS {
        c.bench_with_input(BenchmarkId::new(name, format!("seed_{seed:x}")), &seed, |b, &seed| {
            b.iter_batched(
                || Generator::with_seed(BoardShape::GRID_9X9, hint::black_box(seed)),
                |mut generator| generator.generate(symmetry).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_generate_none(c: &mut Criterion) {
    bench_generate(c, "generate_none", Symmetry::None);
}

fn bench_generate_rotate180(c: &mut Criterion) {
    bench_generate(c, "generate_rotate180", Symmetry::Rotate180);
}

fn bench_solve_generated(c: &mut Criterion) {
    for seed in SEEDS {
        let mut generator = Generator::with_seed(BoardShape::GRID_9X9, seed);
        let puzzle = generator.generate(Symmetry::None).unwrap();
        c.bench_with_input(
            BenchmarkId::new("solve_generated", format!("seed_{seed:x}")),
            &puzzle,
            |b, puzzle| {
                b.iter_batched(
                    || {
                        let mut solver = Solver::with_seed(BoardShape::GRID_9X9, seed);
                        solver.set_puzzle(hint::black_box(puzzle)).unwrap();
                        solver
                    },
                    |mut solver| solver.solve().unwrap(),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generate_none,
        bench_generate_rotate180,
        bench_solve_generated
);
criterion_main!(benches);
