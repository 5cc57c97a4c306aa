//! Technique statistics and difficulty grading.
//!
//! Grading reads the instruction log of a recorded solve: a puzzle is as
//! hard as the most advanced technique (or guesswork) the solve needed, with
//! per-shape thresholds deciding how many singles push a puzzle from
//! trivial to Easy or Moderate.

use gridmill_core::{BoardShape, Difficulty, TechniqueKind};

use crate::Journal;

/// How often each technique class appeared in a solve.
///
/// Counts come from the instruction log (the successful branch), except for
/// `backtracks`, which counts rollbacks in the full history: a lucky guess
/// leaves no trace in the instructions, an unlucky one only in the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TechniqueCounts {
    /// Starting givens applied.
    pub givens: usize,
    /// Naked singles placed.
    pub naked_singles: usize,
    /// Hidden singles placed, all house kinds combined.
    pub hidden_singles: usize,
    /// Naked pair eliminations, all house kinds combined.
    pub naked_pairs: usize,
    /// Hidden pair eliminations, all house kinds combined.
    pub hidden_pairs: usize,
    /// Pointing pair/triple eliminations, both directions.
    pub pointing_pairs: usize,
    /// Box/line reductions, both directions.
    pub box_line_reductions: usize,
    /// Guesses on the successful branch.
    pub guesses: usize,
    /// Rounds rolled back anywhere in the search.
    pub backtracks: usize,
}

impl TechniqueCounts {
    /// Tallies a recorded solve.
    #[must_use]
    pub fn from_journal(journal: &Journal) -> Self {
        Self {
            givens: journal.count(TechniqueKind::Given),
            naked_singles: journal.count(TechniqueKind::NakedSingle),
            hidden_singles: journal.count(TechniqueKind::HiddenSingleRow)
                + journal.count(TechniqueKind::HiddenSingleColumn)
                + journal.count(TechniqueKind::HiddenSingleSection),
            naked_pairs: journal.count(TechniqueKind::NakedPairRow)
                + journal.count(TechniqueKind::NakedPairColumn)
                + journal.count(TechniqueKind::NakedPairSection),
            hidden_pairs: journal.count(TechniqueKind::HiddenPairRow)
                + journal.count(TechniqueKind::HiddenPairColumn)
                + journal.count(TechniqueKind::HiddenPairSection),
            pointing_pairs: journal.count(TechniqueKind::PointingPairRow)
                + journal.count(TechniqueKind::PointingPairColumn),
            box_line_reductions: journal.count(TechniqueKind::RowBoxReduction)
                + journal.count(TechniqueKind::ColumnBoxReduction),
            guesses: journal.count(TechniqueKind::Guess),
            backtracks: journal.history_count(TechniqueKind::Rollback),
        }
    }
}

/// Hidden single counts above this grade a puzzle Moderate.
fn hidden_single_threshold(shape: BoardShape) -> usize {
    match shape.side() {
        6 => 0,
        12 => 20,
        _ => 10,
    }
}

/// Naked single counts above this grade a puzzle Easy.
fn naked_single_threshold(shape: BoardShape) -> usize {
    match shape.side() {
        6 => 10,
        9 => 35,
        12 => 50,
        _ => 20,
    }
}

/// Grades a solve by the hardest technique it needed.
#[must_use]
pub fn grade(shape: BoardShape, counts: &TechniqueCounts) -> Difficulty {
    if counts.guesses > 0 {
        return Difficulty::Challenge;
    }
    if counts.box_line_reductions > 0 || counts.pointing_pairs > 0 {
        return Difficulty::Hard;
    }
    if counts.hidden_pairs > 0 || counts.naked_pairs > 0 {
        return Difficulty::Moderate;
    }
    if counts.hidden_singles > hidden_single_threshold(shape) {
        return Difficulty::Moderate;
    }
    if counts.naked_singles > naked_single_threshold(shape) {
        return Difficulty::Easy;
    }
    Difficulty::Unspecified
}
