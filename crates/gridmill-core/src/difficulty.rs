//! Puzzle difficulty grading scale.

use derive_more::Display;

/// Difficulty of a puzzle, ordered from easiest to hardest.
///
/// The first six variants form an ordered scale used by the classifier in
/// `gridmill-solver`: `Unspecified < Simple < Easy < Moderate < Hard <
/// Challenge`. [`Custom`](Self::Custom) tags user-authored puzzles and takes
/// no part in grading; it sorts after the scale only so the enum can derive
/// a total order.
///
/// # Examples
///
/// ```
/// use gridmill_core::Difficulty;
///
/// assert!(Difficulty::Easy < Difficulty::Hard);
/// assert_eq!(Difficulty::Moderate.to_string(), "Moderate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
pub enum Difficulty {
    /// No grade assigned (also: "accept any" in generation requests).
    #[default]
    Unspecified,
    /// Trivial puzzles, below the Easy thresholds.
    Simple,
    /// Solvable with many naked singles.
    Easy,
    /// Requires hidden singles or pair reductions.
    Moderate,
    /// Requires pointing pair/triple or box/line reductions.
    Hard,
    /// Requires guessing.
    Challenge,
    /// User-authored puzzle; not produced by the classifier.
    Custom,
}

impl Difficulty {
    /// All graded difficulties, easiest first. Excludes [`Custom`](Self::Custom).
    pub const SCALE: [Self; 6] = [
        Self::Unspecified,
        Self::Simple,
        Self::Easy,
        Self::Moderate,
        Self::Hard,
        Self::Challenge,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_sorted() {
        let mut sorted = Difficulty::SCALE;
        sorted.sort_unstable();
        assert_eq!(sorted, Difficulty::SCALE);
    }

    #[test]
    fn test_default_is_unspecified() {
        assert_eq!(Difficulty::default(), Difficulty::Unspecified);
    }
}
