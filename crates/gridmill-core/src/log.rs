//! Solve-log vocabulary.
//!
//! Every deduction, guess, and rollback performed while solving is recorded
//! as a [`LogEntry`]. The log serves two purposes: the difficulty classifier
//! counts entries by [`TechniqueKind`], and applications can render entries
//! with [`LogEntry::describe`] to show the user how a puzzle was solved.

use crate::BoardShape;

/// The kind of solving step a log entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechniqueKind {
    /// A starting given was applied.
    Given,
    /// A cell had only one live candidate.
    NakedSingle,
    /// A value had only one live cell in its row.
    HiddenSingleRow,
    /// A value had only one live cell in its column.
    HiddenSingleColumn,
    /// A value had only one live cell in its section.
    HiddenSingleSection,
    /// A guess opened a new search round.
    Guess,
    /// A search round was rolled back.
    Rollback,
    /// Naked pair eliminated candidates along a row.
    NakedPairRow,
    /// Naked pair eliminated candidates along a column.
    NakedPairColumn,
    /// Naked pair eliminated candidates within a section.
    NakedPairSection,
    /// Candidate confined to one row of a section; eliminated from the rest
    /// of that row.
    PointingPairRow,
    /// Candidate confined to one column of a section; eliminated from the
    /// rest of that column.
    PointingPairColumn,
    /// Candidate confined to one section of a row; eliminated from the rest
    /// of that section.
    RowBoxReduction,
    /// Candidate confined to one section of a column; eliminated from the
    /// rest of that section.
    ColumnBoxReduction,
    /// Hidden pair stripped other candidates from two cells of a row.
    HiddenPairRow,
    /// Hidden pair stripped other candidates from two cells of a column.
    HiddenPairColumn,
    /// Hidden pair stripped other candidates from two cells of a section.
    HiddenPairSection,
}

impl TechniqueKind {
    /// Human-readable description of the step.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Given => "Mark given",
            Self::NakedSingle => "Mark only possibility for cell",
            Self::HiddenSingleRow => "Mark single possibility for value in row",
            Self::HiddenSingleColumn => "Mark single possibility for value in column",
            Self::HiddenSingleSection => "Mark single possibility for value in section",
            Self::Guess => "Mark guess (start round)",
            Self::Rollback => "Roll back round",
            Self::NakedPairRow => "Remove possibilities for naked pair in row",
            Self::NakedPairColumn => "Remove possibilities for naked pair in column",
            Self::NakedPairSection => "Remove possibilities for naked pair in section",
            Self::PointingPairRow => {
                "Remove possibilities for row because all values are in one section"
            }
            Self::PointingPairColumn => {
                "Remove possibilities for column because all values are in one section"
            }
            Self::RowBoxReduction => {
                "Remove possibilities for section because all values are in one row"
            }
            Self::ColumnBoxReduction => {
                "Remove possibilities for section because all values are in one column"
            }
            Self::HiddenPairRow => "Remove possibilities from hidden pair in row",
            Self::HiddenPairColumn => "Remove possibilities from hidden pair in column",
            Self::HiddenPairSection => "Remove possibilities from hidden pair in section",
        }
    }
}

/// One recorded solving step.
///
/// Entries are tagged with the search round they happened at so they can be
/// trimmed when a round is rolled back. Rollback entries carry neither a
/// value nor a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    round: u32,
    kind: TechniqueKind,
    value: Option<u8>,
    position: Option<usize>,
}

impl LogEntry {
    /// Creates an entry with a value and board position.
    #[must_use]
    pub const fn new(round: u32, kind: TechniqueKind, value: u8, position: usize) -> Self {
        Self {
            round,
            kind,
            value: Some(value),
            position: Some(position),
        }
    }

    /// Creates an entry with a position but no single value (naked pairs
    /// eliminate two values at once).
    #[must_use]
    pub const fn positional(round: u32, kind: TechniqueKind, position: usize) -> Self {
        Self {
            round,
            kind,
            value: None,
            position: Some(position),
        }
    }

    /// Creates an entry without a value or position (rollbacks).
    #[must_use]
    pub const fn bare(round: u32, kind: TechniqueKind) -> Self {
        Self {
            round,
            kind,
            value: None,
            position: None,
        }
    }

    /// Search round the step happened at.
    #[must_use]
    pub const fn round(self) -> u32 {
        self.round
    }

    /// What kind of step this was.
    #[must_use]
    pub const fn kind(self) -> TechniqueKind {
        self.kind
    }

    /// Value placed or eliminated, if the step concerns one.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        self.value
    }

    /// Board cell the step refers to, if any.
    #[must_use]
    pub const fn position(self) -> Option<usize> {
        self.position
    }

    /// Zero-based row of the position, if any.
    #[must_use]
    pub fn row(self, shape: BoardShape) -> Option<usize> {
        self.position.map(|p| shape.row_of(p))
    }

    /// Zero-based column of the position, if any.
    #[must_use]
    pub fn column(self, shape: BoardShape) -> Option<usize> {
        self.position.map(|p| shape.column_of(p))
    }

    /// Renders the entry for display, with 1-indexed rows and columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridmill_core::{BoardShape, LogEntry, TechniqueKind};
    ///
    /// let entry = LogEntry::new(2, TechniqueKind::HiddenSingleRow, 9, 8);
    /// assert_eq!(
    ///     entry.describe(BoardShape::GRID_9X9),
    ///     "Round: 2 - Mark single possibility for value in row \
    ///      (Row: 1 - Column: 9 - Value: 9)",
    /// );
    /// ```
    #[must_use]
    pub fn describe(self, shape: BoardShape) -> String {
        let mut out = format!("Round: {} - {}", self.round, self.kind.description());
        if self.value.is_some() || self.position.is_some() {
            out.push_str(" (");
            if let Some(position) = self.position {
                out.push_str(&format!(
                    "Row: {} - Column: {}",
                    shape.row_of(position) + 1,
                    shape.column_of(position) + 1
                ));
            }
            if let Some(value) = self.value {
                if self.position.is_some() {
                    out.push_str(" - ");
                }
                out.push_str(&format!("Value: {value}"));
            }
            out.push(')');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_full_entry() {
        let entry = LogEntry::new(4, TechniqueKind::NakedSingle, 5, 40);
        assert_eq!(
            entry.describe(BoardShape::GRID_9X9),
            "Round: 4 - Mark only possibility for cell (Row: 5 - Column: 5 - Value: 5)"
        );
    }

    #[test]
    fn test_describe_bare_entry() {
        let entry = LogEntry::bare(3, TechniqueKind::Rollback);
        assert_eq!(
            entry.describe(BoardShape::GRID_9X9),
            "Round: 3 - Roll back round"
        );
    }

    #[test]
    fn test_row_column_use_shape() {
        let entry = LogEntry::new(2, TechniqueKind::Given, 1, 7);
        assert_eq!(entry.row(BoardShape::GRID_6X6), Some(1));
        assert_eq!(entry.column(BoardShape::GRID_6X6), Some(1));
        assert_eq!(entry.row(BoardShape::GRID_9X9), Some(0));
        assert_eq!(entry.column(BoardShape::GRID_9X9), Some(7));
    }
}
