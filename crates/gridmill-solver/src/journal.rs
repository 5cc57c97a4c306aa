//! Solve-log recording.

use gridmill_core::{BoardShape, LogEntry, TechniqueKind};

/// Recorder for solving steps.
///
/// Keeps two parallel logs, as the difficulty statistics need one and
/// "show working" needs the other:
///
/// - **history**: every step taken, including guesses that were later
///   rolled back
/// - **instructions**: only the steps that ended up on the successful
///   branch; rolling back a round trims its trailing entries
///
/// Recording can be switched off wholesale (generation and uniqueness
/// passes do this for speed and to keep technique statistics clean), and
/// entries can additionally be echoed through the [`log`] crate for
/// debugging.
#[derive(Debug, Clone)]
pub struct Journal {
    shape: BoardShape,
    history: Vec<LogEntry>,
    instructions: Vec<LogEntry>,
    record: bool,
    echo: bool,
}

impl Journal {
    /// Creates an empty journal with recording on and echoing off.
    #[must_use]
    pub fn new(shape: BoardShape) -> Self {
        Self {
            shape,
            history: Vec::new(),
            instructions: Vec::new(),
            record: true,
            echo: false,
        }
    }

    /// Whether steps are being recorded.
    #[must_use]
    pub fn records(&self) -> bool {
        self.record
    }

    /// Enables or disables recording.
    pub fn set_record(&mut self, record: bool) {
        self.record = record;
    }

    /// Whether steps are echoed through [`log::debug!`].
    #[must_use]
    pub fn echoes(&self) -> bool {
        self.echo
    }

    /// Enables or disables echoing.
    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    /// Every recorded step, including rolled-back branches.
    #[must_use]
    pub fn history(&self) -> &[LogEntry] {
        &self.history
    }

    /// The steps on the successful branch only.
    #[must_use]
    pub fn instructions(&self) -> &[LogEntry] {
        &self.instructions
    }

    /// Discards all recorded steps.
    pub fn clear(&mut self) {
        self.history.clear();
        self.instructions.clear();
    }

    /// Records one step.
    pub fn add(&mut self, entry: LogEntry) {
        if self.echo {
            log::debug!("{}", entry.describe(self.shape));
        }
        if self.record {
            self.history.push(entry);
            self.instructions.push(entry);
        }
    }

    /// Records a rollback and trims the instructions for that round.
    ///
    /// The rollback marker itself stays in the history but never in the
    /// instructions, so instruction counts reflect only useful work.
    pub fn rollback(&mut self, round: u32) {
        if self.echo {
            log::trace!("rolling back round {round}");
        }
        if self.record {
            self.history.push(LogEntry::bare(round, TechniqueKind::Rollback));
        }
        while self
            .instructions
            .last()
            .is_some_and(|entry| entry.round() == round)
        {
            self.instructions.pop();
        }
    }

    /// Number of instruction entries of the given kind.
    #[must_use]
    pub fn count(&self, kind: TechniqueKind) -> usize {
        self.instructions
            .iter()
            .filter(|entry| entry.kind() == kind)
            .count()
    }

    /// Number of history entries of the given kind (includes dead branches).
    #[must_use]
    pub fn history_count(&self, kind: TechniqueKind) -> usize {
        self.history
            .iter()
            .filter(|entry| entry.kind() == kind)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal() -> Journal {
        Journal::new(BoardShape::GRID_9X9)
    }

    #[test]
    fn test_add_records_both_logs() {
        let mut journal = journal();
        journal.add(LogEntry::new(2, TechniqueKind::NakedSingle, 5, 0));
        assert_eq!(journal.history().len(), 1);
        assert_eq!(journal.instructions().len(), 1);
    }

    #[test]
    fn test_recording_disabled_drops_entries() {
        let mut journal = journal();
        journal.set_record(false);
        journal.add(LogEntry::new(2, TechniqueKind::NakedSingle, 5, 0));
        assert!(journal.history().is_empty());
        assert!(journal.instructions().is_empty());
    }

    #[test]
    fn test_rollback_trims_trailing_round() {
        let mut journal = journal();
        journal.add(LogEntry::new(2, TechniqueKind::NakedSingle, 5, 0));
        journal.add(LogEntry::new(3, TechniqueKind::Guess, 1, 10));
        journal.add(LogEntry::new(3, TechniqueKind::Guess, 2, 11));
        journal.rollback(3);

        assert_eq!(journal.instructions().len(), 1);
        assert_eq!(journal.instructions()[0].round(), 2);
        // History keeps the dead branch plus the rollback marker.
        assert_eq!(journal.history().len(), 4);
        assert_eq!(journal.history_count(TechniqueKind::Rollback), 1);
        assert_eq!(journal.count(TechniqueKind::Rollback), 0);
    }

    #[test]
    fn test_rollback_does_not_trim_earlier_rounds() {
        let mut journal = journal();
        journal.add(LogEntry::new(2, TechniqueKind::NakedSingle, 5, 0));
        journal.rollback(4);
        assert_eq!(journal.instructions().len(), 1);
    }
}
