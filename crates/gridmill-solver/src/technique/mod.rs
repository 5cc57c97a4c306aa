//! The deduction technique battery.
//!
//! Each technique scans the board and either places a value or eliminates
//! candidates, returning as soon as it makes a single unit of progress. The
//! solver runs them in a fixed order, cheapest first, restarting from the top
//! after every hit, so the recorded log always attributes a deduction to the
//! simplest technique that could have found it. The difficulty grades depend
//! on that attribution; do not reorder the battery.
//!
//! Placing techniques ([`naked_single`], [`hidden_single`]) can surface an
//! [`InvariantError`](crate::InvariantError) if the board state is corrupt;
//! pure elimination techniques only ever clear candidate slots and return a
//! plain progress flag.

pub mod box_line;
pub mod hidden_pair;
pub mod hidden_single;
pub mod naked_pair;
pub mod naked_single;
pub mod pointing;

// Sides fit in u8 by construction, so a value index always does too.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn value_at(value_index: usize) -> u8 {
    value_index as u8 + 1
}
