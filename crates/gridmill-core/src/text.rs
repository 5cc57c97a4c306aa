//! Board text interchange.
//!
//! Boards are printed and parsed in three styles: [`PrintStyle::Readable`]
//! (one symbol per cell with section box separators), [`PrintStyle::OneLine`]
//! (all cells concatenated), and [`PrintStyle::Csv`] (one-line with a
//! trailing comma, for embedding in CSV rows). Values above 9 use letters
//! (`A` = 10, `B` = 11, `C` = 12) so a 12x12 cell is still one character.
//! Blanks print as `.`; the parser also accepts `0` and `_` and skips any
//! box decoration, so every style round-trips losslessly.

use derive_more::{Display, Error};

use crate::BoardShape;

/// Output style for [`board_to_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintStyle {
    /// One row per line with `|` and `-` separators between sections.
    #[default]
    Readable,
    /// All cells on a single line.
    OneLine,
    /// Like [`OneLine`](Self::OneLine) with a trailing comma.
    Csv,
}

/// Error returned by [`parse_board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character was neither a cell symbol nor decoration.
    #[display("unrecognized board symbol {symbol:?}")]
    BadSymbol {
        /// The offending character.
        symbol: char,
    },
    /// A symbol decoded to a value larger than the board side.
    #[display("value {value} out of range for side {side}")]
    ValueOutOfRange {
        /// The decoded value.
        value: u8,
        /// The board side length.
        side: u8,
    },
    /// The text did not contain exactly one symbol per cell.
    #[display("expected {expected} cells, found {found}")]
    WrongCellCount {
        /// Cells required by the shape.
        expected: usize,
        /// Cell symbols found in the text.
        found: usize,
    },
}

fn cell_symbol(value: u8) -> char {
    match value {
        0 => '.',
        1..=9 => char::from(b'0' + value),
        v => char::from(b'A' + v - 10),
    }
}

fn symbol_value(symbol: char) -> Option<u8> {
    match symbol {
        '.' | '_' | '0' => Some(0),
        '1'..='9' => Some(symbol as u8 - b'0'),
        'A'..='Z' => Some(symbol as u8 - b'A' + 10),
        'a'..='z' => Some(symbol as u8 - b'a' + 10),
        _ => None,
    }
}

fn is_decoration(symbol: char) -> bool {
    symbol.is_whitespace() || matches!(symbol, '|' | '-' | '+' | ',')
}

/// Renders a board as text in the given style.
///
/// `cells` must hold one value per cell, `0` meaning blank.
///
/// # Panics
///
/// Panics if `cells.len()` does not match `shape.cell_count()`.
///
/// # Examples
///
/// ```
/// use gridmill_core::{BoardShape, PrintStyle, text};
///
/// let shape = BoardShape::GRID_6X6;
/// let cells = vec![0; shape.cell_count()];
/// let line = text::board_to_string(shape, &cells, PrintStyle::OneLine);
/// assert_eq!(line, ".".repeat(36));
/// ```
#[must_use]
pub fn board_to_string(shape: BoardShape, cells: &[u8], style: PrintStyle) -> String {
    assert_eq!(cells.len(), shape.cell_count(), "cell count mismatch");
    match style {
        PrintStyle::Readable => readable_to_string(shape, cells),
        PrintStyle::OneLine => cells.iter().map(|&v| cell_symbol(v)).collect(),
        PrintStyle::Csv => {
            let mut out: String = cells.iter().map(|&v| cell_symbol(v)).collect();
            out.push(',');
            out
        }
    }
}

fn readable_to_string(shape: BoardShape, cells: &[u8]) -> String {
    let side = shape.side();
    let section_width = shape.section_width();
    let section_height = shape.section_height();
    let band_separator = {
        let block = "-".repeat(2 * section_width + 1);
        vec![block; side / section_width].join("|")
    };

    let mut out = String::new();
    for row in 0..side {
        for column in 0..side {
            out.push(' ');
            out.push(cell_symbol(cells[shape.cell_at(row, column)]));
            if column % section_width == section_width - 1 && column != side - 1 {
                out.push_str(" |");
            }
        }
        out.push('\n');
        if row % section_height == section_height - 1 && row != side - 1 {
            out.push_str(&band_separator);
            out.push('\n');
        }
    }
    out
}

/// Parses a board from text produced in any of the three styles.
///
/// Whitespace and box decoration (`|`, `-`, `+`, `,`) are ignored; `.`,
/// `_`, and `0` all mean blank; letters are accepted in either case.
///
/// # Errors
///
/// Returns [`ParseBoardError`] if the text contains an unknown symbol, a
/// value above the board side, or the wrong number of cells.
pub fn parse_board(shape: BoardShape, text: &str) -> Result<Vec<u8>, ParseBoardError> {
    let side = u8::try_from(shape.side()).expect("side fits in u8");
    let mut cells = Vec::with_capacity(shape.cell_count());
    for symbol in text.chars() {
        if is_decoration(symbol) {
            continue;
        }
        let value = symbol_value(symbol).ok_or(ParseBoardError::BadSymbol { symbol })?;
        if value > side {
            return Err(ParseBoardError::ValueOutOfRange { value, side });
        }
        cells.push(value);
    }
    if cells.len() != shape.cell_count() {
        return Err(ParseBoardError::WrongCellCount {
            expected: shape.cell_count(),
            found: cells.len(),
        });
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_readable_9x9_layout() {
        let shape = BoardShape::GRID_9X9;
        let mut cells = vec![0; shape.cell_count()];
        cells[0] = 5;
        cells[1] = 3;
        cells[4] = 7;
        let text = board_to_string(shape, &cells, PrintStyle::Readable);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(" 5 3 . | . 7 . | . . ."));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[3], "-------|-------|-------");
        assert_eq!(lines[7], "-------|-------|-------");
    }

    #[test]
    fn test_readable_6x6_separator_width() {
        let shape = BoardShape::GRID_6X6;
        let cells = vec![0; shape.cell_count()];
        let text = board_to_string(shape, &cells, PrintStyle::Readable);
        // 2x3 sections: two 7-dash blocks, bands after every 2 rows.
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[2], "-------|-------");
        assert_eq!(lines[5], "-------|-------");
    }

    #[test]
    fn test_csv_has_trailing_comma() {
        let shape = BoardShape::GRID_6X6;
        let cells = vec![0; shape.cell_count()];
        let text = board_to_string(shape, &cells, PrintStyle::Csv);
        assert!(text.ends_with(','));
        assert_eq!(text.len(), shape.cell_count() + 1);
    }

    #[test]
    fn test_values_above_nine_use_letters() {
        let shape = BoardShape::GRID_12X12;
        let mut cells = vec![0; shape.cell_count()];
        cells[0] = 10;
        cells[1] = 11;
        cells[2] = 12;
        let text = board_to_string(shape, &cells, PrintStyle::OneLine);
        assert!(text.starts_with("ABC"));
        assert_eq!(parse_board(shape, &text).unwrap(), cells);
    }

    #[test]
    fn test_parse_accepts_underscore_and_zero() {
        let shape = BoardShape::GRID_6X6;
        let text = "_0.".repeat(12);
        assert_eq!(parse_board(shape, &text).unwrap(), vec![0; 36]);
    }

    #[test]
    fn test_parse_rejects_bad_symbol() {
        let shape = BoardShape::GRID_9X9;
        let text = "?".repeat(81);
        assert!(matches!(
            parse_board(shape, &text),
            Err(ParseBoardError::BadSymbol { symbol: '?' })
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_value() {
        let shape = BoardShape::GRID_6X6;
        let mut text = ".".repeat(35);
        text.push('7');
        assert!(matches!(
            parse_board(shape, &text),
            Err(ParseBoardError::ValueOutOfRange { value: 7, side: 6 })
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        let shape = BoardShape::GRID_9X9;
        assert!(matches!(
            parse_board(shape, "123"),
            Err(ParseBoardError::WrongCellCount {
                expected: 81,
                found: 3
            })
        ));
    }

    fn shape_and_cells() -> impl Strategy<Value = (BoardShape, Vec<u8>)> {
        prop_oneof![
            Just(BoardShape::GRID_6X6),
            Just(BoardShape::GRID_9X9),
            Just(BoardShape::GRID_12X12),
        ]
        .prop_flat_map(|shape| {
            let side = u8::try_from(shape.side()).unwrap();
            prop::collection::vec(0..=side, shape.cell_count())
                .prop_map(move |cells| (shape, cells))
        })
    }

    proptest! {
        #[test]
        fn prop_round_trip_all_styles((shape, cells) in shape_and_cells()) {
            for style in [PrintStyle::Readable, PrintStyle::OneLine, PrintStyle::Csv] {
                let text = board_to_string(shape, &cells, style);
                prop_assert_eq!(parse_board(shape, &text).unwrap(), cells.clone());
            }
        }
    }
}
