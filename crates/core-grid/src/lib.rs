//! Character grid tokenizer.
//!
//! Converts a raw document string into the per-character cell grid the rest
//! of the pipeline styles and coalesces. Tokenization is a total function:
//! every string is valid input and no error paths exist.
//!
//! Invariants:
//! * One cell per `char`, newlines included; newline cells occupy a position
//!   but are never emitted as visible runs downstream.
//! * A newline advances `row` and resets `col` without touching the width
//!   tracker; any other character is placed at `(row, col)`, then `col`
//!   advances and `width = max(width, col)` (post-increment measurement).
//! * `height` is the final row index + 1, so empty input yields
//!   `(width 0, height 1)` and a trailing newline contributes a final empty
//!   row. The trailing-newline accounting is canonical, not accidental.

use core_style::Style;

/// One character's position, text, and resolved style within the grid.
/// Ephemeral: built during a single synthesis pass and discarded after
/// coalescing, never transmitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Absolute character offset in the document.
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub ch: char,
    pub style: Style,
}

/// The tokenized document: ordered cells plus measured dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub cells: Vec<Cell>,
    /// Max column count across all rows, in character cells.
    pub width: usize,
    /// Row count; at least 1 even for empty text.
    pub height: usize,
}

/// Tokenize a document into its cell grid. All cells start unstyled.
pub fn tokenize(text: &str) -> Grid {
    let mut cells = Vec::with_capacity(text.len());
    let mut row = 0usize;
    let mut col = 0usize;
    let mut width = 0usize;

    for (index, ch) in text.chars().enumerate() {
        cells.push(Cell {
            index,
            row,
            col,
            ch,
            style: Style::unset(),
        });
        if ch == '\n' {
            row += 1;
            col = 0;
        } else {
            col += 1;
            width = width.max(col);
        }
    }

    Grid {
        cells,
        width,
        height: row + 1,
    }
}
