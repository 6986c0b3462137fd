//! Placeholder synthesis for the "no content yet" state.
//!
//! Runs the same tokenize → style → coalesce pipeline over a caller-supplied
//! placeholder string, but with no highlighter involved: every non-newline
//! cell gets the one fixed muted style. The rendering side therefore never
//! has to display a zero-size empty layout.

use crate::{Snapshot, runs::coalesce};
use core_highlight::DEFAULT_LANGUAGE;
use core_style::theme::muted_style;

/// The canonical placeholder document.
pub const PLACEHOLDER_TEXT: &str = "Type code...";

/// Synthesize the canonical placeholder snapshot for a language, defaulting
/// to the registry's default language when none is given (or when the given
/// name is empty, as an absent wire field decodes to).
pub fn placeholder(text: &str, language: Option<&str>) -> Snapshot {
    let language = match language {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_LANGUAGE,
    };
    let mut grid = core_grid::tokenize(text);
    let muted = muted_style();
    for cell in &mut grid.cells {
        if cell.ch != '\n' {
            cell.style = muted.clone();
        }
    }
    let runs = coalesce(&grid);
    Snapshot::build(&grid, runs, text, language)
}
