//! Highlighter capability interface, language registry, and span overlay.
//!
//! The synthesis pipeline treats highlighting as a black box: anything that
//! can produce labeled character ranges over a text implements `Highlighter`.
//! Two concrete engines ship here (tree-sitter backed, and a no-op for plain
//! text); the registry maps stable language names to factories so a host can
//! enumerate and switch engines at runtime.
//!
//! Span offsets are absolute **character** offsets, half-open `[start, end)`.
//! Concrete engines are responsible for converting whatever unit they work in
//! (tree-sitter reports bytes) before spans leave this crate.

pub mod engine;
pub mod languages;

pub use engine::{PlainTextHighlighter, TreeSitterHighlighter};
pub use languages::{DEFAULT_LANGUAGE, Language, LanguageError, languages, lookup};

use core_grid::Grid;
use core_style::StyleResolver;

/// A highlighter-produced half-open character range tagged with an opaque
/// style label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl Span {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }
}

/// Capability interface: produce labeled spans over a text.
///
/// Engines may keep internal parse state, hence `&mut self`; each call must
/// still describe the full text from scratch (the pipeline is stateless per
/// synthesis).
pub trait Highlighter {
    fn produce_spans(&mut self, text: &str) -> Vec<Span>;
}

/// Overlay spans onto the grid, resolving each label through the session's
/// style resolver. Spans apply in the order provided; later spans overwrite
/// earlier ones on overlapping offsets (last-write-wins). Offsets beyond the
/// cell count are clamped.
pub fn apply_spans(grid: &mut Grid, spans: &[Span], resolver: &mut StyleResolver) {
    let len = grid.cells.len();
    for span in spans {
        let start = span.start.min(len);
        let end = span.end.min(len);
        if start >= end {
            continue;
        }
        let style = resolver.resolve(&span.label);
        for cell in &mut grid.cells[start..end] {
            cell.style = style.clone();
        }
    }
}
