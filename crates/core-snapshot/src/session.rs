//! Editor-side synthesis session.
//!
//! Owns the active language entry, its highlighter engine, and the session's
//! style resolver. One `synthesize` call runs the whole per-edit pipeline
//! (highlight → tokenize → overlay → coalesce → assemble) synchronously;
//! there is no incremental state between calls beyond the style cache.
//! Switching language builds a fresh engine **and** a fresh resolver, since
//! the cache stability contract is scoped to one highlighter configuration.

use crate::{Snapshot, runs::coalesce};
use core_highlight::{Language, LanguageError, apply_spans, lookup};
use core_style::{StyleResolver, Theme};
use tracing::debug;

pub struct EditorSession {
    language: &'static Language,
    highlighter: Box<dyn core_highlight::Highlighter + Send>,
    resolver: StyleResolver,
    theme: Theme,
}

impl EditorSession {
    pub fn new(language_name: &str, theme: Theme) -> Result<Self, LanguageError> {
        let language = lookup(language_name)?;
        Ok(Self {
            language,
            highlighter: language.highlighter(),
            resolver: StyleResolver::new(theme.clone()),
            theme,
        })
    }

    pub fn language(&self) -> &'static str {
        self.language.name
    }

    /// Switch the active language: fresh engine, fresh style cache. The
    /// caller is expected to re-synthesize the current document immediately.
    pub fn set_language(&mut self, name: &str) -> Result<(), LanguageError> {
        let language = lookup(name)?;
        self.language = language;
        self.highlighter = language.highlighter();
        self.resolver = StyleResolver::new(self.theme.clone());
        debug!(target: "synth.session", language = language.name, "language_switched");
        Ok(())
    }

    /// Run the full synthesis pipeline over the current document text.
    pub fn synthesize(&mut self, text: &str) -> Snapshot {
        let spans = self.highlighter.produce_spans(text);
        let mut grid = core_grid::tokenize(text);
        apply_spans(&mut grid, &spans, &mut self.resolver);
        let runs = coalesce(&grid);
        debug!(
            target: "synth.session",
            language = self.language.name,
            chars = grid.cells.len(),
            width = grid.width,
            height = grid.height,
            run_count = runs.len(),
            "snapshot_synthesized"
        );
        Snapshot::build(&grid, runs, text, self.language.name)
    }
}
