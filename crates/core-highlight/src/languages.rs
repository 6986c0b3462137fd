//! Static, ordered language registry.
//!
//! Each entry pairs a stable display name with a factory building a fresh
//! highlighter engine. Declaration order is presentation order (the host's
//! language picker lists entries as written here). Lookup is a linear scan
//! over the small fixed set; the registry never mutates at runtime.

use crate::Highlighter;
use crate::engine::{PlainTextHighlighter, TreeSitterHighlighter};
use tracing::error;

/// Name of the language used whenever none is specified: the first entry.
pub const DEFAULT_LANGUAGE: &str = "Rust";

/// Registry entry: unique stable name plus a highlighter factory.
#[derive(Debug)]
pub struct Language {
    pub name: &'static str,
    factory: fn() -> Box<dyn Highlighter + Send>,
}

impl Language {
    /// Build a fresh highlighter engine for this language.
    ///
    /// A grammar/query packaging mismatch degrades to plain text with an
    /// error log instead of failing the session.
    pub fn highlighter(&self) -> Box<dyn Highlighter + Send> {
        (self.factory)()
    }
}

fn rust_factory() -> Box<dyn Highlighter + Send> {
    match TreeSitterHighlighter::new(
        tree_sitter_rust::LANGUAGE.into(),
        tree_sitter_rust::HIGHLIGHTS_QUERY,
    ) {
        Some(engine) => Box::new(engine),
        None => {
            error!(target: "highlight.registry", language = "Rust", "engine_unavailable");
            Box::new(PlainTextHighlighter)
        }
    }
}

fn markdown_factory() -> Box<dyn Highlighter + Send> {
    match TreeSitterHighlighter::new(
        tree_sitter_md::LANGUAGE.into(),
        tree_sitter_md::HIGHLIGHT_QUERY_BLOCK,
    ) {
        Some(engine) => Box::new(engine),
        None => {
            error!(target: "highlight.registry", language = "Markdown", "engine_unavailable");
            Box::new(PlainTextHighlighter)
        }
    }
}

fn plain_factory() -> Box<dyn Highlighter + Send> {
    Box::new(PlainTextHighlighter)
}

static LANGUAGES: &[Language] = &[
    Language {
        name: "Rust",
        factory: rust_factory,
    },
    Language {
        name: "Markdown",
        factory: markdown_factory,
    },
    Language {
        name: "Plain Text",
        factory: plain_factory,
    },
];

/// The full ordered registry.
pub fn languages() -> &'static [Language] {
    LANGUAGES
}

#[derive(Debug, thiserror::Error)]
pub enum LanguageError {
    /// The bootstrap contract guarantees names match a registry entry, so an
    /// unknown name is a configuration error, not a runtime condition.
    #[error("unknown language {0:?}")]
    Unknown(String),
}

/// Look up a registry entry by its stable name.
pub fn lookup(name: &str) -> Result<&'static Language, LanguageError> {
    LANGUAGES
        .iter()
        .find(|l| l.name == name)
        .ok_or_else(|| LanguageError::Unknown(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_stable() {
        let names: Vec<&str> = languages().iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Rust", "Markdown", "Plain Text"]);
    }

    #[test]
    fn default_language_is_first_entry() {
        assert_eq!(DEFAULT_LANGUAGE, languages()[0].name);
    }

    #[test]
    fn lookup_finds_each_entry() {
        for lang in languages() {
            assert_eq!(lookup(lang.name).unwrap().name, lang.name);
        }
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        let err = lookup("COBOL").unwrap_err();
        assert!(matches!(err, LanguageError::Unknown(ref n) if n == "COBOL"));
    }

    #[test]
    fn factories_build_working_engines() {
        for lang in languages() {
            let mut engine = lang.highlighter();
            // must not panic; plain text yields no spans, grammars may
            let _ = engine.produce_spans("fn main() {}\n# heading\n");
        }
    }
}
