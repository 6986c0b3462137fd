//! Concrete highlighter engines.
//!
//! `TreeSitterHighlighter` parses the full text per synthesis and walks the
//! grammar's highlight query with a `QueryCursor`, mapping each capture to a
//! labeled span. Captures are emitted sorted ascending by start offset, so
//! with the applier's last-write-wins rule an inner (more specific) capture
//! overrides the enclosing one.
//!
//! `PlainTextHighlighter` produces no spans; plain text renders entirely in
//! the default style.

use crate::Span;
use streaming_iterator::StreamingIterator;
use tracing::{debug, warn};
use tree_sitter::{Parser, Query, QueryCursor};

pub struct TreeSitterHighlighter {
    parser: Parser,
    query: Query,
}

impl TreeSitterHighlighter {
    /// Build an engine from a grammar and its highlight query source.
    ///
    /// Both come from the grammar crate's bundled constants, so failure means
    /// a packaging mismatch; callers degrade to plain text in that case.
    pub fn new(language: tree_sitter::Language, query_src: &str) -> Option<Self> {
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&language) {
            warn!(target: "highlight.engine", error = %e, "grammar_version_mismatch");
            return None;
        }
        let query = match Query::new(&language, query_src) {
            Ok(q) => q,
            Err(e) => {
                warn!(target: "highlight.engine", error = %e, "highlight_query_invalid");
                return None;
            }
        };
        Some(Self { parser, query })
    }
}

/// Byte offset → character offset table for one text. Index `len` maps to the
/// total char count so half-open end offsets convert cleanly.
fn byte_to_char_table(text: &str) -> Vec<usize> {
    let mut table = vec![0usize; text.len() + 1];
    let mut char_idx = 0usize;
    for (byte_idx, ch) in text.char_indices() {
        for slot in &mut table[byte_idx..byte_idx + ch.len_utf8()] {
            *slot = char_idx;
        }
        char_idx += 1;
    }
    table[text.len()] = char_idx;
    table
}

impl crate::Highlighter for TreeSitterHighlighter {
    fn produce_spans(&mut self, text: &str) -> Vec<Span> {
        let Some(tree) = self.parser.parse(text, None) else {
            warn!(target: "highlight.engine", "parse_returned_none");
            return Vec::new();
        };

        let byte_to_char = byte_to_char_table(text);
        let capture_names = self.query.capture_names();
        let mut raw: Vec<(usize, usize, u32)> = Vec::new();

        let mut cursor = QueryCursor::new();
        let mut captures = cursor.captures(&self.query, tree.root_node(), text.as_bytes());
        while let Some((mat, capture_idx)) = captures.next() {
            let capture = &mat.captures[*capture_idx];
            let node = capture.node;
            raw.push((node.start_byte(), node.end_byte(), capture.index));
        }
        // Captures arrive in match order, not position order; sort so outer
        // nodes come first and inner captures overwrite them downstream.
        raw.sort_by_key(|(start, _, _)| *start);

        let spans: Vec<Span> = raw
            .into_iter()
            .filter(|(start, end, _)| start < end)
            .map(|(start, end, index)| {
                Span::new(
                    byte_to_char[start],
                    byte_to_char[end],
                    capture_names[index as usize],
                )
            })
            .collect();
        debug!(target: "highlight.engine", text_bytes = text.len(), span_count = spans.len(), "spans_produced");
        spans
    }
}

/// No-op engine for plain text.
#[derive(Debug, Default)]
pub struct PlainTextHighlighter;

impl crate::Highlighter for PlainTextHighlighter {
    fn produce_spans(&mut self, _text: &str) -> Vec<Span> {
        Vec::new()
    }
}
