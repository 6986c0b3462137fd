//! Wire snapshot types, run coalescing, placeholder synthesis, and the
//! editor-side synthesis session.
//!
//! A `Snapshot` is the complete renderable state of the document: measured
//! grid dimensions, the raw text, the coalesced styled runs, and the active
//! language name. Every document change produces a fresh full snapshot; the
//! protocol has no deltas, which makes message loss self-healing.
//!
//! Invariants (hold by construction, never validated on receive):
//! * `height >= 1` even for empty text.
//! * `width == 0` implies `runs` is empty.
//! * Run text never contains a newline and is never empty.
//! * Re-tokenizing `text` and replaying `runs` by position reproduces the
//!   exact per-cell styling the pipeline produced (round-trip property).

pub mod placeholder;
pub mod runs;
pub mod session;

pub use placeholder::{PLACEHOLDER_TEXT, placeholder};
pub use runs::coalesce;
pub use session::EditorSession;

use core_grid::Grid;
use core_style::Style;
use serde::{Deserialize, Serialize};

/// A maximal horizontal sequence of same-style cells within one row; the
/// transmitted rendering unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Origin cell index, kept for stable keying on the rendering side.
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub style: Style,
    pub text: String,
}

/// The full-document wire snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Max column count across all rows, in character cells.
    pub width: usize,
    /// Row count, at least 1.
    pub height: usize,
    /// Raw document text.
    pub text: String,
    pub runs: Vec<Run>,
    /// Human-readable language name; empty means "use the default".
    #[serde(default)]
    pub language: String,
}

impl Snapshot {
    /// Pure assembly from the pipeline outputs. No validation: the invariants
    /// hold by construction.
    pub fn build(grid: &Grid, runs: Vec<Run>, text: &str, language: &str) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            text: text.to_string(),
            runs,
            language: language.to_string(),
        }
    }
}

/// Channel payload, tagged `kind`. Both directions use the same shape; the
/// steady-state protocol has the single `text` variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Message {
    #[serde(rename = "text")]
    Text(Snapshot),
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_grid::tokenize;

    #[test]
    fn build_copies_grid_dimensions() {
        let grid = tokenize("ab\ncdef");
        let snap = Snapshot::build(&grid, Vec::new(), "ab\ncdef", "Rust");
        assert_eq!(snap.width, 4);
        assert_eq!(snap.height, 2);
        assert_eq!(snap.text, "ab\ncdef");
        assert_eq!(snap.language, "Rust");
    }

    #[test]
    fn message_serializes_with_text_kind_tag() {
        let grid = tokenize("a");
        let runs = coalesce(&grid);
        let msg = Message::Text(Snapshot::build(&grid, runs, "a", "Rust"));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["width"], 1);
        assert_eq!(json["height"], 1);
        assert_eq!(json["text"], "a");
        assert_eq!(json["language"], "Rust");
        assert_eq!(json["runs"][0]["text"], "a");
        assert_eq!(json["runs"][0]["style"]["color"], "");
    }

    #[test]
    fn message_round_trips_through_json() {
        let grid = tokenize("hi\nyou");
        let runs = coalesce(&grid);
        let msg = Message::Text(Snapshot::build(&grid, runs, "hi\nyou", "Markdown"));
        let encoded = serde_json::to_string(&msg).unwrap();
        let decoded: Message = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn missing_language_field_decodes_as_empty() {
        let json = r#"{"kind":"text","width":0,"height":1,"text":"","runs":[]}"#;
        let Message::Text(snap) = serde_json::from_str(json).unwrap();
        assert_eq!(snap.language, "");
    }
}
