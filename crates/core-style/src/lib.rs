//! Style value type, color/weight normalization, theme, and the memoizing
//! style resolver.
//!
//! A `Style` is the only visual vocabulary the rendering side understands:
//! a color string in the renderer's `rgb(r, g, b[, a])` encoding and a weight
//! string (empty, a multiple-of-100 number, or a fixed keyword). Both fields
//! empty means "inherit the renderer default". Styles are compared by
//! structural equality to decide run boundaries, so the resolver must hand
//! out identical values for identical labels within one session.
//!
//! Design invariants:
//! * `Style` is a plain value type; cloning is cheap enough for per-cell use.
//! * All malformed color/weight input is absorbed here with safe defaults;
//!   no parse error escapes this crate's normalization functions.
//! * The resolver derives a label's style at most once per session and serves
//!   cache hits unchanged afterwards, even if the theme object mutates.

pub mod color;
pub mod resolver;
pub mod theme;
pub mod weight;

pub use resolver::StyleResolver;
pub use theme::{Theme, ThemeError};

use serde::{Deserialize, Serialize};

/// Concrete visual style for a run of text. Empty strings mean unset/inherit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub weight: String,
}

impl Style {
    pub fn new(color: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            weight: weight.into(),
        }
    }

    /// The unset style: inherit both color and weight from the renderer.
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn is_unset(&self) -> bool {
        self.color.is_empty() && self.weight.is_empty()
    }
}
