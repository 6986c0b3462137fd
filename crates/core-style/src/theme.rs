//! Theme: the mapping from highlight labels to concrete styles.
//!
//! A built-in default theme covers the capture names the bundled grammars
//! emit; an optional TOML file (`glyphsync.toml`, `[theme.labels]` table)
//! overrides or extends it. Unknown fields in the file are ignored so the
//! format can grow without breaking older files. Label lookup falls back by
//! dot segment: `punctuation.bracket` tries `punctuation` before giving up,
//! mirroring how capture names specialize.

use crate::Style;
use crate::weight::normalize_weight;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Label → style table plus the fixed muted style used for placeholder text.
#[derive(Debug, Clone)]
pub struct Theme {
    labels: HashMap<String, Style>,
    muted: Style,
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    theme: ThemeTable,
}

#[derive(Debug, Default, Deserialize)]
struct ThemeTable {
    #[serde(default)]
    labels: HashMap<String, StyleSpec>,
    #[serde(default)]
    muted: Option<StyleSpec>,
}

#[derive(Debug, Deserialize)]
struct StyleSpec {
    #[serde(default)]
    color: String,
    #[serde(default)]
    weight: String,
}

impl StyleSpec {
    fn into_style(self) -> Style {
        Style {
            color: self.color,
            weight: normalize_weight(&self.weight),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        let mut labels = HashMap::new();
        let mut put = |label: &str, color: &str, weight: &str| {
            labels.insert(label.to_string(), Style::new(color, weight));
        };
        put("keyword", "rgb(197, 134, 192)", "bold");
        put("string", "rgb(206, 145, 120)", "");
        put("comment", "rgb(106, 153, 85)", "");
        put("function", "rgb(220, 220, 170)", "");
        put("type", "rgb(78, 201, 176)", "");
        put("constant", "rgb(100, 151, 177)", "");
        put("number", "rgb(181, 206, 168)", "");
        put("property", "rgb(156, 220, 254)", "");
        put("variable", "rgb(156, 220, 254)", "");
        put("operator", "rgb(212, 212, 212)", "");
        put("punctuation", "rgb(212, 212, 212)", "");
        put("attribute", "rgb(220, 220, 170)", "");
        put("label", "rgb(86, 156, 214)", "");
        put("escape", "rgb(215, 186, 125)", "");
        put("constructor", "rgb(78, 201, 176)", "");
        put("markup.heading", "rgb(86, 156, 214)", "bold");
        put("markup.bold", "", "bold");
        Self {
            labels,
            muted: muted_style(),
        }
    }
}

/// The fixed muted style every placeholder character gets.
pub fn muted_style() -> Style {
    Style::new("rgb(128, 128, 128)", "")
}

impl Theme {
    /// Load a theme from a TOML file, layered over the built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self, ThemeError> {
        let raw = std::fs::read_to_string(path)?;
        let file: ThemeFile = toml::from_str(&raw)?;
        let mut theme = Theme::default();
        let override_count = file.theme.labels.len();
        for (label, spec) in file.theme.labels {
            theme.labels.insert(label, spec.into_style());
        }
        if let Some(muted) = file.theme.muted {
            theme.muted = muted.into_style();
        }
        info!(target: "style.theme", file = %path.display(), override_count, "theme_loaded");
        Ok(theme)
    }

    /// Insert or replace a single label's style programmatically.
    pub fn set(&mut self, label: impl Into<String>, style: Style) {
        self.labels.insert(label.into(), style);
    }

    /// Resolve a label to a style: exact match, then dot-segment prefixes
    /// (`a.b.c` → `a.b` → `a`), then the unset style.
    pub fn style_for(&self, label: &str) -> Style {
        let mut key = label;
        loop {
            if let Some(style) = self.labels.get(key) {
                return style.clone();
            }
            match key.rfind('.') {
                Some(dot) => key = &key[..dot],
                None => return Style::unset(),
            }
        }
    }

    pub fn muted(&self) -> Style {
        self.muted.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_theme_resolves_known_labels() {
        let theme = Theme::default();
        let kw = theme.style_for("keyword");
        assert_eq!(kw.color, "rgb(197, 134, 192)");
        assert_eq!(kw.weight, "bold");
    }

    #[test]
    fn dotted_labels_fall_back_by_segment() {
        let theme = Theme::default();
        assert_eq!(
            theme.style_for("punctuation.bracket"),
            theme.style_for("punctuation")
        );
        assert_eq!(
            theme.style_for("function.method.builtin"),
            theme.style_for("function")
        );
    }

    #[test]
    fn unknown_label_is_unset() {
        let theme = Theme::default();
        assert!(theme.style_for("no-such-label").is_unset());
    }

    #[test]
    fn muted_style_is_fixed() {
        assert_eq!(muted_style().color, "rgb(128, 128, 128)");
        assert_eq!(muted_style().weight, "");
    }

    #[test]
    fn file_overrides_layer_over_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            r#"
[theme.labels.keyword]
color = "rgb(1, 2, 3)"
weight = "900"

[theme.labels.custom]
color = "rgb(9, 9, 9)"
"#
        )
        .unwrap();
        let theme = Theme::load_from(f.path()).unwrap();
        assert_eq!(theme.style_for("keyword"), Style::new("rgb(1, 2, 3)", "900"));
        assert_eq!(theme.style_for("custom").color, "rgb(9, 9, 9)");
        // untouched defaults survive
        assert_eq!(theme.style_for("comment").color, "rgb(106, 153, 85)");
    }

    #[test]
    fn weight_normalized_on_load() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            r#"
[theme.labels.keyword]
color = "rgb(1, 2, 3)"
weight = "bolder-than-bold"
"#
        )
        .unwrap();
        let theme = Theme::load_from(f.path()).unwrap();
        assert_eq!(theme.style_for("keyword").weight, "normal");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Theme::load_from(Path::new("/nonexistent/theme.toml")).unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
