//! Memoizing label → style resolver.
//!
//! One resolver lives per editing session (per active highlighter
//! configuration). The first resolution of a label derives its style from the
//! theme; every later resolution returns the cached value unchanged. This is
//! a stability contract, not just an optimization: identical labels must
//! render identically for the whole session even if the surrounding host
//! state changes after the first derivation.

use crate::{Style, Theme};
use ahash::RandomState;
use std::collections::HashMap;
use tracing::trace;

pub struct StyleResolver {
    theme: Theme,
    cache: HashMap<String, Style, RandomState>,
    lookups: u64,
    derivations: u64,
}

impl StyleResolver {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            cache: HashMap::default(),
            lookups: 0,
            derivations: 0,
        }
    }

    /// Resolve a highlight label to its concrete style, memoized by label.
    pub fn resolve(&mut self, label: &str) -> Style {
        self.lookups += 1;
        if let Some(style) = self.cache.get(label) {
            return style.clone();
        }
        self.derivations += 1;
        let style = self.theme.style_for(label);
        trace!(target: "style.resolver", label, color = %style.color, weight = %style.weight, "style_derived");
        self.cache.insert(label.to_string(), style.clone());
        style
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Total `resolve` calls this session.
    pub fn lookups(&self) -> u64 {
        self.lookups
    }

    /// Theme derivations performed; at most one per distinct label.
    pub fn derivations(&self) -> u64 {
        self.derivations
    }
}
