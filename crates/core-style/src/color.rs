//! `rgb(r, g, b[, a])` color-string parsing.
//!
//! The wire format carries colors as renderer-defined strings; the only
//! encoding this system emits or interprets is `rgb(r, g, b)` with integer
//! 0-255 channels and an optional 0-1 float alpha. Parsing is total: any
//! malformed input, or fewer than 3 numeric components, falls back to opaque
//! black rather than surfacing an error.

use regex::Regex;
use std::sync::OnceLock;

/// Parsed color channels. Alpha defaults to fully opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

/// Opaque black, the fallback for every malformed color string.
pub const FALLBACK: Rgb = Rgb {
    r: 0,
    g: 0,
    b: 0,
    a: 1.0,
};

fn component_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]*\.?[0-9]+").expect("static regex"))
}

/// Parse a color string, falling back to opaque black on any malformation.
///
/// Accepts `rgb(...)` and `rgba(...)` shells; channel values are clamped to
/// 0-255 and alpha to 0-1.
pub fn parse_color(input: &str) -> Rgb {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    if !lower.starts_with("rgb") {
        return FALLBACK;
    }

    let nums: Vec<f32> = component_pattern()
        .find_iter(trimmed)
        .filter_map(|m| m.as_str().parse::<f32>().ok())
        .collect();
    if nums.len() < 3 {
        return FALLBACK;
    }

    let channel = |v: f32| v.clamp(0.0, 255.0).round() as u8;
    Rgb {
        r: channel(nums[0]),
        g: channel(nums[1]),
        b: channel(nums[2]),
        a: nums.get(3).map(|a| a.clamp(0.0, 1.0)).unwrap_or(1.0),
    }
}

/// Render channels back into the canonical `rgb(r, g, b)` encoding.
pub fn format_color(rgb: Rgb) -> String {
    if (rgb.a - 1.0).abs() < f32::EPSILON {
        format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
    } else {
        format!("rgb({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, rgb.a)
    }
}
