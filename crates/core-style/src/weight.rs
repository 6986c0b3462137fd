//! Weight-string normalization.
//!
//! A weight is empty (inherit), a multiple-of-100 numeric string in
//! [100, 900], or one of a fixed keyword set. Anything else normalizes to
//! `"normal"`; this never produces an error.

/// Keywords accepted verbatim, lightest to heaviest.
pub const KEYWORDS: [&str; 9] = [
    "thin",
    "extra-light",
    "light",
    "normal",
    "medium",
    "semi-bold",
    "bold",
    "extra-bold",
    "black",
];

/// Normalize a weight string per the renderer contract.
pub fn normalize_weight(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if let Ok(n) = trimmed.parse::<u32>() {
        if (100..=900).contains(&n) && n % 100 == 0 {
            return trimmed.to_string();
        }
        return "normal".to_string();
    }
    let lower = trimmed.to_ascii_lowercase();
    if KEYWORDS.contains(&lower.as_str()) {
        return lower;
    }
    "normal".to_string()
}

/// Whether a (normalized or raw) weight should render with a bold attribute
/// on single-attribute renderers: numeric 600+ or semi-bold and heavier.
pub fn is_bold(weight: &str) -> bool {
    let normalized = normalize_weight(weight);
    if let Ok(n) = normalized.parse::<u32>() {
        return n >= 600;
    }
    matches!(normalized.as_str(), "semi-bold" | "bold" | "extra-bold" | "black")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize_weight(""), "");
        assert_eq!(normalize_weight("   "), "");
    }

    #[test]
    fn multiples_of_100_pass_through() {
        assert_eq!(normalize_weight("100"), "100");
        assert_eq!(normalize_weight("400"), "400");
        assert_eq!(normalize_weight("900"), "900");
    }

    #[test]
    fn off_grid_numbers_normalize() {
        assert_eq!(normalize_weight("450"), "normal");
        assert_eq!(normalize_weight("1000"), "normal");
        assert_eq!(normalize_weight("0"), "normal");
    }

    #[test]
    fn keywords_accepted_case_insensitively() {
        assert_eq!(normalize_weight("bold"), "bold");
        assert_eq!(normalize_weight("Semi-Bold"), "semi-bold");
        assert_eq!(normalize_weight("EXTRA-LIGHT"), "extra-light");
    }

    #[test]
    fn garbage_normalizes_to_normal() {
        assert_eq!(normalize_weight("heavyish"), "normal");
        assert_eq!(normalize_weight("bolder"), "normal");
    }

    #[test]
    fn bold_threshold() {
        assert!(is_bold("bold"));
        assert!(is_bold("600"));
        assert!(is_bold("black"));
        assert!(!is_bold("500"));
        assert!(!is_bold("normal"));
        assert!(!is_bold(""));
    }
}
