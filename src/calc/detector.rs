use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern for a plain decimal number
    /// Matches: optional sign, digits with optional fraction (or a bare fraction), optional exponent
    /// Examples: "70", "1.8", ".5", "5.", "+2", "1e3", "-4.2E-1"
    static ref NUMBER_PATTERN: Regex = Regex::new(
        r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$"
    ).unwrap();
}

/// Check if a string is a plain decimal number (surrounding whitespace ignored)
pub fn looks_like_number(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    NUMBER_PATTERN.is_match(trimmed)
}

/// Parse user text into a strictly positive, finite number
/// Empty, non-numeric, infinite and non-positive inputs all map to `None`
pub fn try_parse_positive_float(text: &str) -> Option<f64> {
    if !looks_like_number(text) {
        return None;
    }

    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}
