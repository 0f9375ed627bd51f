//! Numeric normalization utilities.

/// The marker Eurostat uses for a missing observation.
const MISSING_SENTINEL: &str = ":";

/// Clean a raw cell value and parse it as f64.
///
/// Trims the cell, replaces an exact `:` sentinel with the empty string, then
/// strips every character that is not an ASCII digit, `.` or `-` (annotation
/// flags like a trailing `e` or `p` are dropped this way). Returns `None` when
/// nothing parseable remains; missing values are dropped by the caller, not
/// treated as errors.
pub fn clean_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let candidate = if trimmed == MISSING_SENTINEL {
        ""
    } else {
        trimmed
    };
    let cleaned: String = candidate
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();
    parse_f64(&cleaned)
}

/// Parse a string as f64. Empty or whitespace-only input is `None`, as is
/// anything the float parser rejects.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        // "10.50" -> "10.5", "10.0" -> "10"
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
