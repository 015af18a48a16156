//! Locale-aware numeric normalization and amount validation.
//!
//! Statement amounts are printed Indonesian-style (`150.000,00`), but the
//! extracted text occasionally carries plain-grouped numbers too, so the
//! normalizer decides the decimal separator per token instead of assuming
//! one locale.

use std::sync::LazyLock;

use regex::Regex;

/// Grouped number with an optional two-digit fraction, e.g. `150.000,00`.
pub static NUM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})?").expect("valid number regex")
});

/// Whole-line page-number artifact like `2/5` or `2 / 5`.
static PAGE_FRACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*/\s*\d+$").expect("valid page fraction regex"));

/// Normalize a locale-ambiguous numeric token to a decimal value.
///
/// When both `.` and `,` appear, whichever occurs last is the decimal
/// separator and the other is a grouping mark; a lone `,` is always
/// grouping (decimal fractions are rare and short, grouping is common).
/// Returns `None` when the cleaned token still fails to parse; callers
/// treat that as "no amount", not an error.
pub fn normalize_number(token: &str) -> Option<f64> {
    let token = token.trim();
    let cleaned = match (token.rfind(','), token.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => {
            token.replace('.', "").replace(',', ".")
        }
        _ => token.replace(',', ""),
    };
    cleaned.parse().ok()
}

/// Decide whether a numeric token found on `line` is plausibly a monetary
/// amount rather than noise.
///
/// A line that is nothing but `n / n` is a page-number artifact and never
/// yields an amount. Otherwise a token qualifies when it carries grouping
/// or decimal punctuation, or when its bare digit run is at least
/// `min_digits` long; short unpunctuated runs are usually reference codes.
pub fn is_amount_candidate(token: &str, line: &str, min_digits: usize) -> bool {
    if PAGE_FRACTION_RE.is_match(line.trim()) {
        return false;
    }
    if token.contains('.') || token.contains(',') {
        return true;
    }
    token.chars().filter(char::is_ascii_digit).count() >= min_digits
}

/// Scan `line` left to right for the first numeric token that validates as
/// an amount, normalized to a decimal value.
pub fn first_valid_amount(line: &str, min_digits: usize) -> Option<f64> {
    NUM_RE
        .find_iter(line)
        .map(|m| m.as_str())
        .find(|token| is_amount_candidate(token, line, min_digits))
        .and_then(normalize_number)
}
