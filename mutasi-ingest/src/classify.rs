//! Lexical line classifiers shared by the scanner and the owner resolver.

use std::sync::LazyLock;

use regex::Regex;

/// Counterparty names on this format: uppercase letters, whitespace,
/// period, ampersand and hyphen only.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z\s\.\&\-]+$").expect("valid name regex"));

/// Whether a trimmed line is a plausible counterparty name.
///
/// Names are rendered in uppercase with no digits; the letter-count floor
/// (`min_letters`) filters short all-caps section headers like `DB` or
/// `SALDO`.
pub fn is_name_candidate(line: &str, min_letters: usize) -> bool {
    if line.is_empty() || line.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    if !NAME_RE.is_match(line) {
        return false;
    }
    line.chars().filter(|c| c.is_ascii_uppercase()).count() > min_letters
}

/// True when the line has at least one cased character and none of them is
/// lowercase (the uppercase test used for owner-name continuation lines).
pub fn is_all_uppercase(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_alphabetic() {
            has_cased = true;
        }
    }
    has_cased
}

/// True when the line contains any decimal digit.
pub fn has_digit(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_digit())
}
