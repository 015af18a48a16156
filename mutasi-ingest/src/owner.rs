//! Account-owner resolution over the first statement page.
//!
//! The owner's name has no reliable position in this layout, so resolution
//! is an ordered list of heuristics tried in decreasing confidence: an
//! explicit label line, the name block under the account-type banner, an
//! unlabeled all-caps scan, and finally the second page line verbatim.

use std::sync::LazyLock;

use regex::Regex;

use crate::classify::{has_digit, is_all_uppercase};

/// Explicit owner label, e.g. `NAMA REKENING : BUDI SANTOSO`.
static OWNER_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(NAMA|PEMILIK)\s+REKENING\s*:\s*(.+)").expect("valid owner label regex")
});

/// Account-type banner the owner block sits under.
const ACCOUNT_BANNER: &str = "REKENING TAHAPAN";

/// Administrative header words that disqualify a line from being (part of)
/// the owner's name.
const SKIP_KEYWORDS: &[&str] = &[
    "REKENING",
    "KCP",
    "CABANG",
    "BANK",
    "BCA",
    "INDONESIA",
    "HALAMAN",
    "PERIODE",
    "MATA UANG",
    "NO. REKENING",
    "TANGGAL",
    "KETERANGAN",
    "MUTASI",
    "SALDO",
    "CBG",
];

/// Lines the banner heuristic scans below the banner before giving up.
const BANNER_SCAN_WINDOW: usize = 4;

fn is_admin_keyword_line(line: &str) -> bool {
    SKIP_KEYWORDS.iter().any(|k| line.contains(k))
}

/// A line that could be (a continuation of) an owner name: all uppercase,
/// no digits, not an administrative header.
fn is_name_line(line: &str) -> bool {
    is_all_uppercase(line) && !has_digit(line) && !is_admin_keyword_line(line)
}

/// Join up to `join_window` continuation lines onto the name starting at
/// `start`, stopping at the first line that is not a name line.
fn join_name_lines(lines: &[String], start: usize, join_window: usize) -> String {
    let mut full_name = lines[start].trim().to_string();
    for line in lines.iter().skip(start + 1).take(join_window) {
        let line = line.trim();
        if !is_name_line(line) {
            break;
        }
        full_name.push(' ');
        full_name.push_str(line);
    }
    full_name
}

/// Heuristic 1: explicit `(NAMA|PEMILIK) REKENING : <value>` label.
fn from_label(lines: &[String], _join_window: usize) -> Option<String> {
    lines.iter().find_map(|line| {
        OWNER_LABEL_RE
            .captures(line)
            .map(|caps| caps[2].trim().to_string())
    })
}

/// Heuristic 2: first name line within a few lines below the account-type
/// banner, with multi-line continuation.
fn below_banner(lines: &[String], join_window: usize) -> Option<String> {
    let banner_idx = lines
        .iter()
        .position(|line| line.to_uppercase().contains(ACCOUNT_BANNER))?;
    (banner_idx + 1..=banner_idx + BANNER_SCAN_WINDOW)
        .take_while(|&idx| idx < lines.len())
        .find(|&idx| is_name_line(lines[idx].trim()))
        .map(|idx| join_name_lines(lines, idx, join_window))
}

/// Heuristic 3: first multi-word name line anywhere on the page, with
/// multi-line continuation.
fn page_scan(lines: &[String], join_window: usize) -> Option<String> {
    lines
        .iter()
        .position(|line| is_name_line(line) && line.split_whitespace().count() >= 2)
        .map(|idx| join_name_lines(lines, idx, join_window))
}

/// Heuristic 4: the second page line, verbatim.
fn second_line(lines: &[String], _join_window: usize) -> Option<String> {
    (lines.len() > 1).then(|| lines[1].trim().to_string())
}

/// Ordered by decreasing confidence; first success wins.
const HEURISTICS: &[fn(&[String], usize) -> Option<String>] =
    &[from_label, below_banner, page_scan, second_line];

/// Resolve the account owner from the first page's lines, or `None` when
/// every heuristic fails. Never an error: an unresolved owner is a normal
/// outcome for unusual layouts.
pub fn resolve_account_owner(first_page_lines: &[String], join_window: usize) -> Option<String> {
    HEURISTICS
        .iter()
        .find_map(|heuristic| heuristic(first_page_lines, join_window))
}
