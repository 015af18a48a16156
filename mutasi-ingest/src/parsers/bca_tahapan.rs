//! BCA Tahapan savings-account statement scanner (text).
//!
//! Expected extracted-text shape (no reliable column boundaries, rows wrap
//! inconsistently):
//!
//! ```text
//! 01/02 TRSF E-BANKING
//! DB 150.000,00
//! TOKO MAKMUR
//! 03/02 BIAYA ADM 25.000,00 DB
//! ```
//!
//! A row starts at a `day/month`-prefixed line; the direction marker,
//! amount and counterparty are recovered by bounded lookahead over the
//! following lines, page-scoped and cut short at the next row start.

use std::sync::LazyLock;

use regex::Regex;

use mutasi_core::{Category, Direction, Statement, Transaction, assign_categories};

use crate::classify::is_name_candidate;
use crate::numeric::first_valid_amount;
use crate::owner::resolve_account_owner;
use crate::types::{Document, ScanConfig};

/// `day/month` at the start of a (possibly indented) line.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,2}/\d{1,2})").expect("valid date regex"));

/// Whole-word direction marker; `CR` and `KR` are synonymous credit marks.
static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(DB|CR|KR)\b").expect("valid marker regex"));

/// Balance and section-header lines that never start a transaction.
const ADMIN_KEYWORDS: &[&str] = &["SALDO AWAL", "MUTASI DB", "MUTASI CR", "SALDO AKHIR"];

fn is_admin_line(line: &str) -> bool {
    let upper = line.to_uppercase();
    ADMIN_KEYWORDS.iter().any(|k| upper.contains(k))
}

/// Parse a whole extracted document into a statement.
///
/// The owner is resolved once from page one; line scanning is page-scoped
/// (lookahead never crosses a page boundary). Categories are assigned in a
/// post-pass once the full list and the owner are known. This never fails:
/// unresolvable fields degrade to `None`/`Unknown` and an empty page
/// simply contributes no transactions.
pub fn parse_statement(doc: &Document, cfg: &ScanConfig) -> Statement {
    let owner = resolve_account_owner(doc.first_page(), cfg.owner_join_window);

    let mut transactions = Vec::new();
    for page in &doc.pages {
        scan_page(page, cfg, &mut transactions);
    }

    assign_categories(&mut transactions, owner.as_deref());
    Statement {
        owner,
        transactions,
    }
}

/// Walk one page's lines, emitting a transaction for every row-start line.
///
/// The outer index always advances by one: lines consumed by lookahead are
/// re-examined as potential row starts on later iterations, which is safe
/// because only date-prefixed lines can start a row.
fn scan_page(lines: &[String], cfg: &ScanConfig, out: &mut Vec<Transaction>) {
    let n = lines.len();
    for i in 0..n {
        let line = &lines[i];
        if is_admin_line(line) {
            continue;
        }
        let Some(caps) = DATE_RE.captures(line) else {
            continue;
        };
        let date = caps[1].to_string();
        let date_end = caps.get(1).map_or(0, |m| m.end());
        let description = line[date_end..].trim().to_string();

        // Direction/amount lookahead: the row-start line itself plus the
        // next lines up to the window, stopping at the next row start.
        // Once a marker line is found it is consumed, whether or not any
        // token on it validated as an amount.
        let mut direction = Direction::Unknown;
        let mut amount = None;
        let mut marker_line = None;
        for j in i..n.min(i + cfg.amount_window) {
            if j != i && DATE_RE.is_match(&lines[j]) {
                break;
            }
            if let Some(m) = MARKER_RE.captures(&lines[j]) {
                direction = Direction::from_marker(&m[1]);
                amount = first_valid_amount(&lines[j], cfg.min_amount_digits);
                marker_line = Some(j);
                break;
            }
        }

        // Counterparty lookahead, only when an amount was resolved: scan
        // the lines after the amount line, stopping at the next row start.
        let mut counterparty = None;
        if amount.is_some() {
            if let Some(j) = marker_line {
                for k in (j + 1)..n.min(j + 1 + cfg.name_window) {
                    if DATE_RE.is_match(&lines[k]) {
                        break;
                    }
                    let candidate = lines[k].trim();
                    if is_name_candidate(candidate, cfg.min_name_letters) {
                        counterparty = Some(candidate.to_string());
                        break;
                    }
                }
            }
        }

        // Partial rows are valid output; the category placeholder is
        // overwritten by the document-level post-pass.
        out.push(Transaction {
            date,
            description,
            counterparty,
            amount,
            direction,
            category: Category::Other,
        });
    }
}
