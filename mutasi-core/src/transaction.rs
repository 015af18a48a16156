//! Transaction record types produced by the statement scanner.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Movement direction of a statement row.
///
/// BCA prints `DB` for debit mutations and either `CR` or `KR` for credit
/// mutations (the two credit markers are interchangeable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Debit,
    Credit,
    /// No direction marker was found near the transaction-start line.
    Unknown,
}

impl Direction {
    /// Map a whole-word marker token to a direction.
    pub fn from_marker(marker: &str) -> Direction {
        match marker.to_uppercase().as_str() {
            "DB" => Direction::Debit,
            "CR" | "KR" => Direction::Credit,
            _ => Direction::Unknown,
        }
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, Direction::Credit)
    }

    pub fn is_debit(&self) -> bool {
        matches!(self, Direction::Debit)
    }
}

/// One parsed statement row.
///
/// Every field except `date` and `description` is heuristic: a row is
/// emitted as soon as a date-prefixed line is recognized, even when the
/// amount, direction or counterparty could not be resolved nearby.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Verbatim `day/month` text from the statement; the format omits the
    /// year, so no calendar validation is done here.
    pub date: String,
    /// Free text following the date on the transaction-start line.
    pub description: String,
    /// Counterparty name found by lookahead; `None` when no plausible
    /// candidate line was nearby.
    pub counterparty: Option<String>,
    /// Amount in the statement currency; `None` when no token in the
    /// lookahead window validated as an amount.
    pub amount: Option<f64>,
    pub direction: Direction,
    /// Assigned once, in a post-pass over the full transaction list.
    pub category: Category,
}

impl Transaction {
    /// Resolve the partial `day/month` date against a statement year.
    ///
    /// Statement rows carry no year, so callers that need a real date must
    /// supply one (usually from the statement period).
    pub fn date_in_year(&self, year: i32) -> Option<NaiveDate> {
        let (day, month) = self.date.trim().split_once('/')?;
        let day: u32 = day.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Whole-document parse result: the resolved account owner (when any
/// heuristic matched) plus all transactions in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub owner: Option<String>,
    pub transactions: Vec<Transaction>,
}

impl Statement {
    /// True when `name` equals the resolved owner, ignoring case.
    pub fn is_owner(&self, name: &str) -> bool {
        self.owner
            .as_deref()
            .is_some_and(|o| o.eq_ignore_ascii_case(name.trim()))
    }
}
