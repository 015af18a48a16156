//! Deterministic category rules for statement descriptions.
//!
//! Keyword matching covers the recurring merchants on this statement
//! format; order matters because some keyword sets overlap (e.g. `GOPAY`
//! rows also mention transfers), so rules are an ordered table with
//! first-match-wins semantics rather than nested branching.

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Category labels assigned to every transaction in a post-pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "transfer")]
    Transfer,
    #[serde(rename = "tiktok-shop")]
    TikTokShop,
    #[serde(rename = "vidio")]
    Vidio,
    #[serde(rename = "gojek")]
    Gojek,
    #[serde(rename = "grab")]
    Grab,
    #[serde(rename = "shopee")]
    Shopee,
    #[serde(rename = "flazz")]
    Flazz,
    #[serde(rename = "cash-withdrawal")]
    CashWithdrawal,
    #[serde(rename = "admin-fee")]
    AdminFee,
    /// Credit from the account owner above the salary threshold; assigned
    /// only by the override pass, never by a keyword rule.
    #[serde(rename = "first-salary")]
    FirstSalary,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    /// Human label used in reports, matching the statement's locale.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Transfer => "Transfer",
            Category::TikTokShop => "TikTok Shop",
            Category::Vidio => "Vidio",
            Category::Gojek => "Gojek",
            Category::Grab => "Grab",
            Category::Shopee => "Shopee",
            Category::Flazz => "Flazz",
            Category::CashWithdrawal => "Tarik Tunai",
            Category::AdminFee => "Biaya Admin",
            Category::FirstSalary => "Gajian Pertama",
            Category::Other => "Lainnya",
        }
    }
}

/// Ordered keyword rules, evaluated against the uppercased description.
/// `TTS BY TPKD` / `TTS BY TKPD` are the two spellings BCA uses for
/// TikTok Shop settlements.
const RULES: &[(&[&str], Category)] = &[
    (&["TRSF"], Category::Transfer),
    (&["TTS BY TPKD", "TTS BY TKPD"], Category::TikTokShop),
    (&["GOOGLE VIDIO", "VIDIO.COM"], Category::Vidio),
    (&["GOPAY", "GOJEK"], Category::Gojek),
    (&["GRAB"], Category::Grab),
    (&["SHOPEE.CO.ID", "SHOPEE"], Category::Shopee),
    (&["FLAZZ"], Category::Flazz),
    (&["TARIKAN ATM"], Category::CashWithdrawal),
    (&["BIAYA ADM"], Category::AdminFee),
];

/// Credits from the owner above this amount are relabeled `FirstSalary`.
pub const FIRST_SALARY_THRESHOLD: f64 = 500_000.0;

/// Categorize a single description. First matching rule wins; anything
/// unmatched is `Other`.
pub fn categorize(description: &str) -> Category {
    let desc = description.to_uppercase();
    for (keywords, category) in RULES {
        if keywords.iter().any(|k| desc.contains(k)) {
            return *category;
        }
    }
    Category::Other
}

/// Relabel credits received from the account owner above `threshold` as
/// `FirstSalary`, overwriting the keyword result. Must run after
/// `categorize`, once the owner is known.
pub fn apply_first_salary_override(
    transactions: &mut [Transaction],
    owner: Option<&str>,
    threshold: f64,
) {
    let Some(owner) = owner else { return };
    for txn in transactions {
        let from_owner = txn
            .counterparty
            .as_deref()
            .is_some_and(|n| n.eq_ignore_ascii_case(owner.trim()));
        let above = txn.amount.is_some_and(|a| a > threshold);
        if from_owner && above && txn.direction.is_credit() {
            txn.category = Category::FirstSalary;
        }
    }
}

/// Post-pass over the full transaction list: keyword categorization first,
/// then the owner-aware salary override. Each transaction's category is
/// written exactly once per call.
pub fn assign_categories(transactions: &mut [Transaction], owner: Option<&str>) {
    for txn in transactions.iter_mut() {
        txn.category = categorize(&txn.description);
    }
    apply_first_salary_override(transactions, owner, FIRST_SALARY_THRESHOLD);
}
