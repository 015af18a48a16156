//! Direction and category aggregation over a parsed statement.
//!
//! Outgoing totals exclude transactions whose counterparty is the account
//! owner (moving money between your own accounts is not spending). All
//! aggregation reads the transaction list; nothing here mutates it.

use mutasi_core::{Category, Statement};

/// Per-category slice of the outgoing transactions: how many rows and how
/// much money.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub count: usize,
    pub total: f64,
}

/// Whole-statement totals plus the per-category breakdown of outgoing
/// transactions, in first-seen source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Sum of debit amounts, excluding rows whose counterparty is the
    /// account owner.
    pub total_out: f64,
    /// Sum of all credit amounts.
    pub total_in: f64,
    /// `total_in - total_out`.
    pub net: f64,
    pub by_category: Vec<CategoryBreakdown>,
}

impl Summary {
    pub fn build(stmt: &Statement) -> Summary {
        let mut total_out = 0.0;
        let mut total_in = 0.0;
        let mut by_category: Vec<CategoryBreakdown> = Vec::new();

        for txn in &stmt.transactions {
            let Some(amount) = txn.amount else { continue };
            if txn.direction.is_credit() {
                total_in += amount;
                continue;
            }
            if !txn.direction.is_debit() {
                continue;
            }
            let to_owner = txn
                .counterparty
                .as_deref()
                .is_some_and(|name| stmt.is_owner(name));
            if to_owner {
                continue;
            }
            total_out += amount;
            match by_category.iter_mut().find(|b| b.category == txn.category) {
                Some(bucket) => {
                    bucket.count += 1;
                    bucket.total += amount;
                }
                None => by_category.push(CategoryBreakdown {
                    category: txn.category,
                    count: 1,
                    total: amount,
                }),
            }
        }

        Summary {
            total_out,
            total_in,
            net: total_in - total_out,
            by_category,
        }
    }
}

/// Qualitative chart palette (Plotly default colors).
const PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Assign a color to every category present, cycling through the palette.
/// Pure function of the input list; computed once per document, so the
/// same categories always get the same colors within one report.
pub fn color_map(categories: &[Category]) -> Vec<(Category, &'static str)> {
    categories
        .iter()
        .enumerate()
        .map(|(idx, &category)| (category, PALETTE[idx % PALETTE.len()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mutasi_core::{Direction, Transaction};

    fn txn(
        counterparty: Option<&str>,
        amount: Option<f64>,
        direction: Direction,
        category: Category,
    ) -> Transaction {
        Transaction {
            date: "01/02".to_string(),
            description: String::new(),
            counterparty: counterparty.map(str::to_string),
            amount,
            direction,
            category,
        }
    }

    #[test]
    fn test_totals_exclude_owner_debits() {
        let stmt = Statement {
            owner: Some("BUDI SANTOSO".to_string()),
            transactions: vec![
                txn(Some("TOKO MAKMUR"), Some(150_000.0), Direction::Debit, Category::Transfer),
                // Debit to the owner's own account: not spending.
                txn(Some("Budi Santoso"), Some(200_000.0), Direction::Debit, Category::Transfer),
                txn(None, Some(25_000.0), Direction::Debit, Category::AdminFee),
                txn(Some("BUDI SANTOSO"), Some(600_000.0), Direction::Credit, Category::FirstSalary),
                // Unresolved amount contributes nothing.
                txn(None, None, Direction::Debit, Category::Other),
            ],
        };
        let summary = Summary::build(&stmt);
        assert_eq!(summary.total_out, 175_000.0);
        assert_eq!(summary.total_in, 600_000.0);
        assert_eq!(summary.net, 425_000.0);
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category[0].category, Category::Transfer);
        assert_eq!(summary.by_category[0].count, 1);
        assert_eq!(summary.by_category[0].total, 150_000.0);
        assert_eq!(summary.by_category[1].category, Category::AdminFee);
    }

    #[test]
    fn test_no_owner_counts_all_debits() {
        let stmt = Statement {
            owner: None,
            transactions: vec![
                txn(Some("BUDI SANTOSO"), Some(200_000.0), Direction::Debit, Category::Transfer),
            ],
        };
        assert_eq!(Summary::build(&stmt).total_out, 200_000.0);
    }

    #[test]
    fn test_unknown_direction_is_ignored() {
        let stmt = Statement {
            owner: None,
            transactions: vec![txn(None, Some(100.0), Direction::Unknown, Category::Other)],
        };
        let summary = Summary::build(&stmt);
        assert_eq!(summary.total_out, 0.0);
        assert_eq!(summary.total_in, 0.0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_color_map_cycles() {
        let categories = vec![Category::Transfer; 12];
        let colors = color_map(&categories);
        assert_eq!(colors.len(), 12);
        assert_eq!(colors[0].1, colors[10].1);
        assert_ne!(colors[0].1, colors[1].1);
    }
}
