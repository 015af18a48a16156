//! CSV serialization of the parsed transaction list.
//!
//! Column order is fixed: `Date, Description, Counterparty, Amount,
//! Direction, Category`. An unresolved counterparty renders as `-` and an
//! unresolved amount as an empty field, so every row round-trips through
//! spreadsheet tools without type surprises.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use mutasi_core::{Direction, Statement};

const HEADER: [&str; 6] = [
    "Date",
    "Description",
    "Counterparty",
    "Amount",
    "Direction",
    "Category",
];

fn direction_code(direction: Direction) -> &'static str {
    match direction {
        Direction::Debit => "DB",
        Direction::Credit => "CR",
        Direction::Unknown => "",
    }
}

/// Write the statement's transactions as CSV to `writer`.
pub fn write_csv<W: Write>(writer: W, stmt: &Statement) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for txn in &stmt.transactions {
        let amount = txn.amount.map(|a| a.to_string()).unwrap_or_default();
        wtr.write_record([
            txn.date.as_str(),
            txn.description.as_str(),
            txn.counterparty.as_deref().unwrap_or("-"),
            amount.as_str(),
            direction_code(txn.direction),
            txn.category.label(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the statement's transactions as a CSV file at `path`.
pub fn write_csv_file(path: impl AsRef<Path>, stmt: &Statement) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(file, stmt).with_context(|| format!("writing {}", path.display()))
}
