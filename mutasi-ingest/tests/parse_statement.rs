//! End-to-end parse of a synthetic two-page Tahapan statement.

use mutasi_core::{Category, Direction};
use mutasi_ingest::{Document, ScanConfig, parse_statement};

const STATEMENT_TEXT: &str = "\
PT BANK CENTRAL ASIA TBK
REKENING TAHAPAN
KCP SUDIRMAN
BUDI
SANTOSO
NO. REKENING 1234567890
PERIODE FEBRUARI
SALDO AWAL 2.000.000,00
01/02 TRSF E-BANKING
DB 150.000,00
TOKO MAKMUR
03/02 BIAYA ADM 25.000,00 DB
05/02 TRSF E-BANKING
CR 600.000,00
BUDI SANTOSO
\u{c}
HALAMAN 2/2
07/02 TARIKAN ATM
DB 500.000,00
10/02 GOPAY TOPUP
DB 50.000,00
GOJEK INDONESIA
MUTASI DB 725.000,00
SALDO AKHIR 1.875.000,00
";

#[test]
fn test_full_statement_parse() {
    let doc = Document::from_extracted_text(STATEMENT_TEXT);
    assert_eq!(doc.pages.len(), 2);

    let stmt = parse_statement(&doc, &ScanConfig::default());
    assert_eq!(stmt.owner.as_deref(), Some("BUDI SANTOSO"));
    assert_eq!(stmt.transactions.len(), 5);

    let dates: Vec<&str> = stmt.transactions.iter().map(|t| t.date.as_str()).collect();
    assert_eq!(dates, ["01/02", "03/02", "05/02", "07/02", "10/02"]);

    let trsf = &stmt.transactions[0];
    assert_eq!(trsf.direction, Direction::Debit);
    assert_eq!(trsf.amount, Some(150_000.0));
    assert_eq!(trsf.counterparty.as_deref(), Some("TOKO MAKMUR"));
    assert_eq!(trsf.category, Category::Transfer);

    let adm = &stmt.transactions[1];
    assert_eq!(adm.amount, Some(25_000.0));
    assert_eq!(adm.category, Category::AdminFee);

    // Credit from the owner above the threshold: relabeled by the
    // first-salary override, not left as Transfer.
    let salary = &stmt.transactions[2];
    assert_eq!(salary.direction, Direction::Credit);
    assert_eq!(salary.counterparty.as_deref(), Some("BUDI SANTOSO"));
    assert_eq!(salary.category, Category::FirstSalary);

    let atm = &stmt.transactions[3];
    assert_eq!(atm.amount, Some(500_000.0));
    assert_eq!(atm.counterparty, None);
    assert_eq!(atm.category, Category::CashWithdrawal);

    let gopay = &stmt.transactions[4];
    assert_eq!(gopay.counterparty.as_deref(), Some("GOJEK INDONESIA"));
    assert_eq!(gopay.category, Category::Gojek);
}

#[test]
fn test_parse_is_idempotent() {
    let doc = Document::from_extracted_text(STATEMENT_TEXT);
    let cfg = ScanConfig::default();
    let first = parse_statement(&doc, &cfg);
    let second = parse_statement(&doc, &cfg);
    assert_eq!(first, second);
}

#[test]
fn test_statement_serde_round_trip() {
    let doc = Document::from_extracted_text(STATEMENT_TEXT);
    let stmt = parse_statement(&doc, &ScanConfig::default());
    let json = serde_json::to_string(&stmt).unwrap();
    let back: mutasi_core::Statement = serde_json::from_str(&json).unwrap();
    assert_eq!(stmt, back);
}
