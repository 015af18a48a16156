//! mutasi-ingest: line-scanning parser for BCA mutasi statement text.
//!
//! Input is the plain text recovered from the statement PDF (per page, in
//! reading order); the scanner recovers the account owner and the
//! transaction rows from line order and lexical cues alone, without
//! relying on column boundaries.

pub mod classify;
pub mod numeric;
pub mod owner;
pub mod parsers;
pub mod types;

pub use owner::resolve_account_owner;
pub use parsers::bca_tahapan::parse_statement;
pub use types::{Document, ScanConfig};
