//! mutasi-report: read-only consumers of a parsed statement — CSV export,
//! direction/category aggregation and chart color assignment.

pub mod csv_export;
pub mod summary;

pub use csv_export::{write_csv, write_csv_file};
pub use summary::{CategoryBreakdown, Summary, color_map};
