//! Schema-tolerant parser for taxi payment terminal CSV exports
//!
//! Terminal exports arrive with inconsistent column layouts, missing
//! headers, embedded summary rows, and noisy identifier fields. This
//! module classifies every row, assigns it to a taxi group, and
//! aggregates taxi totals across files while degrading gracefully on
//! dirty data.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and per-file handling
//! - [`column_resolver`] - Header detection and named/positional field lookup
//! - [`record_parser`] - Individual CSV row classification and extraction
//! - [`taxi_id`] - Taxi identifier validation and carry-forward tracking
//! - [`normalize`] - Header-key and monetary-string normalization
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use taxi_statements::app::services::statement_parser::StatementParser;
//!
//! # fn example() -> taxi_statements::Result<()> {
//! let period_start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
//! let period_end = NaiveDate::from_ymd_opt(2025, 9, 7).unwrap();
//!
//! let parser = StatementParser::new(period_start, period_end);
//! let outcome = parser.parse_files(&[std::path::PathBuf::from("export.csv")])?;
//!
//! println!("Found {} taxi groups from {} rows",
//!          outcome.groups.len(),
//!          outcome.stats.rows_total);
//! # Ok(())
//! # }
//! ```

pub mod column_resolver;
pub mod normalize;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod taxi_id;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_resolver::ColumnResolver;
pub use parser::StatementParser;
pub use stats::{ParseOutcome, ParseStats};
pub use taxi_id::TaxiTracker;
