//! Core statement parser implementation
//!
//! This module provides the main parser orchestration: per-file reading,
//! header detection, row classification, taxi grouping with carry-forward
//! state, and cross-file aggregation of taxi totals.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::column_resolver::ColumnResolver;
use super::record_parser::{date_from_filename, parse_row};
use super::stats::{ParseOutcome, ParseStats};
use super::taxi_id::TaxiTracker;
use crate::app::models::{RowTag, TaxiGroup};
use crate::app::services::storage;
use crate::constants::UNKNOWN_TAXI;
use crate::{Error, Result};

/// Statement parser for taxi terminal CSV exports
///
/// The period bounds are carried for date fallback and report headers
/// only; no row is ever filtered by period. All parsing anomalies degrade
/// to fallback values, so the only hard failure mode is a batch where no
/// input file could be read at all.
#[derive(Debug)]
pub struct StatementParser {
    period_start: NaiveDate,
    period_end: NaiveDate,
}

impl StatementParser {
    /// Create a parser for the given billing period
    pub fn new(period_start: NaiveDate, period_end: NaiveDate) -> Self {
        Self {
            period_start,
            period_end,
        }
    }

    pub fn period_start(&self) -> NaiveDate {
        self.period_start
    }

    pub fn period_end(&self) -> NaiveDate {
        self.period_end
    }

    /// Parse a batch of export files into per-taxi groups
    ///
    /// Unreadable files are skipped with a warning and counted in the
    /// statistics; the batch continues. Each group's display sequence is
    /// sorted by `(date, time)` once all files are in.
    pub fn parse_files(&self, paths: &[PathBuf]) -> Result<ParseOutcome> {
        let mut outcome = ParseOutcome::default();

        for path in paths {
            match storage::read_statement_text(path) {
                Ok(content) => {
                    info!("Parsing export file: {}", path.display());
                    let file_date = date_from_filename(path);
                    self.parse_content(
                        &content,
                        file_date,
                        &mut outcome.groups,
                        &mut outcome.stats,
                    );
                    outcome.stats.files_parsed += 1;
                }
                Err(e) => {
                    warn!("Skipping unreadable file {}: {}", path.display(), e);
                    outcome.stats.files_failed += 1;
                    outcome
                        .stats
                        .errors
                        .push(format!("{}: {}", path.display(), e));
                }
            }
        }

        if !paths.is_empty() && outcome.stats.files_parsed == 0 {
            return Err(Error::no_data("none of the input files could be read"));
        }

        for group in outcome.groups.values_mut() {
            group.sort_records();
        }

        info!(
            "Parsed {} rows into {} taxi groups from {} files",
            outcome.stats.rows_total,
            outcome.groups.len(),
            outcome.stats.files_parsed
        );

        Ok(outcome)
    }

    /// Parse one file's content into the shared group map
    ///
    /// TaxiTotal values accumulate in a per-file, per-taxi sum keyed by
    /// date and fold into the group aggregates at end of file; they never
    /// enter the display sequence.
    fn parse_content(
        &self,
        content: &str,
        file_date: Option<NaiveDate>,
        groups: &mut BTreeMap<String, TaxiGroup>,
        stats: &mut ParseStats,
    ) {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let positional = ColumnResolver::Positional;
        let mut resolver: Option<ColumnResolver> = None;
        let mut tracker = TaxiTracker::new();
        let mut file_totals: HashMap<String, BTreeMap<NaiveDate, f64>> = HashMap::new();

        for result in reader.records() {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    debug!("Skipping malformed CSV row: {}", e);
                    stats.errors.push(format!("malformed row: {}", e));
                    continue;
                }
            };

            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            // Header detection stays live until a header is found; rows
            // before that read through the legacy positional layout.
            if resolver.is_none() {
                if let Some(named) = ColumnResolver::detect_header(&row) {
                    debug!("Detected header row with named columns");
                    resolver = Some(named);
                    continue;
                }
            }

            let active = resolver.as_ref().unwrap_or(&positional);
            let parsed = parse_row(&row, active, file_date, self.period_start);
            let taxi_key = tracker.resolve(&parsed.taxi_field);

            stats.rows_total += 1;
            if taxi_key == UNKNOWN_TAXI {
                stats.unknown_rows += 1;
            }

            match parsed.record.tag {
                RowTag::TaxiTotal => {
                    stats.taxi_total_rows += 1;
                    let amount = parsed.record.taxi_total.unwrap_or(0.0);
                    *file_totals
                        .entry(taxi_key)
                        .or_default()
                        .entry(parsed.record.date)
                        .or_insert(0.0) += amount;
                }
                RowTag::ShiftTotal => {
                    stats.shift_total_rows += 1;
                    groups.entry(taxi_key).or_default().records.push(parsed.record);
                }
                RowTag::Detail => {
                    stats.detail_rows += 1;
                    groups.entry(taxi_key).or_default().records.push(parsed.record);
                }
            }
        }

        // Fold this file's taxi totals into the cross-file aggregates
        for (taxi, day_sums) in file_totals {
            let group = groups.entry(taxi).or_default();
            for (date, sum) in day_sums {
                group.absorb_taxi_total(date, Some(sum));
            }
        }
    }
}
