//! Individual CSV row classification and field extraction
//!
//! Each row is read through the file's column resolver, classified as
//! Detail, ShiftTotal, or TaxiTotal, and shaped into a [`Record`] whose
//! populated monetary fields match its tag. All anomalies resolve to
//! fallback values; nothing at this level is an error.

use chrono::NaiveDate;
use csv::StringRecord;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use super::column_resolver::{ColumnResolver, Field};
use super::normalize::{normalize_key, parse_money};
use crate::app::models::{Record, RowTag};
use crate::constants::{FILENAME_DATE_FORMAT, RECORD_DATE_FORMAT, TAXI_TOTAL_LABEL};

static FILENAME_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(20\d{6})").expect("valid regex"));

/// A classified row together with its raw taxi field
///
/// The taxi field is kept separate from the record because group
/// assignment (with carry-forward) happens above this layer.
#[derive(Debug, Clone)]
pub struct ParsedRow {
    pub taxi_field: String,
    pub record: Record,
}

/// Extract an 8-digit `YYYYMMDD` date from an export file name, if present
pub fn date_from_filename(path: &Path) -> Option<NaiveDate> {
    let name = path.file_name()?.to_str()?;
    let digits = FILENAME_DATE.captures(name)?.get(1)?.as_str();
    NaiveDate::parse_from_str(digits, FILENAME_DATE_FORMAT).ok()
}

/// Resolve a row's date, never leaving it unset
///
/// Fallback chain: the row's own date field (day/month/year), then the
/// date extracted from the file name, then the report period start.
pub fn resolve_date(
    date_field: &str,
    file_date: Option<NaiveDate>,
    period_start: NaiveDate,
) -> NaiveDate {
    if !date_field.is_empty() {
        if let Ok(date) = NaiveDate::parse_from_str(date_field, RECORD_DATE_FORMAT) {
            return date;
        }
    }
    file_date.unwrap_or(period_start)
}

/// Determine a row's type from its tag field and description
///
/// An explicit tag of `T`, `S`, or `D` wins. Some exports omit the tag
/// column entirely and mark summary rows through the description text,
/// so `taxitotal`/`shifttotal` descriptions classify those rows; anything
/// else is a Detail row.
pub fn classify_row(tag_field: &str, description: &str) -> RowTag {
    if let Some(tag) = RowTag::from_tag_field(tag_field) {
        return tag;
    }
    match normalize_key(description).as_str() {
        "taxitotal" => RowTag::TaxiTotal,
        "shifttotal" => RowTag::ShiftTotal,
        _ => RowTag::Detail,
    }
}

/// Parse one data row into a classified record
///
/// The record's populated monetary fields are narrowed to what its tag
/// semantically carries: the full set for Detail rows, only the shift
/// total for ShiftTotal rows, only the taxi total for TaxiTotal rows.
pub fn parse_row(
    row: &StringRecord,
    resolver: &ColumnResolver,
    file_date: Option<NaiveDate>,
    period_start: NaiveDate,
) -> ParsedRow {
    let tag_field = resolver.get_text(row, Field::Tag);
    let taxi_field = resolver.get_text(row, Field::Taxi);
    let description = resolver.get_text(row, Field::Description);

    let tag = classify_row(&tag_field, &description);
    let date = resolve_date(
        resolver.get(row, Field::Date).unwrap_or_default(),
        file_date,
        period_start,
    );

    let money = |field| resolver.get(row, field).and_then(parse_money);

    let record = match tag {
        RowTag::TaxiTotal => Record {
            tag,
            reference: String::new(),
            date,
            time: String::new(),
            description: TAXI_TOTAL_LABEL.to_string(),
            payment_total: None,
            taxi_total: money(Field::TaxiTotal),
            shift_total: None,
            charge: None,
            eftpos: None,
            ihail: None,
            eticket: None,
            tss: None,
        },
        RowTag::ShiftTotal => Record {
            tag,
            reference: resolver.get_text(row, Field::Reference),
            date,
            time: resolver.get_text(row, Field::Time),
            description,
            payment_total: None,
            taxi_total: None,
            shift_total: money(Field::ShiftTotal),
            charge: None,
            eftpos: None,
            ihail: None,
            eticket: None,
            tss: None,
        },
        RowTag::Detail => Record {
            tag,
            reference: resolver.get_text(row, Field::Reference),
            date,
            time: resolver.get_text(row, Field::Time),
            description,
            payment_total: money(Field::PaymentTotal),
            taxi_total: money(Field::TaxiTotal),
            shift_total: money(Field::ShiftTotal),
            charge: money(Field::Charge),
            eftpos: money(Field::Eftpos),
            ihail: money(Field::Ihail),
            eticket: money(Field::Eticket),
            tss: money(Field::Tss),
        },
    };

    ParsedRow { taxi_field, record }
}
