//! Data models for taxi statement processing
//!
//! This module contains the core data structures for representing parsed
//! terminal export rows and per-taxi groupings. Records are immutable once
//! constructed; only group membership and the aggregate sums mutate while
//! a parse pass runs.

use crate::constants::RECORD_TIME_FORMAT;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Row Tag
// =============================================================================

/// Classification of a parsed export row
///
/// Every row resolves to exactly one tag. Files that omit the tag column
/// are classified from the description text instead, so classification is
/// never ambiguous after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowTag {
    /// One taxi transaction line
    Detail,
    /// A driver-shift subtotal line
    ShiftTotal,
    /// A per-taxi subtotal line, aggregated but not displayed individually
    TaxiTotal,
}

impl RowTag {
    /// Map an explicit tag field value (`D`, `S`, or `T`) to a row tag
    pub fn from_tag_field(value: &str) -> Option<Self> {
        match value.trim() {
            "D" => Some(RowTag::Detail),
            "S" => Some(RowTag::ShiftTotal),
            "T" => Some(RowTag::TaxiTotal),
            _ => None,
        }
    }

    /// Single-letter form used in the source exports
    pub fn as_letter(self) -> char {
        match self {
            RowTag::Detail => 'D',
            RowTag::ShiftTotal => 'S',
            RowTag::TaxiTotal => 'T',
        }
    }
}

impl std::fmt::Display for RowTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_letter())
    }
}

// =============================================================================
// Record
// =============================================================================

/// One parsed export row
///
/// The tag determines which monetary fields the parser populates: Detail
/// rows carry the full field set, ShiftTotal rows only `shift_total`, and
/// TaxiTotal rows only `taxi_total`. Absence of a monetary field (`None`)
/// is distinct from a zero amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub tag: RowTag,
    pub reference: String,
    /// Never unset: falls back to a file-name date or the period start
    pub date: NaiveDate,
    /// Raw time text; kept verbatim for display, parsed only for sorting
    pub time: String,
    pub description: String,
    pub payment_total: Option<f64>,
    pub taxi_total: Option<f64>,
    pub shift_total: Option<f64>,
    pub charge: Option<f64>,
    pub eftpos: Option<f64>,
    pub ihail: Option<f64>,
    pub eticket: Option<f64>,
    pub tss: Option<f64>,
}

impl Record {
    /// Time of day for ordering; unparseable times sort as midnight
    pub fn time_of_day(&self) -> NaiveTime {
        NaiveTime::parse_from_str(&self.time, RECORD_TIME_FORMAT)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Chronological sort key `(date, time)`
    pub fn sort_key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time_of_day())
    }
}

// =============================================================================
// Taxi Group
// =============================================================================

/// All retained data for one taxi across every input file
///
/// TaxiTotal rows never enter `records`; their values are absorbed into
/// `total` and the per-date `day_totals` map, which the EFTPOS report uses
/// to synthesize its per-date summary lines.
#[derive(Debug, Clone, Default)]
pub struct TaxiGroup {
    /// Detail and ShiftTotal rows in display order
    pub records: Vec<Record>,

    /// Running sum of TaxiTotal values across all input files
    pub total: f64,

    /// Absorbed TaxiTotal sums keyed by the contributing row's date
    pub day_totals: BTreeMap<NaiveDate, f64>,
}

impl TaxiGroup {
    /// Absorb a TaxiTotal contribution for a given date (missing value = 0)
    pub fn absorb_taxi_total(&mut self, date: NaiveDate, value: Option<f64>) {
        let amount = value.unwrap_or(0.0);
        self.total += amount;
        *self.day_totals.entry(date).or_insert(0.0) += amount;
    }

    /// Sort the display sequence ascending by `(date, time)`
    ///
    /// The sort is stable, so rows with equal keys (including rows whose
    /// time failed to parse) keep their relative input order.
    pub fn sort_records(&mut self) {
        self.records.sort_by_key(|r| r.sort_key());
    }

    /// Sum of `taxi_total` over Detail rows (headline fallback)
    pub fn detail_taxi_total_sum(&self) -> f64 {
        self.records
            .iter()
            .filter(|r| r.tag == RowTag::Detail)
            .filter_map(|r| r.taxi_total)
            .sum()
    }

    /// Sum of TSS values over Detail rows, if any row carries one
    pub fn detail_tss_sum(&self) -> Option<f64> {
        let values: Vec<f64> = self
            .records
            .iter()
            .filter(|r| r.tag == RowTag::Detail)
            .filter_map(|r| r.tss)
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum())
        }
    }

    /// True when the group holds no display rows and no absorbed totals
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.day_totals.is_empty() && self.total == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(date: NaiveDate, time: &str, taxi_total: Option<f64>) -> Record {
        Record {
            tag: RowTag::Detail,
            reference: "REF".to_string(),
            date,
            time: time.to_string(),
            description: "Fare".to_string(),
            payment_total: None,
            taxi_total,
            shift_total: None,
            charge: None,
            eftpos: None,
            ihail: None,
            eticket: None,
            tss: None,
        }
    }

    #[test]
    fn test_row_tag_from_tag_field() {
        assert_eq!(RowTag::from_tag_field("D"), Some(RowTag::Detail));
        assert_eq!(RowTag::from_tag_field("S"), Some(RowTag::ShiftTotal));
        assert_eq!(RowTag::from_tag_field(" T "), Some(RowTag::TaxiTotal));
        // Only the uppercase letters are tags
        assert_eq!(RowTag::from_tag_field("t"), None);
        assert_eq!(RowTag::from_tag_field("d"), None);
        assert_eq!(RowTag::from_tag_field("X"), None);
        assert_eq!(RowTag::from_tag_field(""), None);
    }

    #[test]
    fn test_time_of_day_fallback() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();

        let parsed = detail(date, "14:30:05", None);
        assert_eq!(
            parsed.time_of_day(),
            NaiveTime::from_hms_opt(14, 30, 5).unwrap()
        );

        // Unparseable and empty times sort as midnight
        assert_eq!(detail(date, "bogus", None).time_of_day(), NaiveTime::MIN);
        assert_eq!(detail(date, "", None).time_of_day(), NaiveTime::MIN);
    }

    #[test]
    fn test_sort_records_orders_by_date_then_time() {
        let d1 = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();

        let mut group = TaxiGroup::default();
        group.records.push(detail(d2, "08:00:00", None));
        group.records.push(detail(d1, "23:59:59", None));
        group.records.push(detail(d1, "07:15:00", None));
        group.sort_records();

        let keys: Vec<_> = group.records.iter().map(|r| r.sort_key()).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(group.records[0].time, "07:15:00");
    }

    #[test]
    fn test_sort_is_stable_for_unparseable_times() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();

        let mut group = TaxiGroup::default();
        let mut first = detail(date, "??", None);
        first.reference = "A".to_string();
        let mut second = detail(date, "not a time", None);
        second.reference = "B".to_string();
        group.records.push(first);
        group.records.push(second);
        group.sort_records();

        // Both sort as midnight on the same date; input order is preserved
        assert_eq!(group.records[0].reference, "A");
        assert_eq!(group.records[1].reference, "B");
    }

    #[test]
    fn test_absorb_taxi_total() {
        let d1 = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();

        let mut group = TaxiGroup::default();
        group.absorb_taxi_total(d1, Some(100.0));
        group.absorb_taxi_total(d1, Some(50.0));
        group.absorb_taxi_total(d2, None);

        assert_eq!(group.total, 150.0);
        assert_eq!(group.day_totals[&d1], 150.0);
        assert_eq!(group.day_totals[&d2], 0.0);
        assert!(!group.is_empty());
    }

    #[test]
    fn test_detail_sums() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let mut group = TaxiGroup::default();
        group.records.push(detail(date, "", Some(10.0)));
        group.records.push(detail(date, "", Some(20.0)));
        group.records.push(detail(date, "", None));

        assert_eq!(group.detail_taxi_total_sum(), 30.0);
        assert_eq!(group.detail_tss_sum(), None);

        let mut with_tss = detail(date, "", None);
        with_tss.tss = Some(5.5);
        group.records.push(with_tss);
        assert_eq!(group.detail_tss_sum(), Some(5.5));
    }

    #[test]
    fn test_empty_group() {
        assert!(TaxiGroup::default().is_empty());
    }
}
