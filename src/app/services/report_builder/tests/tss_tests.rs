//! Tests for the TSS statement variant

use chrono::NaiveDate;

use crate::app::models::{Record, RowTag, TaxiGroup};
use crate::app::services::report_builder::build_tss_statement;
use crate::constants::TSS_COLUMNS;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn detail(d: NaiveDate, tss: Option<f64>, taxi_total: Option<f64>) -> Record {
    Record {
        tag: RowTag::Detail,
        reference: "REF".to_string(),
        date: d,
        time: "09:30:00".to_string(),
        description: "FARE".to_string(),
        payment_total: None,
        taxi_total,
        shift_total: None,
        charge: None,
        eftpos: None,
        ihail: None,
        eticket: None,
        tss,
    }
}

fn build(group: &TaxiGroup) -> crate::app::services::report_builder::StatementDocument {
    build_tss_statement(
        "886",
        group,
        date(2025, 9, 1),
        date(2025, 9, 7),
        date(2025, 9, 8),
        "ABN 95 610 943 934",
    )
}

#[test]
fn test_headline_sums_detail_tss_values() {
    let mut group = TaxiGroup::default();
    group.records.push(detail(date(2025, 9, 1), Some(1.10), Some(45.5)));
    group.records.push(detail(date(2025, 9, 2), Some(0.90), Some(30.0)));
    // An absorbed taxi total must not leak into a TSS headline
    group.absorb_taxi_total(date(2025, 9, 1), Some(75.5));

    let document = build(&group);
    assert_eq!(document.header.total, "2.00");
}

#[test]
fn test_headline_falls_back_to_taxi_totals_without_tss() {
    let mut group = TaxiGroup::default();
    group.records.push(detail(date(2025, 9, 1), None, Some(45.5)));
    group.absorb_taxi_total(date(2025, 9, 1), Some(100.0));

    let document = build(&group);
    // Absorbed aggregate plus the Detail rows' taxi totals
    assert_eq!(document.header.total, "145.50");
}

#[test]
fn test_six_column_rows_without_summary_lines() {
    let mut group = TaxiGroup::default();
    group.records.push(detail(date(2025, 9, 1), Some(1.10), Some(45.5)));
    group.records.push(detail(date(2025, 9, 2), Some(0.90), Some(30.0)));
    group.absorb_taxi_total(date(2025, 9, 1), Some(75.5));

    let document = build(&group);

    assert_eq!(document.columns.len(), TSS_COLUMNS.len());
    assert_eq!(document.rows.len(), 2);
    assert!(document.bold_rows.is_empty());
    for row in &document.rows {
        assert_eq!(row.len(), TSS_COLUMNS.len());
    }

    let first = &document.rows[0];
    assert_eq!(first[1], "01/09/2025");
    assert_eq!(first[2], "09:30:00");
    assert_eq!(first[5], "1.10");
    // Shift total column blank for detail rows without one
    assert!(first[4].is_empty());
}

#[test]
fn test_shift_total_rows_appear_in_sequence() {
    let mut group = TaxiGroup::default();
    group.records.push(detail(date(2025, 9, 1), Some(1.10), None));
    group.records.push(Record {
        tag: RowTag::ShiftTotal,
        reference: String::new(),
        date: date(2025, 9, 1),
        time: "18:00:00".to_string(),
        description: "Shift Total".to_string(),
        payment_total: None,
        taxi_total: None,
        shift_total: Some(312.40),
        charge: None,
        eftpos: None,
        ihail: None,
        eticket: None,
        tss: None,
    });

    let document = build(&group);

    assert_eq!(document.rows.len(), 2);
    assert_eq!(document.rows[1][3], "Shift Total");
    assert_eq!(document.rows[1][4], "312.40");
}
