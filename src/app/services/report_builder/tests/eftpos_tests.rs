//! Tests for the EFTPOS statement variant

use chrono::NaiveDate;

use crate::app::models::{Record, RowTag, TaxiGroup};
use crate::app::services::report_builder::build_eftpos_statement;
use crate::constants::{EFTPOS_COLUMNS, TAXI_TOTAL_LABEL};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn detail(d: NaiveDate, reference: &str, taxi_total: Option<f64>) -> Record {
    Record {
        tag: RowTag::Detail,
        reference: reference.to_string(),
        date: d,
        time: "08:00:00".to_string(),
        description: "EFTPOS PAYMENT".to_string(),
        payment_total: None,
        taxi_total,
        shift_total: None,
        charge: Some(0.50),
        eftpos: taxi_total,
        ihail: None,
        eticket: None,
        tss: None,
    }
}

fn build(group: &TaxiGroup) -> crate::app::services::report_builder::StatementDocument {
    build_eftpos_statement(
        "TX68",
        group,
        date(2025, 9, 1),
        date(2025, 9, 7),
        date(2025, 9, 8),
        "ABN 95 610 943 934",
    )
}

#[test]
fn test_header_and_period_label() {
    let mut group = TaxiGroup::default();
    group.absorb_taxi_total(date(2025, 9, 1), Some(1234.5));

    let document = build(&group);

    assert_eq!(document.header.taxi, "TX68");
    assert_eq!(document.header.total, "1,234.50");
    assert_eq!(document.header.date_issued, "08-Sep-2025");
    assert_eq!(
        document.period_label,
        "Monday 01/09/2025 - Sunday 07/09/2025"
    );
    assert_eq!(document.columns.len(), EFTPOS_COLUMNS.len());
}

#[test]
fn test_bold_summary_row_per_date() {
    let mut group = TaxiGroup::default();
    group.records.push(detail(date(2025, 9, 1), "REF1", Some(45.5)));
    group.records.push(detail(date(2025, 9, 1), "REF2", Some(30.0)));
    group.records.push(detail(date(2025, 9, 2), "REF3", Some(20.0)));
    group.absorb_taxi_total(date(2025, 9, 1), Some(75.5));
    group.absorb_taxi_total(date(2025, 9, 2), Some(20.0));

    let document = build(&group);

    // Two detail rows, a bold summary, one detail row, a bold summary
    assert_eq!(document.rows.len(), 5);
    assert_eq!(document.bold_rows, vec![2, 4]);

    let first_summary = &document.rows[2];
    assert_eq!(first_summary[1], "01/09/2025");
    assert_eq!(first_summary[3], TAXI_TOTAL_LABEL);
    assert_eq!(first_summary[4], "75.50");
    assert!(first_summary[0].is_empty());

    let second_summary = &document.rows[4];
    assert_eq!(second_summary[1], "02/09/2025");
    assert_eq!(second_summary[4], "20.00");
}

#[test]
fn test_summary_only_date_still_gets_a_row() {
    let mut group = TaxiGroup::default();
    group.records.push(detail(date(2025, 9, 1), "REF1", Some(10.0)));
    group.absorb_taxi_total(date(2025, 9, 1), Some(10.0));
    // A date that only ever carried a TaxiTotal row
    group.absorb_taxi_total(date(2025, 9, 3), Some(99.0));

    let document = build(&group);

    assert_eq!(document.rows.len(), 3);
    let orphan_summary = &document.rows[2];
    assert_eq!(orphan_summary[1], "03/09/2025");
    assert_eq!(orphan_summary[4], "99.00");
}

#[test]
fn test_headline_falls_back_to_detail_taxi_totals() {
    let mut group = TaxiGroup::default();
    group.records.push(detail(date(2025, 9, 1), "REF1", Some(45.5)));
    group.records.push(detail(date(2025, 9, 2), "REF2", Some(4.5)));

    let document = build(&group);

    assert_eq!(document.header.total, "50.00");
    assert!(document.bold_rows.is_empty());
}

#[test]
fn test_row_cells_match_column_count() {
    let mut group = TaxiGroup::default();
    group.records.push(detail(date(2025, 9, 1), "REF1", Some(45.5)));
    group.absorb_taxi_total(date(2025, 9, 1), Some(45.5));

    let document = build(&group);
    for row in &document.rows {
        assert_eq!(row.len(), EFTPOS_COLUMNS.len());
    }
}

#[test]
fn test_absent_money_cells_are_blank() {
    let mut group = TaxiGroup::default();
    let mut record = detail(date(2025, 9, 1), "REF1", None);
    record.charge = None;
    record.eftpos = None;
    group.records.push(record);

    let document = build(&group);
    let row = &document.rows[0];
    // Taxi total, shift total, charge, EFTPOS, iHail, Eticket all absent
    for cell in &row[4..] {
        assert!(cell.is_empty());
    }
}
