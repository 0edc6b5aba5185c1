//! EFTPOS statement variant
//!
//! Emits the full ten-column transaction table, day by day, and closes
//! each date that absorbed TaxiTotal contributions with a synthetic bold
//! summary line carrying that date's sum. The headline total is the
//! absorbed TaxiTotal aggregate, falling back to the sum of Detail rows'
//! taxi totals when the exports carried no TaxiTotal rows at all.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use super::model::StatementDocument;
use crate::app::models::{Record, TaxiGroup};
use crate::app::services::statement_parser::normalize::format_money;
use crate::constants::{EFTPOS_COLUMNS, EFTPOS_TITLE, RECORD_DATE_FORMAT, TAXI_TOTAL_LABEL};

/// Build the EFTPOS statement document for one taxi group
pub fn build_eftpos_statement(
    taxi: &str,
    group: &TaxiGroup,
    period_start: NaiveDate,
    period_end: NaiveDate,
    date_issued: NaiveDate,
    business_number: &str,
) -> StatementDocument {
    let total = if group.day_totals.is_empty() {
        group.detail_taxi_total_sum()
    } else {
        group.total
    };

    let mut document = StatementDocument::new(
        EFTPOS_TITLE,
        business_number,
        taxi,
        date_issued,
        total,
        period_start,
        period_end,
        EFTPOS_COLUMNS,
    );

    let mut by_date: BTreeMap<NaiveDate, Vec<&Record>> = BTreeMap::new();
    for record in &group.records {
        by_date.entry(record.date).or_default().push(record);
    }

    // Dates that only ever carried a TaxiTotal row still get a summary line
    let days: BTreeSet<NaiveDate> = by_date
        .keys()
        .chain(group.day_totals.keys())
        .copied()
        .collect();

    for day in days {
        if let Some(records) = by_date.get(&day) {
            for record in records {
                document.push_row(vec![
                    record.reference.clone(),
                    record.date.format(RECORD_DATE_FORMAT).to_string(),
                    record.time.clone(),
                    record.description.clone(),
                    format_money(record.taxi_total),
                    format_money(record.shift_total),
                    format_money(record.charge),
                    format_money(record.eftpos),
                    format_money(record.ihail),
                    format_money(record.eticket),
                ]);
            }
        }

        if let Some(&day_total) = group.day_totals.get(&day) {
            document.push_bold_row(vec![
                String::new(),
                day.format(RECORD_DATE_FORMAT).to_string(),
                String::new(),
                TAXI_TOTAL_LABEL.to_string(),
                format_money(Some(day_total)),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ]);
        }
    }

    document
}
