//! TSS statement variant
//!
//! A trimmed six-column table with no taxi-total column. The headline
//! total sums each Detail row's TSS field; when no row carries a TSS
//! value the total falls back to the taxi-total figures (absorbed
//! aggregate plus Detail taxi totals), matching the EFTPOS data the
//! exports actually provided.

use chrono::NaiveDate;
use tracing::info;

use super::model::StatementDocument;
use crate::app::models::TaxiGroup;
use crate::app::services::statement_parser::normalize::format_money;
use crate::constants::{RECORD_DATE_FORMAT, TSS_COLUMNS, TSS_TITLE};

/// Build the TSS statement document for one taxi group
pub fn build_tss_statement(
    taxi: &str,
    group: &TaxiGroup,
    period_start: NaiveDate,
    period_end: NaiveDate,
    date_issued: NaiveDate,
    business_number: &str,
) -> StatementDocument {
    let total = match group.detail_tss_sum() {
        Some(tss_total) => tss_total,
        None => {
            let fallback = group.total + group.detail_taxi_total_sum();
            info!(
                "No TSS values for taxi {}; headline total falls back to taxi totals ({})",
                taxi,
                format_money(Some(fallback))
            );
            fallback
        }
    };

    let mut document = StatementDocument::new(
        TSS_TITLE,
        business_number,
        taxi,
        date_issued,
        total,
        period_start,
        period_end,
        TSS_COLUMNS,
    );

    // Records are already sorted by (date, time); day grouping is implicit
    for record in &group.records {
        document.push_row(vec![
            record.reference.clone(),
            record.date.format(RECORD_DATE_FORMAT).to_string(),
            record.time.clone(),
            record.description.clone(),
            format_money(record.shift_total),
            format_money(record.tss),
        ]);
    }

    document
}
