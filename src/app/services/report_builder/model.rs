//! Renderer-facing statement document structure
//!
//! This is the contract between report building and rendering: header
//! metadata, a period label, column labels, pre-formatted table cells
//! (money cells already formatted or blank), and the indices of rows the
//! renderer must emphasize.

use chrono::NaiveDate;

use crate::app::services::statement_parser::normalize::format_money;
use crate::constants::{ISSUED_DATE_FORMAT, PERIOD_LABEL_FORMAT};

/// Header metadata shown at the top of a statement
#[derive(Debug, Clone)]
pub struct StatementHeader {
    /// Statement title line (EFTPOS or TSS variant)
    pub title: String,

    /// Business number printed under the logo
    pub business_number: String,

    /// Taxi identifier the statement belongs to
    pub taxi: String,

    /// Issue date, formatted for display
    pub date_issued: String,

    /// Headline total, formatted for display
    pub total: String,
}

/// Structured report model handed to the renderer
#[derive(Debug, Clone)]
pub struct StatementDocument {
    pub header: StatementHeader,

    /// Period line, e.g. `Monday 01/09/2025 - Sunday 07/09/2025`
    pub period_label: String,

    /// Column labels for the statement table
    pub columns: Vec<String>,

    /// Table rows; money cells are pre-formatted or blank
    pub rows: Vec<Vec<String>>,

    /// Indices into `rows` the renderer must set in bold
    pub bold_rows: Vec<usize>,
}

impl StatementDocument {
    /// Build the shared document shell for either report variant
    pub fn new(
        title: &str,
        business_number: &str,
        taxi: &str,
        date_issued: NaiveDate,
        total: f64,
        period_start: NaiveDate,
        period_end: NaiveDate,
        columns: &[&str],
    ) -> Self {
        Self {
            header: StatementHeader {
                title: title.to_string(),
                business_number: business_number.to_string(),
                taxi: taxi.to_string(),
                date_issued: date_issued.format(ISSUED_DATE_FORMAT).to_string(),
                total: format_money(Some(total)),
            },
            period_label: format!(
                "{} - {}",
                period_start.format(PERIOD_LABEL_FORMAT),
                period_end.format(PERIOD_LABEL_FORMAT)
            ),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
            bold_rows: Vec::new(),
        }
    }

    /// Append a regular table row
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Append a row the renderer must set in bold
    pub fn push_bold_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
        self.bold_rows.push(self.rows.len() - 1);
    }
}
