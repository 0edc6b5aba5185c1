//! Header detection and field-to-column resolution
//!
//! Exports come in two shapes: newer files carry a header row with
//! recognizable (if inconsistently spelled) column names, older files
//! carry bare data in a fixed legacy layout. Resolution strategy is
//! chosen once per file: named lookup when a header has been detected,
//! positional fallback otherwise. Aliases are resolved into concrete
//! column indices at detection time so per-row access is an index lookup,
//! not a string search.

use csv::StringRecord;
use std::collections::HashMap;

use super::normalize::normalize_key;
use crate::constants::{aliases, positional};

/// Logical fields extracted from an export row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Tag,
    Taxi,
    Reference,
    Date,
    Time,
    Description,
    PaymentTotal,
    TaxiTotal,
    ShiftTotal,
    Charge,
    Eftpos,
    Ihail,
    Eticket,
    Tss,
}

impl Field {
    /// All logical fields with their accepted normalized header aliases
    pub fn alias_table() -> &'static [(Field, &'static [&'static str])] {
        &[
            (Field::Tag, aliases::TAG),
            (Field::Taxi, aliases::TAXI),
            (Field::Reference, aliases::REFERENCE),
            (Field::Date, aliases::DATE),
            (Field::Time, aliases::TIME),
            (Field::Description, aliases::DESCRIPTION),
            (Field::PaymentTotal, aliases::PAYMENT_TOTAL),
            (Field::TaxiTotal, aliases::TAXI_TOTAL),
            (Field::ShiftTotal, aliases::SHIFT_TOTAL),
            (Field::Charge, aliases::CHARGE),
            (Field::Eftpos, aliases::EFTPOS),
            (Field::Ihail, aliases::IHAIL),
            (Field::Eticket, aliases::ETICKET),
            (Field::Tss, aliases::TSS),
        ]
    }

    /// Fixed column index in the legacy tag-schema layout
    fn positional_index(self) -> usize {
        match self {
            Field::Tag => positional::TAG,
            Field::Taxi => positional::TAXI,
            Field::Reference => positional::REFERENCE,
            Field::Date => positional::DATE,
            Field::Time => positional::TIME,
            Field::Description => positional::DESCRIPTION,
            Field::PaymentTotal => positional::PAYMENT_TOTAL,
            Field::TaxiTotal => positional::TAXI_TOTAL,
            Field::ShiftTotal => positional::SHIFT_TOTAL,
            Field::Charge => positional::CHARGE,
            Field::Eftpos => positional::EFTPOS,
            Field::Ihail => positional::IHAIL,
            Field::Eticket => positional::ETICKET,
            Field::Tss => positional::TSS,
        }
    }
}

/// Per-file column resolution strategy
///
/// `Named` holds the alias table resolved against a detected header row;
/// `Positional` reads the fixed legacy layout. Both guard every access by
/// row length, so short rows yield absent fields instead of errors.
#[derive(Debug, Clone)]
pub enum ColumnResolver {
    /// Field lookup via indices resolved from a detected header row
    Named(HashMap<Field, usize>),
    /// Fixed-position lookup for files with no recognizable header
    Positional,
}

impl ColumnResolver {
    /// Try to interpret a row as a header row
    ///
    /// A row is accepted as a header iff it exposes both a date-like and a
    /// description-like column under the normalized alias table. Returns
    /// the resolved named strategy, or `None` when the row is data.
    pub fn detect_header(row: &StringRecord) -> Option<Self> {
        let normalized: HashMap<String, usize> = row
            .iter()
            .enumerate()
            .map(|(index, cell)| (normalize_key(cell), index))
            .collect();

        let mut indices = HashMap::new();
        for (field, names) in Field::alias_table() {
            if let Some(&index) = names
                .iter()
                .find_map(|name| normalized.get(&normalize_key(name)))
            {
                indices.insert(*field, index);
            }
        }

        if indices.contains_key(&Field::Date) && indices.contains_key(&Field::Description) {
            Some(ColumnResolver::Named(indices))
        } else {
            None
        }
    }

    /// Get the raw (trimmed) value of a logical field, if the row carries it
    pub fn get<'a>(&self, row: &'a StringRecord, field: Field) -> Option<&'a str> {
        let index = match self {
            ColumnResolver::Named(indices) => *indices.get(&field)?,
            ColumnResolver::Positional => field.positional_index(),
        };

        row.get(index).map(str::trim)
    }

    /// Get a logical field as an owned string, empty when absent
    pub fn get_text(&self, row: &StringRecord, field: Field) -> String {
        self.get(row, field).unwrap_or_default().to_string()
    }
}
