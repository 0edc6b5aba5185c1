//! Header-key and monetary-string normalization
//!
//! Terminal exports disagree on header spelling (`Taxi Total ($)`,
//! `$TaxiTotal`, non-breaking spaces) and on numeric formatting
//! (currency symbols, thousands separators). These helpers reduce both
//! to canonical forms so the rest of the parser can match tolerantly.

/// Normalize a header label or value for tolerant matching
///
/// Lowercases and strips every non-ASCII-alphanumeric character, which
/// handles currency symbols, punctuation variants, and non-breaking spaces.
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Parse a monetary field into a value, or "no value"
///
/// Strips thousands separators and any character outside digits, minus,
/// and decimal point before parsing. An empty or symbol-only result
/// yields `None` rather than an error: absence is meaningful and distinct
/// from zero.
pub fn parse_money(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_ascii_lowercase();
    if lowered == "nan" || lowered == "null" {
        return None;
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();

    match cleaned.as_str() {
        "" | "-" | "." | "-." => None,
        _ => cleaned.parse::<f64>().ok(),
    }
}

/// Format a monetary value with thousands separators and two decimals
///
/// `None` formats as an empty cell, keeping "no value" visually distinct
/// from `0.00` in the statement table.
pub fn format_money(value: Option<f64>) -> String {
    let Some(v) = value else {
        return String::new();
    };

    let formatted = format!("{:.2}", v.abs());
    let (whole, cents) = formatted
        .split_once('.')
        .expect("two-decimal format always contains a point");

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if v < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}
