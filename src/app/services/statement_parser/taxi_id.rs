//! Taxi identifier validation and carry-forward tracking
//!
//! Summary rows often omit the taxi column and inherit the most recent
//! valid identifier seen in the file. Spreadsheet artifacts (stray dates,
//! short numeric noise) must not create bogus taxi groups or corrupt the
//! carried-forward identifier, so candidates are filtered before they can
//! become the current taxi.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::UNKNOWN_TAXI;

static DATE_SHAPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}[-/ ]\d{1,2}[-/ ]\d{2,4}$").expect("valid regex"));

static LETTERS_THEN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+\d+$").expect("valid regex"));

static NUMERIC_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3,}$").expect("valid regex"));

/// True when a trimmed string looks like a date rather than an identifier
pub fn looks_like_date(candidate: &str) -> bool {
    DATE_SHAPED.is_match(candidate.trim())
}

/// Check whether a candidate string is a usable taxi identifier
///
/// Valid identifiers are non-empty after trimming, not date-shaped, and
/// either an alphabetic prefix followed by digits (`TX68`, `TC396`) or a
/// pure-digit string of at least three digits.
pub fn is_valid_taxi_id(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() || looks_like_date(trimmed) {
        return false;
    }
    LETTERS_THEN_DIGITS.is_match(trimmed) || NUMERIC_ID.is_match(trimmed)
}

/// Carry-forward accumulator for the "current taxi" within one file
///
/// Threaded explicitly through the per-file fold rather than held as
/// shared state, so the row classifier stays pure and testable.
#[derive(Debug, Default)]
pub struct TaxiTracker {
    current: Option<String>,
}

impl TaxiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the group key for a row given its taxi field
    ///
    /// A valid candidate becomes the new current identifier; rows with an
    /// invalid or empty candidate inherit the current one. With no valid
    /// identifier seen yet, the row resolves to the `UNKNOWN` sentinel.
    pub fn resolve(&mut self, candidate: &str) -> String {
        let trimmed = candidate.trim();
        if is_valid_taxi_id(trimmed) {
            self.current = Some(trimmed.to_string());
        }

        match &self.current {
            Some(taxi) if is_valid_taxi_id(taxi) => taxi.clone(),
            _ => UNKNOWN_TAXI.to_string(),
        }
    }
}
