//! Tests for taxi identifier validation and carry-forward

use crate::app::services::statement_parser::taxi_id::{
    TaxiTracker, is_valid_taxi_id, looks_like_date,
};
use crate::constants::UNKNOWN_TAXI;

#[test]
fn test_valid_identifiers() {
    assert!(is_valid_taxi_id("TX68"));
    assert!(is_valid_taxi_id("TC396"));
    assert!(is_valid_taxi_id("m50"));
    assert!(is_valid_taxi_id("886"));
    assert!(is_valid_taxi_id("12345"));
    assert!(is_valid_taxi_id("  TX68  "));
}

#[test]
fn test_invalid_identifiers() {
    assert!(!is_valid_taxi_id(""));
    assert!(!is_valid_taxi_id("   "));
    assert!(!is_valid_taxi_id("12"));
    assert!(!is_valid_taxi_id("68TX"));
    assert!(!is_valid_taxi_id("TX-68"));
    assert!(!is_valid_taxi_id("TAXI"));
}

#[test]
fn test_date_shaped_strings_are_rejected() {
    assert!(looks_like_date("1/9/25"));
    assert!(looks_like_date("01-09-2025"));
    assert!(looks_like_date("1 9 2025"));
    assert!(!looks_like_date("TX68"));

    assert!(!is_valid_taxi_id("01/09/2025"));
    assert!(!is_valid_taxi_id("1-9-25"));
}

#[test]
fn test_tracker_carries_current_taxi_forward() {
    let mut tracker = TaxiTracker::new();

    assert_eq!(tracker.resolve("TC396"), "TC396");
    // Summary rows with no taxi inherit the current identifier
    assert_eq!(tracker.resolve(""), "TC396");
    assert_eq!(tracker.resolve("  "), "TC396");
    assert_eq!(tracker.resolve("TX68"), "TX68");
    assert_eq!(tracker.resolve(""), "TX68");
}

#[test]
fn test_tracker_ignores_invalid_candidates() {
    let mut tracker = TaxiTracker::new();
    tracker.resolve("TC396");

    // A stray date cell must not displace the current taxi
    assert_eq!(tracker.resolve("01/09/2025"), "TC396");
    assert_eq!(tracker.resolve("12"), "TC396");
}

#[test]
fn test_tracker_resolves_unknown_before_first_valid_id() {
    let mut tracker = TaxiTracker::new();

    assert_eq!(tracker.resolve(""), UNKNOWN_TAXI);
    assert_eq!(tracker.resolve("01/09/2025"), UNKNOWN_TAXI);
    assert_eq!(tracker.resolve("TX68"), "TX68");
}
