//! Tests for statement document construction

pub mod eftpos_tests;
pub mod tss_tests;
