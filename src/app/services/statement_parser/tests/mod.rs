//! Tests for the statement parser service

pub mod taxi_id_tests;
