//! Tests for the PDF renderer

pub mod renderer_tests;
