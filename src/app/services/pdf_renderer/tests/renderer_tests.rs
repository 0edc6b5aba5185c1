//! Rendering smoke tests
//!
//! The renderer's geometry is not asserted here; these tests confirm a
//! well-formed PDF lands on disk for small and multi-page documents.

use chrono::NaiveDate;
use std::fs;
use tempfile::TempDir;

use crate::app::services::pdf_renderer::{PdfRenderer, StatementRenderer};
use crate::app::services::report_builder::StatementDocument;
use crate::constants::EFTPOS_COLUMNS;

fn sample_document(row_count: usize) -> StatementDocument {
    let period_start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let period_end = NaiveDate::from_ymd_opt(2025, 9, 7).unwrap();
    let issued = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();

    let mut document = StatementDocument::new(
        "EFTPOS Statement",
        "ABN 95 610 943 934",
        "TX68",
        issued,
        1234.56,
        period_start,
        period_end,
        EFTPOS_COLUMNS,
    );

    for i in 0..row_count {
        document.push_row(vec![
            format!("REF{i:04}"),
            "01/09/2025".to_string(),
            "08:15:00".to_string(),
            "EFTPOS PAYMENT".to_string(),
            "45.50".to_string(),
            String::new(),
            "1.20".to_string(),
            "44.30".to_string(),
            String::new(),
            String::new(),
        ]);
    }
    document.push_bold_row(vec![
        String::new(),
        "01/09/2025".to_string(),
        String::new(),
        "TaxiTotal".to_string(),
        "1,234.56".to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
    ]);

    document
}

#[test]
fn test_render_writes_pdf_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("TX68_20250901_EFTPOS_.pdf");

    let renderer = PdfRenderer::new(None);
    renderer.render(&sample_document(5), &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.len() > 500);
}

#[test]
fn test_render_paginates_long_documents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("long.pdf");

    let renderer = PdfRenderer::new(None);
    renderer.render(&sample_document(200), &path).unwrap();

    let doc = lopdf::Document::load(&path).unwrap();
    assert!(doc.get_pages().len() > 1);
}

#[test]
fn test_render_missing_logo_is_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_logo.pdf");

    let renderer = PdfRenderer::new(Some(dir.path().join("nonexistent.png")));
    renderer.render(&sample_document(3), &path).unwrap();

    assert!(path.exists());
}

#[test]
fn test_render_unwritable_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("nested").join("out.pdf");

    let renderer = PdfRenderer::new(None);
    let result = renderer.render(&sample_document(1), &path);

    assert!(matches!(result, Err(crate::Error::Io { .. })));
}

#[test]
fn test_render_empty_table_still_produces_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.pdf");

    let renderer = PdfRenderer::new(None);
    renderer.render(&sample_document(0), &path).unwrap();

    let doc = lopdf::Document::load(&path).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}
