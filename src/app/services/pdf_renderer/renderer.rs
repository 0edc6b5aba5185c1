//! Landscape A4 statement renderer built on lopdf
//!
//! Layout mirrors the statement format the billing office expects: logo
//! and business number top-left, taxi number / date issued / total
//! top-right, the period line, then the transaction table with the
//! column header repeated on every page and summary rows set in bold.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::StatementRenderer;
use crate::app::services::report_builder::StatementDocument;
use crate::constants::LOGO_MAX_SIZE_MM;
use crate::{Error, Result};

// Landscape A4 in points
const PAGE_WIDTH: f32 = 841.89;
const PAGE_HEIGHT: f32 = 595.28;
const MARGIN: f32 = 51.0; // 18mm

const TITLE_SIZE: f32 = 14.0;
const LABEL_SIZE: f32 = 10.0;
const TABLE_SIZE: f32 = 8.0;
const ROW_LEADING: f32 = 13.0;

const POINTS_PER_MM: f32 = 2.834_646;

/// Approximate Helvetica advance width as a fraction of the font size
const AVG_CHAR_WIDTH: f32 = 0.52;

/// Statement renderer producing paginated PDF files
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    logo_path: Option<PathBuf>,
}

impl PdfRenderer {
    /// Create a renderer; the logo is embedded when the path exists
    pub fn new(logo_path: Option<PathBuf>) -> Self {
        Self { logo_path }
    }

    /// Load the logo as an RGB image XObject, if one is configured
    fn load_logo(&self) -> Option<(Stream, f32, f32)> {
        let path = self.logo_path.as_ref().filter(|p| p.exists())?;

        let image = match image::open(path) {
            Ok(image) => image.to_rgb8(),
            Err(e) => {
                debug!("Ignoring unreadable logo {}: {}", path.display(), e);
                return None;
            }
        };

        let (width, height) = image.dimensions();
        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            image.into_raw(),
        );

        // Shrink to the fixed maximum box, never enlarge
        let (max_w, max_h) = LOGO_MAX_SIZE_MM;
        let scale = (max_w * POINTS_PER_MM / width as f32)
            .min(max_h * POINTS_PER_MM / height as f32)
            .min(1.0);

        Some((stream, width as f32 * scale, height as f32 * scale))
    }
}

impl StatementRenderer for PdfRenderer {
    fn render(&self, document: &StatementDocument, output_path: &Path) -> Result<()> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_regular = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let font_bold = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
        });

        let logo = self.load_logo();
        let mut resources = dictionary! {
            "Font" => dictionary! {
                "F1" => font_regular,
                "F2" => font_bold,
            },
        };
        let logo_size = logo.map(|(stream, w, h)| {
            let logo_id = doc.add_object(stream);
            resources.set("XObject", dictionary! { "Im1" => logo_id });
            (w, h)
        });
        let resources_id = doc.add_object(resources);

        let column_width =
            (PAGE_WIDTH - 2.0 * MARGIN) / document.columns.len().max(1) as f32;

        let mut page_ids = Vec::new();
        let mut ops: Vec<Operation> = Vec::new();
        let mut cursor = PAGE_HEIGHT - MARGIN;

        // First-page header block
        cursor = draw_statement_header(&mut ops, document, logo_size, cursor);
        draw_table_header(&mut ops, &document.columns, column_width, cursor);
        cursor -= ROW_LEADING;

        for (index, row) in document.rows.iter().enumerate() {
            if cursor < MARGIN + ROW_LEADING {
                // Page is full; start a new one with a repeated table header
                page_ids.push(finish_page(&mut doc, pages_id, std::mem::take(&mut ops))?);
                cursor = PAGE_HEIGHT - MARGIN;
                draw_table_header(&mut ops, &document.columns, column_width, cursor);
                cursor -= ROW_LEADING;
            }

            let font = if document.bold_rows.contains(&index) {
                "F2"
            } else {
                "F1"
            };
            for (col, cell) in row.iter().enumerate() {
                let x = MARGIN + col as f32 * column_width;
                draw_text(&mut ops, font, TABLE_SIZE, x, cursor, &fit_text(cell, column_width, TABLE_SIZE));
            }
            cursor -= ROW_LEADING;
        }

        page_ids.push(finish_page(&mut doc, pages_id, ops)?);

        let kids: Vec<Object> = page_ids.iter().map(|&id| id.into()).collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_ids.len() as i64,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    PAGE_WIDTH.into(),
                    PAGE_HEIGHT.into(),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        doc.save(output_path).map_err(|e| {
            Error::io(
                format!("Failed to write statement to {}", output_path.display()),
                e,
            )
        })?;

        info!(
            "Rendered statement with {} rows over {} pages: {}",
            document.rows.len(),
            page_ids.len(),
            output_path.display()
        );
        Ok(())
    }
}

/// Close out a page's content stream and register the page object
fn finish_page(
    doc: &mut Document,
    pages_id: lopdf::ObjectId,
    operations: Vec<Operation>,
) -> Result<lopdf::ObjectId> {
    let content = Content { operations };
    let stream = Stream::new(dictionary! {}, content.encode()?);
    let content_id = doc.add_object(stream);

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    }))
}

/// Draw the statement header block; returns the cursor below it
fn draw_statement_header(
    ops: &mut Vec<Operation>,
    document: &StatementDocument,
    logo_size: Option<(f32, f32)>,
    top: f32,
) -> f32 {
    let mut left_cursor = top;

    if let Some((width, height)) = logo_size {
        let y = top - height;
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new(
            "cm",
            vec![
                width.into(),
                0.into(),
                0.into(),
                height.into(),
                MARGIN.into(),
                y.into(),
            ],
        ));
        ops.push(Operation::new("Do", vec!["Im1".into()]));
        ops.push(Operation::new("Q", vec![]));
        left_cursor = y - 14.0;
    }

    draw_text(
        ops,
        "F1",
        LABEL_SIZE,
        MARGIN,
        left_cursor,
        &document.header.business_number,
    );
    left_cursor -= 20.0;
    draw_text(
        ops,
        "F2",
        TITLE_SIZE,
        MARGIN,
        left_cursor,
        &document.header.title,
    );

    // Right-side label/value pairs
    let label_x = PAGE_WIDTH - MARGIN - 190.0;
    let value_x = label_x + 95.0;
    let mut right_cursor = top - LABEL_SIZE;
    for (label, value) in [
        ("Taxi number", document.header.taxi.as_str()),
        ("Date issued", document.header.date_issued.as_str()),
        ("Total", document.header.total.as_str()),
    ] {
        draw_text(ops, "F2", LABEL_SIZE, label_x, right_cursor, label);
        draw_text(ops, "F1", LABEL_SIZE, value_x, right_cursor, value);
        right_cursor -= 16.0;
    }

    let below = left_cursor.min(right_cursor) - 22.0;
    draw_text(ops, "F1", LABEL_SIZE, MARGIN, below, &document.period_label);

    below - 22.0
}

/// Draw the bold column header row with an underline
fn draw_table_header(ops: &mut Vec<Operation>, columns: &[String], column_width: f32, y: f32) {
    for (col, label) in columns.iter().enumerate() {
        let x = MARGIN + col as f32 * column_width;
        draw_text(ops, "F2", TABLE_SIZE, x, y, &fit_text(label, column_width, TABLE_SIZE));
    }

    let line_y = y - 3.0;
    ops.push(Operation::new("m", vec![MARGIN.into(), line_y.into()]));
    ops.push(Operation::new(
        "l",
        vec![(PAGE_WIDTH - MARGIN).into(), line_y.into()],
    ));
    ops.push(Operation::new("S", vec![]));
}

/// Emit one positioned text run
fn draw_text(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, text: &str) {
    if text.is_empty() {
        return;
    }
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    ops.push(Operation::new("ET", vec![]));
}

/// Truncate text to roughly fit a column, with an ellipsis when cut
fn fit_text(text: &str, column_width: f32, size: f32) -> String {
    let max_chars = ((column_width - 4.0) / (AVG_CHAR_WIDTH * size)).max(1.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(2)).collect();
    format!("{}..", kept)
}
