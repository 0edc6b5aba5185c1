//! PDF rendering for statement documents
//!
//! The rendering seam is the [`StatementRenderer`] trait: report building
//! hands over a fully shaped [`StatementDocument`] and never learns how
//! pages are laid out. The bundled implementation assembles landscape A4
//! pages with lopdf, repeating the table header on every page and
//! embedding an optional logo at fixed maximum dimensions.

pub mod renderer;

#[cfg(test)]
pub mod tests;

pub use renderer::PdfRenderer;

use std::path::Path;

use crate::Result;
use crate::app::services::report_builder::StatementDocument;

/// Renderer contract consumed by the generation pipeline
pub trait StatementRenderer {
    /// Produce a paginated document for the statement at the given path
    fn render(&self, document: &StatementDocument, output_path: &Path) -> Result<()>;
}
