//! Statement model construction for the two report variants
//!
//! Shapes a taxi group's records into the structured document consumed by
//! the renderer: day-grouped rows, a synthetic bold per-date taxi total
//! line (EFTPOS variant), and the headline total computed under each
//! variant's policy.
//!
//! - [`model`] - The renderer-facing statement document structure
//! - [`eftpos`] - EFTPOS statement variant with per-date taxi totals
//! - [`tss`] - TSS statement variant with TSS-based headline totals

pub mod eftpos;
pub mod model;
pub mod tss;

#[cfg(test)]
pub mod tests;

pub use eftpos::build_eftpos_statement;
pub use model::{StatementDocument, StatementHeader};
pub use tss::build_tss_statement;
