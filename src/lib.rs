//! Taxi Statements Library
//!
//! A Rust library for turning heterogeneous CSV exports from taxi payment
//! terminals into per-taxi PDF statements for a billing period.
//!
//! This library provides tools for:
//! - Schema-tolerant CSV row classification (header-based or positional)
//! - Grouping transaction rows by taxi identifier with carry-forward state
//! - Aggregating taxi totals across multiple input files
//! - Building EFTPOS and TSS statement models with day-grouped totals
//! - Rendering paginated PDF statements with an optional logo

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod pdf_renderer;
        pub mod report_builder;
        pub mod statement_parser;
        pub mod storage;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Record, RowTag, TaxiGroup};
pub use app::services::statement_parser::{ParseOutcome, ParseStats};
pub use config::Config;

/// Result type alias for the taxi statements processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for statement processing operations
///
/// Parsing-level anomalies (malformed numbers, dates, or identifiers) are
/// recovered via fallback values inside the parser and never surface here.
/// Only I/O, configuration, and rendering failures become hard errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading error
    #[error("CSV error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Upload or output storage error
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// PDF rendering error
    #[error("PDF rendering error: {message}")]
    PdfRender {
        message: String,
        #[source]
        source: Option<lopdf::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Nothing to generate after parsing
    #[error("No statement data found: {message}")]
    NoData { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a PDF rendering error
    pub fn pdf_render(message: impl Into<String>, source: Option<lopdf::Error>) -> Self {
        Self::PdfRender {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a no-data error
    pub fn no_data(message: impl Into<String>) -> Self {
        Self::NoData {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV reading failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(error: lopdf::Error) -> Self {
        Self::PdfRender {
            message: "PDF document assembly failed".to_string(),
            source: Some(error),
        }
    }
}
