//! Application constants for the taxi statement processor
//!
//! This module contains the column alias tables, the legacy positional
//! layout, sentinel values, and formatting constants used throughout
//! the application.

// =============================================================================
// Taxi Identifiers
// =============================================================================

/// Sentinel group key for rows whose taxi identifier is missing or invalid
pub const UNKNOWN_TAXI: &str = "UNKNOWN";

// =============================================================================
// Date and Time Formats
// =============================================================================

/// Date format used in terminal export data rows (day/month/year)
pub const RECORD_DATE_FORMAT: &str = "%d/%m/%Y";

/// Time format used in terminal export data rows
pub const RECORD_TIME_FORMAT: &str = "%H:%M:%S";

/// Date format embedded in export file names (e.g. `export_20250915.csv`)
pub const FILENAME_DATE_FORMAT: &str = "%Y%m%d";

/// Date format for each end of the period label shown in the statement header
pub const PERIOD_LABEL_FORMAT: &str = "%A %d/%m/%Y";

/// Date format for the "Date issued" header field
pub const ISSUED_DATE_FORMAT: &str = "%d-%b-%Y";

/// Date component of generated statement file names
pub const OUTPUT_DATE_FORMAT: &str = "%Y%m%d";

// =============================================================================
// Column Aliases (normalized header names accepted per logical field)
// =============================================================================

/// Accepted normalized header aliases for each logical field
///
/// Header cells are normalized (lowercased, non-alphanumerics stripped)
/// before comparison, so `"Taxi Total ($)"` matches `taxitotal`.
pub mod aliases {
    pub const TAG: &[&str] = &["tag"];
    pub const TAXI: &[&str] = &["taxi", "taxinumber", "taxino", "taxi#"];
    pub const REFERENCE: &[&str] = &["reference", "ref", "refno"];
    pub const DATE: &[&str] = &["date", "trandate", "txndate"];
    pub const TIME: &[&str] = &["time", "trantime", "txntime"];
    pub const DESCRIPTION: &[&str] = &["description", "desc"];
    pub const PAYMENT_TOTAL: &[&str] = &["paymenttotal", "payment", "totalpayment"];
    pub const TAXI_TOTAL: &[&str] = &["taxitotal", "taxi total", "$taxitotal", "taxitotal$"];
    pub const SHIFT_TOTAL: &[&str] = &["shifttotal"];
    pub const CHARGE: &[&str] = &["charge"];
    pub const EFTPOS: &[&str] = &["eftpos"];
    pub const IHAIL: &[&str] = &["ihail", "ihailtotal"];
    pub const ETICKET: &[&str] = &["eticket", "etickettotal"];
    pub const TSS: &[&str] = &["tss", "tss($)", "tsstotal"];
}

// =============================================================================
// Legacy Positional Layout
// =============================================================================

/// Fixed column positions for exports that carry no recognizable header row
///
/// Matches the oldest terminal export layout. Every access is guarded by
/// row length, so short rows simply yield absent fields.
pub mod positional {
    pub const TAG: usize = 0;
    pub const TAXI: usize = 2;
    pub const REFERENCE: usize = 5;
    pub const DATE: usize = 6;
    pub const TIME: usize = 7;
    pub const DESCRIPTION: usize = 8;
    pub const PAYMENT_TOTAL: usize = 9;
    pub const TAXI_TOTAL: usize = 10;
    pub const SHIFT_TOTAL: usize = 11;
    pub const TSS: usize = 12;
    pub const CHARGE: usize = 13;
    pub const EFTPOS: usize = 14;
    pub const IHAIL: usize = 15;
    pub const ETICKET: usize = 16;
}

// =============================================================================
// Statement Layout
// =============================================================================

/// Title line of the EFTPOS statement variant
pub const EFTPOS_TITLE: &str = "Taxi EFTPOS Statement";

/// Title line of the TSS statement variant
pub const TSS_TITLE: &str = "Taxi TSS Statement";

/// Description text of the synthetic per-date taxi total summary line
pub const TAXI_TOTAL_LABEL: &str = "TaxiTotal";

/// Column labels for the EFTPOS statement table
pub const EFTPOS_COLUMNS: &[&str] = &[
    "Reference",
    "Date",
    "Time",
    "Description",
    "Taxi Total ($)",
    "Shift Total ($)",
    "Charge ($)",
    "EFTPOS ($)",
    "iHail",
    "Eticket ($)",
];

/// Column labels for the TSS statement table
pub const TSS_COLUMNS: &[&str] = &[
    "Reference",
    "Date",
    "Time",
    "Description",
    "Shift Total ($)",
    "TSS ($)",
];

/// Business number printed under the logo in the statement header
pub const DEFAULT_BUSINESS_NUMBER: &str = "ABN 95 610 943 934";

/// Maximum logo dimensions in millimetres (width, height)
pub const LOGO_MAX_SIZE_MM: (f32, f32) = (45.0, 22.0);

// =============================================================================
// Output File Naming
// =============================================================================

/// Report-type component of EFTPOS statement file names
pub const EFTPOS_FILE_TAG: &str = "EFTPOS_";

/// Report-type component of TSS statement file names
pub const TSS_FILE_TAG: &str = "TSS";

// =============================================================================
// Default Directories
// =============================================================================

/// Default directory for stored uploads, relative to the working directory
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Default directory for generated statements, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Application directory name used for the default config file location
pub const APP_DIR_NAME: &str = "taxi-statements";
