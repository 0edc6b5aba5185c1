//! Upload storage and output file naming
//!
//! Implements the storage collaborator contract: collision-resistant
//! unique names for saved uploads, BOM-tolerant UTF-8 reads, filename
//! sanitization, the statement output naming scheme, and a retry-once
//! policy for transient missing-directory conditions on write.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

use crate::constants::{EFTPOS_FILE_TAG, OUTPUT_DATE_FORMAT, TSS_FILE_TAG, UNKNOWN_TAXI};
use crate::{Error, Result};

/// Characters replaced when a string is used as a filename component
const ILLEGAL_FILENAME_CHARS: &[char] =
    &['\\', '/', ':', '*', '?', '"', '<', '>', '|', '\0'];

/// Statement variants, used for output naming and report selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Eftpos,
    Tss,
}

/// Sanitize a string for use as a filename component
///
/// Replaces path separators and characters illegal on common filesystems
/// with dashes and trims surrounding whitespace and dots.
pub fn sanitize_component(text: &str) -> String {
    text.trim()
        .replace(ILLEGAL_FILENAME_CHARS, "-")
        .trim_matches(['.', ' '])
        .to_string()
}

/// Build a collision-resistant unique name for a saved upload
///
/// Combines the sanitized original stem with a local timestamp and a uuid
/// fragment, so concurrent requests cannot clobber each other's files.
pub fn unique_upload_name(original: &str) -> String {
    let path = Path::new(original);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(sanitize_component)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "upload".to_string());
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(sanitize_component)
        .filter(|s| !s.is_empty())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    format!(
        "{}_{}_{}{}",
        stem,
        Local::now().format("%Y%m%d%H%M%S%f"),
        &Uuid::new_v4().simple().to_string()[..8],
        extension
    )
}

/// Save uploaded bytes under a unique name, retrying once if the
/// destination directory is missing
pub fn save_upload(upload_dir: &Path, original_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let destination = upload_dir.join(unique_upload_name(original_name));

    if let Err(first) = fs::write(&destination, bytes) {
        if first.kind() == std::io::ErrorKind::NotFound {
            warn!(
                "Upload directory missing, creating and retrying: {}",
                upload_dir.display()
            );
            fs::create_dir_all(upload_dir).map_err(|e| {
                Error::storage(format!(
                    "Failed to create upload directory '{}': {}",
                    upload_dir.display(),
                    e
                ))
            })?;
            fs::write(&destination, bytes).map_err(|e| {
                Error::storage(format!(
                    "Failed to save upload '{}' after retry: {}",
                    destination.display(),
                    e
                ))
            })?;
        } else {
            return Err(Error::storage(format!(
                "Failed to save upload '{}': {}",
                destination.display(),
                first
            )));
        }
    }

    info!("Saved upload to {}", destination.display());
    Ok(destination)
}

/// Read an export file as UTF-8 text, tolerating a leading byte-order mark
pub fn read_statement_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::io(format!("Failed to read file {}", path.display()), e)
    })?;

    Ok(content
        .strip_prefix('\u{feff}')
        .map(str::to_string)
        .unwrap_or(content))
}

/// Build the output file name for a taxi's statement
///
/// Contract: `{sanitized-taxi-id}_{YYYYMMDD-of-period-start}_{EFTPOS_|TSS}.pdf`.
pub fn statement_file_name(
    taxi: &str,
    period_start: chrono::NaiveDate,
    kind: ReportKind,
) -> String {
    let taxi_safe = {
        let sanitized = sanitize_component(taxi);
        if sanitized.is_empty() {
            UNKNOWN_TAXI.to_string()
        } else {
            sanitized
        }
    };

    let tag = match kind {
        ReportKind::Eftpos => EFTPOS_FILE_TAG,
        ReportKind::Tss => TSS_FILE_TAG,
    };

    format!(
        "{}_{}_{}.pdf",
        taxi_safe,
        period_start.format(OUTPUT_DATE_FORMAT),
        tag
    )
}

/// Ensure a directory exists, creating it (and parents) if needed
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            Error::storage(format!(
                "Failed to create directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }
    Ok(())
}
