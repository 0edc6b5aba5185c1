//! Shared components for CLI commands
//!
//! Common types and utilities used by the command implementations:
//! logging setup, configuration loading, input discovery, and the
//! statistics structure reported after a run.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::cli::args::GenerateArgs;
use crate::config::Config;
use crate::{Error, Result};

/// Generation statistics for the final report
#[derive(Debug, Clone, Default)]
pub struct GenerationStats {
    /// Number of input files read successfully
    pub files_parsed: usize,
    /// Number of input files skipped as unreadable
    pub files_failed: usize,
    /// Number of data rows processed
    pub rows_processed: usize,
    /// Number of statement PDFs written
    pub statements_written: usize,
    /// Number of taxi groups skipped (unknown or invalid identifiers)
    pub taxis_skipped: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Generated file names and sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl GenerationStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for the generate command
pub fn setup_logging(args: &GenerateArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("taxi_statements={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &GenerateArgs) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::load(args.config_file.as_deref())?;

    // Apply CLI argument overrides
    if let Some(output_path) = &args.output_path {
        config.storage.output_path = output_path.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Expand input arguments into a sorted list of CSV files
///
/// Files are taken as given; directories are walked recursively and every
/// `.csv` file found is included.
pub fn discover_csv_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut csv_files = Vec::new();

    for input in inputs {
        if input.is_file() {
            csv_files.push(input.clone());
            continue;
        }

        if input.is_dir() {
            for entry in WalkDir::new(input)
                .follow_links(false)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.is_file() && is_csv(path) {
                    csv_files.push(path.to_path_buf());
                }
            }
            continue;
        }

        return Err(Error::configuration(format!(
            "Input path does not exist: {}",
            input.display()
        )));
    }

    // Sort for a consistent processing order
    csv_files.sort();
    csv_files.dedup();

    debug!("Discovered {} CSV files", csv_files.len());
    for file in &csv_files {
        debug!("  Found: {}", file.display());
    }

    Ok(csv_files)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
