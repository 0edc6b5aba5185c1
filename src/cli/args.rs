//! Command-line argument definitions for the taxi statement processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use chrono::{Days, Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::services::storage::ReportKind;
use crate::{Error, Result};

/// CLI arguments for the taxi statement processor
///
/// Turns CSV exports from taxi payment terminals into per-taxi PDF
/// statements for a billing period.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taxi-statements",
    version,
    about = "Generate per-taxi PDF statements from payment terminal CSV exports",
    long_about = "Reads CSV exports from taxi payment terminals (with or without header \
                  rows), groups transaction rows by taxi identifier, aggregates taxi \
                  totals across files, and renders an EFTPOS or TSS statement PDF per \
                  taxi for the billing period."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the statement processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Generate per-taxi statement PDFs from CSV exports (default command)
    Generate(GenerateArgs),
}

/// Arguments for the generate command
#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    /// Input CSV files or directories to scan for CSV files
    ///
    /// Directories are searched recursively; every file with a .csv
    /// extension is included.
    #[arg(
        value_name = "INPUTS",
        required = true,
        help = "CSV export files or directories containing them"
    )]
    pub inputs: Vec<PathBuf>,

    /// First day of the billing period (YYYY-MM-DD)
    ///
    /// Also used as the date fallback for rows that carry no usable date
    /// and appears in the statement file names.
    #[arg(
        long = "period-start",
        value_name = "DATE",
        help = "First day of the billing period (YYYY-MM-DD)"
    )]
    pub period_start: NaiveDate,

    /// Last day of the billing period (YYYY-MM-DD)
    ///
    /// Defaults to six days after the period start, covering a
    /// Monday-to-Sunday billing week.
    #[arg(
        long = "period-end",
        value_name = "DATE",
        help = "Last day of the billing period (defaults to start + 6 days)"
    )]
    pub period_end: Option<NaiveDate>,

    /// Issue date printed in the statement header (YYYY-MM-DD)
    ///
    /// Defaults to today.
    #[arg(
        long = "date-issued",
        value_name = "DATE",
        help = "Issue date shown on the statements (defaults to today)"
    )]
    pub date_issued: Option<NaiveDate>,

    /// Statement variant to generate
    #[arg(
        long = "report-type",
        value_enum,
        default_value = "eftpos",
        help = "Statement variant to generate"
    )]
    pub report_type: ReportType,

    /// Output directory for generated statement PDFs
    ///
    /// Will be created if it doesn't exist. If not specified, uses the
    /// configured output path (default ./output).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory for generated statement PDFs"
    )]
    pub output_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file for storage, branding, and logging
    /// settings. If not specified, looks for
    /// ~/.config/taxi-statements/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Perform a dry run without writing any PDFs
    ///
    /// Lists the statements that would be generated and the rows behind
    /// them without creating output files.
    #[arg(
        long = "dry-run",
        help = "List the statements that would be generated without writing files"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Statement variant options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportType {
    /// EFTPOS statement with the full transaction breakdown
    Eftpos,
    /// TSS statement with shift and TSS totals only
    Tss,
}

impl ReportType {
    /// Map to the storage-level report kind
    pub fn kind(self) -> ReportKind {
        match self {
            ReportType::Eftpos => ReportKind::Eftpos,
            ReportType::Tss => ReportKind::Tss,
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl GenerateArgs {
    /// Validate the generate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(Error::configuration(
                "At least one input file or directory is required".to_string(),
            ));
        }

        for input in &self.inputs {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input.display()
                )));
            }
        }

        if let Some(end) = self.period_end {
            if end < self.period_start {
                return Err(Error::configuration(
                    "Period end must not be before period start".to_string(),
                ));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Effective end of the billing period
    pub fn get_period_end(&self) -> NaiveDate {
        self.period_end.unwrap_or_else(|| {
            self.period_start
                .checked_add_days(Days::new(6))
                .unwrap_or(self.period_start)
        })
    }

    /// Effective issue date for the statement headers
    pub fn get_date_issued(&self) -> NaiveDate {
        self.date_issued
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
