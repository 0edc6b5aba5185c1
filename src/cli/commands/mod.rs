//! Command implementations for the taxi statement CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command lives in its
//! own module.

pub mod generate;
pub mod shared;

pub use shared::GenerationStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the taxi statement processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `generate`: parse CSV exports and render per-taxi statement PDFs
pub fn run(args: Args) -> Result<GenerationStats> {
    match args.get_command() {
        Commands::Generate(generate_args) => generate::run_generate(generate_args),
    }
}
