//! Generate command implementation
//!
//! This module contains the complete statement generation workflow:
//! configuration loading, input discovery, parsing, report building, and
//! PDF rendering with progress reporting.

use colored::*;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::shared::{
    GenerationStats, create_progress_bar, discover_csv_files, load_configuration, setup_logging,
};
use crate::app::models::TaxiGroup;
use crate::app::services::pdf_renderer::{PdfRenderer, StatementRenderer};
use crate::app::services::report_builder::{
    StatementDocument, build_eftpos_statement, build_tss_statement,
};
use crate::app::services::statement_parser::{ParseOutcome, StatementParser};
use crate::app::services::statement_parser::taxi_id::looks_like_date;
use crate::app::services::storage;
use crate::cli::args::{GenerateArgs, ReportType};
use crate::config::Config;
use crate::constants::UNKNOWN_TAXI;
use crate::{Error, Result};

/// Generate command runner
///
/// Orchestrates the full workflow:
/// 1. Set up logging and configuration
/// 2. Discover and parse the CSV exports
/// 3. Build and render one statement per taxi
/// 4. Report summary statistics
pub fn run_generate(args: GenerateArgs) -> Result<GenerationStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;

    info!("Starting taxi statement generation");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let csv_files = discover_csv_files(&args.inputs)?;
    if csv_files.is_empty() {
        return Err(Error::no_data("no CSV files found in the given inputs"));
    }
    info!("Generating statements from {} export files", csv_files.len());

    let period_start = args.period_start;
    let period_end = args.get_period_end();
    let parser = StatementParser::new(period_start, period_end);
    let outcome = parser.parse_files(&csv_files)?;

    let mut stats = GenerationStats {
        files_parsed: outcome.stats.files_parsed,
        files_failed: outcome.stats.files_failed,
        rows_processed: outcome.stats.rows_total,
        ..Default::default()
    };

    let eligible: Vec<(&String, &TaxiGroup)> = outcome
        .groups
        .iter()
        .filter(|(taxi, group)| {
            if should_skip_group(taxi, group) {
                warn!("Skipping statement for unusable taxi identifier '{}'", taxi);
                stats.taxis_skipped += 1;
                false
            } else {
                true
            }
        })
        .collect();

    if eligible.is_empty() {
        return Err(Error::no_data(
            "no taxi with a usable identifier was found in the input files",
        ));
    }

    if args.dry_run {
        run_dry_run(&args, &config, &outcome, &eligible);
        stats.processing_time = start_time.elapsed();
        return Ok(stats);
    }

    storage::ensure_dir(&config.storage.output_path)?;

    let renderer = PdfRenderer::new(config.report.logo_path.clone());
    let progress = args
        .show_progress()
        .then(|| create_progress_bar(eligible.len() as u64, "Rendering statements..."));

    for (taxi, group) in eligible {
        let document = build_document(&args, &config, taxi, group);
        let file_name =
            storage::statement_file_name(taxi, period_start, args.report_type.kind());
        let output_path = config.storage.output_path.join(&file_name);

        renderer.render(&document, &output_path)?;

        let size = std::fs::metadata(&output_path).map(|m| m.len()).unwrap_or(0);
        stats.statements_written += 1;
        stats.output_sizes.push((file_name, size));

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    stats.processing_time = start_time.elapsed();

    if !args.quiet {
        print_summary(&stats, &config);
    }

    Ok(stats)
}

/// Build the statement document for one taxi under the selected variant
fn build_document(
    args: &GenerateArgs,
    config: &Config,
    taxi: &str,
    group: &TaxiGroup,
) -> StatementDocument {
    let period_start = args.period_start;
    let period_end = args.get_period_end();
    let date_issued = args.get_date_issued();
    let business_number = &config.report.business_number;

    match args.report_type {
        ReportType::Eftpos => build_eftpos_statement(
            taxi,
            group,
            period_start,
            period_end,
            date_issued,
            business_number,
        ),
        ReportType::Tss => build_tss_statement(
            taxi,
            group,
            period_start,
            period_end,
            date_issued,
            business_number,
        ),
    }
}

/// True when no statement should be generated for this group
///
/// Empty groups, the UNKNOWN sentinel, and date-shaped identifiers (stray
/// spreadsheet artifacts) produce no statement and count as skipped.
fn should_skip_group(taxi: &str, group: &TaxiGroup) -> bool {
    group.is_empty() || taxi == UNKNOWN_TAXI || looks_like_date(taxi)
}

/// List the statements a real run would produce
///
/// Each line reflects the selected variant: the row count and headline
/// total come from the statement document that would be rendered.
fn run_dry_run(
    args: &GenerateArgs,
    config: &Config,
    outcome: &ParseOutcome,
    eligible: &[(&String, &TaxiGroup)],
) {
    info!("Performing dry run - no files will be created");

    println!("\n{}", "Dry run - statements that would be generated".bright_green().bold());
    for (taxi, group) in eligible {
        let document = build_document(args, config, taxi, group);
        let file_name =
            storage::statement_file_name(taxi, args.period_start, args.report_type.kind());
        println!(
            "  {} {} ({} rows, total {})",
            "Would create:".bright_cyan(),
            file_name,
            document.rows.len(),
            document.header.total
        );
    }

    println!(
        "\n  {} {} taxi groups from {} rows across {} files",
        "Parsed".bright_green(),
        outcome.groups.len().to_string().bright_white().bold(),
        outcome.stats.rows_total,
        outcome.stats.files_parsed
    );
}

/// Print the final colored summary
fn print_summary(stats: &GenerationStats, config: &Config) {
    println!("\n{}", "Statement Generation Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Time elapsed:".bright_cyan(),
        HumanDuration(stats.processing_time)
    );
    println!(
        "  {} {}",
        "Files parsed:".bright_cyan(),
        stats.files_parsed.to_string().bright_white().bold()
    );
    if stats.files_failed > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Rows processed:".bright_cyan(),
        stats.rows_processed.to_string().bright_white().bold()
    );
    if stats.taxis_skipped > 0 {
        println!(
            "  {} {}",
            "Taxis skipped:".bright_yellow(),
            stats.taxis_skipped.to_string().bright_yellow().bold()
        );
    }
    println!(
        "  {} {} ({})",
        "Statements written:".bright_cyan(),
        stats.statements_written.to_string().bright_white().bold(),
        GenerationStats::format_size(stats.total_output_size())
    );
    println!(
        "  {} {}",
        "Output directory:".bright_cyan(),
        config.storage.output_path.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Record, RowTag};
    use chrono::NaiveDate;

    fn generate_args(report_type: ReportType) -> GenerateArgs {
        GenerateArgs {
            inputs: vec![],
            period_start: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            period_end: None,
            date_issued: NaiveDate::from_ymd_opt(2025, 9, 8),
            report_type,
            output_path: None,
            config_file: None,
            dry_run: true,
            verbose: 0,
            quiet: true,
        }
    }

    #[test]
    fn test_build_document_headline_follows_report_type() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let mut group = TaxiGroup::default();
        group.records.push(Record {
            tag: RowTag::Detail,
            reference: "REF1".to_string(),
            date,
            time: "08:00:00".to_string(),
            description: "FARE".to_string(),
            payment_total: None,
            taxi_total: Some(45.50),
            shift_total: None,
            charge: None,
            eftpos: None,
            ihail: None,
            eticket: None,
            tss: Some(1.10),
        });
        group.absorb_taxi_total(date, Some(100.00));

        let config = Config::default();

        // EFTPOS headline is the absorbed taxi-total aggregate
        let eftpos = build_document(&generate_args(ReportType::Eftpos), &config, "TX68", &group);
        assert_eq!(eftpos.header.total, "100.00");

        // The TSS variant must not reuse the taxi-total aggregate
        let tss = build_document(&generate_args(ReportType::Tss), &config, "TX68", &group);
        assert_eq!(tss.header.total, "1.10");
    }

    #[test]
    fn test_should_skip_group() {
        let mut group = TaxiGroup::default();
        group.absorb_taxi_total(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(), Some(10.0));

        assert!(!should_skip_group("TX68", &group));
        assert!(should_skip_group(UNKNOWN_TAXI, &group));
        assert!(should_skip_group("01/09/2025", &group));
        assert!(should_skip_group("TX68", &TaxiGroup::default()));
    }
}
