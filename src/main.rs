use clap::Parser;
use std::process;
use taxi_statements::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Taxi Statements - Payment Terminal Export Processor");
    println!("===================================================");
    println!();
    println!("Turn CSV exports from taxi payment terminals into per-taxi PDF");
    println!("statements for a billing period.");
    println!();
    println!("USAGE:");
    println!("    taxi-statements <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    generate    Generate per-taxi statement PDFs from CSV exports");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Generate EFTPOS statements for a billing week:");
    println!("    taxi-statements generate exports/ --period-start 2025-09-01");
    println!();
    println!("    # Generate TSS statements from specific files into a custom directory:");
    println!("    taxi-statements generate week1.csv week2.csv --period-start 2025-09-01 \\");
    println!("                             --report-type tss --output /path/to/statements");
    println!();
    println!("    # Preview what would be generated without writing files:");
    println!("    taxi-statements generate exports/ --period-start 2025-09-01 --dry-run");
    println!();
    println!("For detailed help on any command, use:");
    println!("    taxi-statements <COMMAND> --help");
}
