use clap::Parser;
use colored::Colorize;
use gridsift::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridsift")]
#[command(about = "Spreadsheet triage: inspect an .xlsx workbook and extract rows flagged YES")]
#[command(long_about = "Gridsift - Spreadsheet triage

Loads an .xlsx workbook, prints its structure (columns, shape, first rows,
distinct values per column), and extracts every row containing the
case-insensitive substring YES to a CSV file.

If the workbook cannot be loaded as a single dataset, gridsift falls back to
enumerating its sheets and previewing each one.

EXAMPLES:
  gridsift                           # triage the default workbook
  gridsift transactions.xlsx         # triage a specific workbook
  gridsift data.xlsx -o flagged.csv  # custom output path")]
#[command(version)]
struct Cli {
    /// Path to the .xlsx workbook to triage
    #[arg(default_value = "testcases/transactionlist.xlsx")]
    file: PathBuf,

    /// Path for the matched-rows CSV
    #[arg(short, long, default_value = "auto_test_cases.csv")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Failures are console diagnostics; the exit status stays 0 either way.
    if let Err(e) = cli::sift(cli.file, cli.output) {
        eprintln!("{} {}", "Error:".bold().red(), e);
    }
}
