use crate::error::{SiftError, SiftResult};
use crate::excel::WorkbookReader;
use crate::types::Dataset;
use crate::{filter, report, writer};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Substring that flags a row for extraction, compared case-insensitively.
pub const MATCH_NEEDLE: &str = "YES";

/// Execute the triage pipeline: load, report, filter, persist matches.
///
/// A primary-load failure switches to the per-sheet fallback scan instead of
/// aborting. Only output-write and fallback-scan failures propagate; the
/// binary prints those and still exits 0.
pub fn sift(input: PathBuf, output: PathBuf) -> SiftResult<()> {
    println!("{}", "🔎 Gridsift - Spreadsheet triage".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    let reader = WorkbookReader::new(&input);
    match reader.load() {
        Ok(dataset) => report_and_extract(&dataset, &output),
        Err(cause) => fallback_scan(&reader, &cause),
    }
}

fn report_and_extract(dataset: &Dataset, output: &Path) -> SiftResult<()> {
    report::print_overview(dataset);
    report::print_distinct_values(dataset);

    let matched = filter::filter_containing(dataset, MATCH_NEEDLE);
    report::print_matches(&matched);

    if matched.is_empty() {
        println!("\n{}", "   No matches - no output file written".yellow());
    } else {
        writer::write_csv(&matched, output)?;
        println!("\n{}", "✅ Matches saved".bold().green());
        println!("   CSV file: {}\n", output.display());
    }

    Ok(())
}

fn fallback_scan(reader: &WorkbookReader, cause: &SiftError) -> SiftResult<()> {
    println!("{} {}", "⚠️  Primary load failed:".yellow().bold(), cause);
    println!("{}", "   Scanning individual sheets...\n".cyan());

    let previews = reader.scan_sheets()?;
    report::print_sheet_previews(&previews);

    Ok(())
}
