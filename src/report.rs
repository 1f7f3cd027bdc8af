//! Console reporting for datasets and sheet previews.
//!
//! Output is human-readable only; nothing downstream parses it.

use crate::excel::SheetPreview;
use crate::types::{Cell, Dataset};
use colored::Colorize;

/// Rows shown in the primary overview.
pub const HEAD_ROWS: usize = 5;
/// Distinct values shown per column.
pub const DISTINCT_LIMIT: usize = 10;
/// Rows shown per sheet in the fallback scan.
pub const PREVIEW_ROWS: usize = 3;

/// Render a row as comma-joined cell text.
pub fn format_row(row: &[Cell]) -> String {
    row.iter()
        .map(Cell::render)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print columns, shape and the first [`HEAD_ROWS`] rows.
pub fn print_overview(dataset: &Dataset) {
    let (rows, cols) = dataset.shape();

    println!("   Columns: {}", dataset.columns.join(", ").cyan());
    println!("   Shape: {} rows x {} columns", rows, cols);

    println!("\n   First {} rows:", HEAD_ROWS.min(rows));
    for row in dataset.head(HEAD_ROWS) {
        println!("      {}", format_row(row));
    }
}

/// Print up to [`DISTINCT_LIMIT`] distinct values for every column.
pub fn print_distinct_values(dataset: &Dataset) {
    println!("\n   Distinct values per column:");
    for (idx, name) in dataset.columns.iter().enumerate() {
        let values = dataset.distinct_values(idx, DISTINCT_LIMIT);
        println!(
            "      {}: {}",
            name.bright_blue(),
            values.join(", ")
        );
    }
}

/// Print the matched subset: count plus every row.
pub fn print_matches(matched: &Dataset) {
    println!(
        "\n   Rows containing {}: {}",
        "YES".bold(),
        matched.rows.len().to_string().bold()
    );
    for row in &matched.rows {
        println!("      {}", format_row(row));
    }
}

/// Print the fallback scan: shape and columns per sheet, first
/// [`PREVIEW_ROWS`] rows when the sheet has data.
pub fn print_sheet_previews(previews: &[SheetPreview]) {
    let names: Vec<&str> = previews.iter().map(|p| p.name.as_str()).collect();
    println!("   Sheet names: {}", names.join(", ").cyan());

    for preview in previews {
        let (rows, cols) = preview.data.shape();
        println!("\n   --- Sheet: {} ---", preview.name.bright_blue().bold());
        println!("   Shape: {} rows x {} columns", rows, cols);
        println!("   Columns: {}", preview.data.columns.join(", "));
        if !preview.data.is_empty() {
            println!("   First rows:");
            for row in preview.data.head(PREVIEW_ROWS) {
                println!("      {}", format_row(row));
            }
        }
    }
}
