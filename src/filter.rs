//! Row filtering by case-insensitive substring containment.

use crate::types::{Cell, Dataset};

/// A row matches when any non-missing cell's rendered text contains the
/// needle, compared uppercase.
pub fn row_matches(row: &[Cell], needle: &str) -> bool {
    let needle_upper = needle.to_uppercase();
    row.iter()
        .filter(|cell| !cell.is_empty())
        .any(|cell| cell.render().to_uppercase().contains(&needle_upper))
}

/// Build the matched subset: same columns, only matching rows, source order
/// preserved. Rows are cloned as-is, never synthesized or modified.
pub fn filter_containing(dataset: &Dataset, needle: &str) -> Dataset {
    let mut matched = Dataset::new(dataset.columns.clone());
    matched.rows = dataset
        .rows
        .iter()
        .filter(|row| row_matches(row, needle))
        .cloned()
        .collect();
    matched
}
