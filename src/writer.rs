//! CSV persistence for matched rows.

use crate::error::SiftResult;
use crate::types::Dataset;
use std::path::Path;

/// Write a dataset as CSV: header row of column names, then rendered cells in
/// column order. Overwrites any existing file at `path`.
///
/// Callers skip this entirely for an empty subset, so an existing file is
/// left untouched when nothing matched. Write failures propagate.
pub fn write_csv(dataset: &Dataset, path: &Path) -> SiftResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(&dataset.columns)?;
    for row in &dataset.rows {
        let rendered: Vec<String> = row.iter().map(|cell| cell.render()).collect();
        writer.write_record(&rendered)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn matched_dataset() -> Dataset {
        let mut ds = Dataset::new(vec!["ID".to_string(), "Status".to_string()]);
        ds.rows
            .push(vec![Cell::Int(2), Cell::Text("Yes please".to_string())]);
        ds
    }

    #[test]
    fn test_write_csv_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(&matched_dataset(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "ID,Status\n2,Yes please\n");
    }

    #[test]
    fn test_write_csv_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents").unwrap();

        write_csv(&matched_dataset(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "ID,Status\n2,Yes please\n");
    }

    #[test]
    fn test_write_csv_to_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        assert!(write_csv(&matched_dataset(), &path).is_err());
    }
}
