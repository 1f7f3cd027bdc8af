//! Excel reader - .xlsx workbooks → [`Dataset`]

use crate::error::{SiftError, SiftResult};
use crate::types::{Cell, Dataset};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// One sheet from the fallback scan: its name and its loaded contents.
#[derive(Debug, Clone)]
pub struct SheetPreview {
    pub name: String,
    pub data: Dataset,
}

/// Reader for a single .xlsx workbook
pub struct WorkbookReader {
    path: PathBuf,
}

impl WorkbookReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the first worksheet as a [`Dataset`].
    ///
    /// Any structural failure (unopenable file, workbook without sheets,
    /// unreadable first sheet) surfaces as [`SiftError::Load`] so the caller
    /// can switch to the per-sheet fallback scan.
    pub fn load(&self) -> SiftResult<Dataset> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| SiftError::Load(format!("Failed to open Excel file: {}", e)))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| SiftError::Load("Workbook contains no sheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| SiftError::Load(format!("Failed to read sheet '{}': {}", sheet_name, e)))?;

        Ok(dataset_from_range(&range))
    }

    /// Fallback path: load every sheet in the workbook.
    ///
    /// Failures here are [`SiftError::Enumerate`], distinct from primary-load
    /// failures.
    pub fn scan_sheets(&self) -> SiftResult<Vec<SheetPreview>> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| SiftError::Enumerate(format!("Failed to open Excel file: {}", e)))?;

        let sheet_names = workbook.sheet_names().to_vec();

        let mut previews = Vec::with_capacity(sheet_names.len());
        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                SiftError::Enumerate(format!("Failed to read sheet '{}': {}", sheet_name, e))
            })?;
            previews.push(SheetPreview {
                name: sheet_name,
                data: dataset_from_range(&range),
            });
        }

        Ok(previews)
    }
}

/// Convert a calamine range into a [`Dataset`]: row 0 is the header, the rest
/// are data rows padded to column width.
fn dataset_from_range(range: &Range<Data>) -> Dataset {
    if range.is_empty() {
        return Dataset::default();
    }

    let (height, width) = range.get_size();

    let mut column_names: Vec<String> = Vec::with_capacity(width);
    for col in 0..width {
        let name = match range.get((0, col)) {
            Some(Data::String(s)) => s.clone(),
            Some(Data::Int(i)) => i.to_string(),
            Some(Data::Float(f)) => f.to_string(),
            _ => format!("col_{}", col),
        };
        column_names.push(name);
    }

    let mut dataset = Dataset::new(column_names);
    for row in 1..height {
        let mut cells: Vec<Cell> = Vec::with_capacity(width);
        for col in 0..width {
            match range.get((row, col)) {
                Some(data) => cells.push(Cell::from(data)),
                None => cells.push(Cell::Empty),
            }
        }
        dataset.rows.push(cells);
    }

    dataset
}
