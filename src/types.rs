//! In-memory tabular model: typed cells and ordered datasets.

use calamine::Data;

/// A single spreadsheet cell, owned and decoupled from the reader backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Int(i64),
    Text(String),
    Bool(bool),
    /// Date/time as an Excel serial value.
    DateTime(f64),
    Empty,
}

impl Cell {
    /// Missing cells are excluded from distinct-value and match scans.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Deterministic textual rendering, one rule per cell type.
    ///
    /// This is the form used for console output, distinct-value comparison,
    /// the match predicate, and CSV cells, so all four agree.
    pub fn render(&self) -> String {
        match self {
            Cell::Number(n) => format_number(*n),
            Cell::Int(i) => i.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Bool(b) => {
                if *b {
                    "TRUE".to_string()
                } else {
                    "FALSE".to_string()
                }
            }
            Cell::DateTime(serial) => format_number(*serial),
            Cell::Empty => String::new(),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Number(*f),
            Data::String(s) => Cell::Text(s.clone()),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Text(e.to_string()),
            Data::Empty => Cell::Empty,
        }
    }
}

/// Format a number for display, removing unnecessary decimal places
fn format_number(n: f64) -> String {
    let rounded = (n * 1e6).round() / 1e6;
    format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// An ordered table: column names plus rows of cells.
///
/// Rows always have exactly `columns.len()` cells; the reader pads short rows
/// with [`Cell::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// (row count, column count), header row excluded.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows (fewer if the dataset is shorter).
    pub fn head(&self, n: usize) -> &[Vec<Cell>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Distinct rendered values of column `col`, first-seen order, missing
    /// cells excluded, capped at `limit`.
    pub fn distinct_values(&self, col: usize, limit: usize) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for row in &self.rows {
            let Some(cell) = row.get(col) else { continue };
            if cell.is_empty() {
                continue;
            }
            let rendered = cell.render();
            if !seen.contains(&rendered) {
                seen.push(rendered);
                if seen.len() == limit {
                    break;
                }
            }
        }
        seen
    }
}
