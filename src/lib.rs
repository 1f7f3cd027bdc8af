//! Gridsift - spreadsheet triage
//!
//! This library loads an .xlsx workbook into an in-memory dataset, reports
//! its structure, and extracts rows whose cells contain the case-insensitive
//! substring "YES" for persistence as CSV.
//!
//! # Example
//!
//! ```no_run
//! use gridsift::excel::WorkbookReader;
//! use gridsift::filter::filter_containing;
//!
//! let reader = WorkbookReader::new("testcases/transactionlist.xlsx");
//! let dataset = reader.load()?;
//!
//! let matched = filter_containing(&dataset, "YES");
//! println!("Rows containing YES: {}", matched.rows.len());
//! # Ok::<(), gridsift::error::SiftError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod filter;
pub mod report;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{SiftError, SiftResult};
pub use excel::{SheetPreview, WorkbookReader};
pub use types::{Cell, Dataset};
