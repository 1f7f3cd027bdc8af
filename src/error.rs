use thiserror::Error;

pub type SiftResult<T> = Result<T, SiftError>;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook load error: {0}")]
    Load(String),

    #[error("Sheet enumeration error: {0}")]
    Enumerate(String),
}
