use thiserror::Error;

/// Errors that can occur while reading a point cloud table.
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("failed to read point cloud: {0}")]
    Io(#[from] std::io::Error),

    /// The header row does not name a required column.
    #[error("point cloud header has no `{0}` column")]
    MissingColumn(&'static str),

    #[error("line {line}: `{value}` in column `{column}` is not a finite number")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: expected at least {expected} fields, found {found}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("point cloud has no points")]
    Empty,
}

pub type Result<T> = std::result::Result<T, CloudError>;
