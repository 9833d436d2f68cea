use thiserror::Error;

/// Failure to read or clean the strain CSV.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("Line {line}: invalid rating '{value}'")]
    InvalidRating { line: u64, value: String },
}

/// Error value returned by a search on a column the table does not have.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid column name '{0}'")]
    InvalidColumn(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Export produced invalid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("XLSX error: {0}")]
    Xlsx(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a number, got '{value}'")]
    NotANumber { key: &'static str, value: String },
    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}
