use thiserror::Error;

/// Errors that can occur while loading data, running the test, or exporting
#[derive(Error, Debug)]
pub enum TtestError {
    // Input errors
    #[error("unsupported file format: '{0}' (expected .csv or .xlsx)")]
    UnsupportedFormat(String),

    #[error("failed to parse input file: {0}")]
    Parse(String),

    #[error("column selection error: {0}")]
    ColumnSelection(String),

    #[error("insufficient data in column '{column}': {n} valid values (need at least 2)")]
    InsufficientData { column: String, n: usize },

    // Parameter errors
    #[error("invalid significance level: {0} (must be in (0, 1))")]
    InvalidAlpha(f64),

    // Export errors
    #[error("spreadsheet export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for all operations in this crate
pub type TtestResult<T> = Result<T, TtestError>;
