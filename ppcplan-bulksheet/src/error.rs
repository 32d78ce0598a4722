//! Error types for writing bulk documents.

use thiserror::Error;

/// Errors raised outside the (infallible) row generation: config parsing and
/// file output.
#[derive(Debug, Error)]
pub enum BulksheetError {
    /// Config file is not valid TOML or has wrongly typed fields.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Workbook could not be built or saved.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV output failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for bulksheet operations.
pub type BulksheetResult<T> = Result<T, BulksheetError>;
