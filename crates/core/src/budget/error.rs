//! Budget CSV error types.

use pulse_shared::AppError;
use thiserror::Error;

/// Errors raised while reading or writing budget CSV files.
#[derive(Debug, Error)]
pub enum BudgetCsvError {
    /// A required column is missing from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A cell that should hold an amount could not be parsed.
    #[error("Invalid amount '{value}' in column {column} at line {line}")]
    InvalidAmount {
        /// 1-based line in the file.
        line: u64,
        /// Column header.
        column: String,
        /// Raw cell contents.
        value: String,
    },

    /// The file is not valid CSV.
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the output buffer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The output was not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl From<BudgetCsvError> for AppError {
    fn from(err: BudgetCsvError) -> Self {
        match err {
            BudgetCsvError::MissingColumn(_)
            | BudgetCsvError::InvalidAmount { .. }
            | BudgetCsvError::Csv(_) => Self::Import(err.to_string()),
            BudgetCsvError::Io(_) | BudgetCsvError::Encoding(_) => Self::Export(err.to_string()),
        }
    }
}
