use rust_decimal::Decimal;
use thiserror::Error;

/// Every way a ledger run can fail. All variants abort the whole run.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("input is empty")]
    EmptyInput,
    #[error("input has a header row but no data rows")]
    NoDataRows,
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("invalid number in column {column} at row {row}: {text:?}")]
    InvalidNumber {
        column: String,
        row: usize,
        text: String,
    },
    #[error("invalid date in column {column} at row {row}: {text:?}")]
    InvalidDate {
        column: String,
        row: usize,
        text: String,
    },
    #[error("sell quantity for {instrument} must be positive, got {quantity}")]
    NonPositiveSellQuantity { instrument: String, quantity: Decimal },
    #[error("cannot sell {instrument}: no existing position")]
    NoExistingPosition { instrument: String },
    #[error("cannot sell {quantity} of {instrument}: only {held} held")]
    OversoldPosition {
        instrument: String,
        quantity: Decimal,
        held: Decimal,
    },
    #[error("arithmetic overflow while {0}")]
    ArithmeticOverflow(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(String),
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        LedgerError::Csv(err.to_string())
    }
}

/// Field-level parse failure, before the row and column are known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
    #[error("not a date: {0:?}")]
    InvalidDate(String),
}

impl FieldError {
    /// Attach the row offset and column name the field came from.
    pub fn at(self, column: &str, row: usize) -> LedgerError {
        match self {
            FieldError::InvalidNumber(text) => LedgerError::InvalidNumber {
                column: column.to_string(),
                row,
                text,
            },
            FieldError::InvalidDate(text) => LedgerError::InvalidDate {
                column: column.to_string(),
                row,
                text,
            },
        }
    }
}
