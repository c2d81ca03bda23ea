use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// Creature table cannot be renamed onto the canonical schema.
    #[error("creature table has {found} columns, expected {expected}")]
    SchemaMismatch { expected: usize, found: usize },

    /// A base statistic column is not integral or has missing cells.
    #[error("invalid base statistic column '{column}': {message}")]
    InvalidStatistic { column: String, message: String },

    /// A row without a canonical tier reached a stage that requires one.
    #[error("row {row} has non-canonical tier {tier:?} after normalization")]
    InvariantViolation { row: usize, tier: Option<String> },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
