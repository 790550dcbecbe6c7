use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid date format (expected YYYY-MM-DD): {0}")]
    InvalidDateFormat(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}
