use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid age: {0} (must be non-negative)")]
    InvalidAge(i32),

    #[error("duplicate finding in catalog: {0}")]
    DuplicateFinding(String),

    #[error("catalog has no rules")]
    EmptyCatalog,

    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),
}
