use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

/// Custom error type for price observation handling
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Malformed observation: {0}")]
    Malformed(String),
    #[error("Non-positive price: {0}")]
    NonPositive(String),
    #[error("Price source error: {0}")]
    Source(String),
}
