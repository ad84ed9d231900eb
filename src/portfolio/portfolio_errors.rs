use rust_decimal::Decimal;
use thiserror::Error;

/// Custom error type for portfolio mutations
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Invalid balance: {0}")]
    InvalidBalance(Decimal),
}
