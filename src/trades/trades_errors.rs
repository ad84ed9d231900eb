use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TradeError>;

/// Custom error type for trade validation
#[derive(Debug, Error)]
pub enum TradeError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("No fresh reference price for {0}")]
    NoPrice(String),
    #[error("Insufficient holdings of {symbol}: requested {requested}, available {available}")]
    InsufficientHoldings {
        symbol: String,
        requested: Decimal,
        available: Decimal,
    },
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("Invalid trade data: {0}")]
    InvalidData(String),
}
