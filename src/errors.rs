use thiserror::Error;

use crate::portfolio::PortfolioError;
use crate::quotes::QuoteError;
use crate::storage::StorageError;
use crate::trades::TradeError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Quote validation failed: {0}")]
    Quote(#[from] QuoteError),

    #[error("Trade rejected: {0}")]
    Trade(#[from] TradeError),

    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Portfolio operation failed: {0}")]
    Portfolio(#[from] PortfolioError),
}
