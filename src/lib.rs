pub mod constants;
pub mod errors;
pub mod utils;

pub mod ledger;
pub mod portfolio;
pub mod quotes;
pub mod settings;
pub mod storage;
pub mod trades;
pub mod valuation;

pub use errors::{Error, Result};
pub use ledger::{Holding, LedgerCalculator, ReplayOutcome};
pub use portfolio::PortfolioService;
pub use quotes::{PriceObservation, QuotePoller, QuoteState};
pub use trades::{Trade, TradeIntent, TradeType};
pub use valuation::{PortfolioSnapshot, ValuationService};
