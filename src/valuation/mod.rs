pub mod valuation_model;
pub mod valuation_service;

pub use valuation_model::{HoldingValuation, PortfolioSnapshot};
pub use valuation_service::ValuationService;

#[cfg(test)]
pub(crate) mod tests;
