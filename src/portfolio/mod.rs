pub mod portfolio_errors;
pub mod portfolio_repository;
pub mod portfolio_service;

pub use portfolio_errors::PortfolioError;
pub use portfolio_repository::{PortfolioRepository, PortfolioRepositoryTrait};
pub use portfolio_service::PortfolioService;

#[cfg(test)]
pub(crate) mod tests;
