use async_trait::async_trait;

use super::quotes_errors::Result;
use super::quotes_model::RawPriceTick;

/// Boundary to the external price-source collaborator.
///
/// The engine never knows how observations were obtained, only their shape;
/// implementations wrap whatever scraping or feed mechanism the host uses.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Returns the latest raw tick for the actively viewed ticker, or `None`
    /// when the source has nothing to report this cycle.
    async fn fetch_tick(&self) -> Result<Option<RawPriceTick>>;
}
