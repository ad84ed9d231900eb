use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use tokio::sync::RwLock;

use super::quotes_constants::DEFAULT_MAX_QUOTE_AGE_MS;
use super::quotes_errors::Result;
use super::quotes_model::{PriceObservation, RawPriceTick};
use super::quotes_provider::PriceProvider;

/// Latest-known price observation for the current session.
///
/// One instance is created per session and shared explicitly between the
/// poller and the services that need a price; there is no process-wide price
/// cache. Ingestion is last-write-wins.
pub struct QuoteState {
    latest: RwLock<Option<PriceObservation>>,
    max_age: Duration,
}

impl QuoteState {
    pub fn new(max_age: Duration) -> Self {
        QuoteState {
            latest: RwLock::new(None),
            max_age,
        }
    }

    pub fn with_default_max_age() -> Self {
        Self::new(Duration::milliseconds(DEFAULT_MAX_QUOTE_AGE_MS))
    }

    /// Staleness window observations must beat to be used for valuation.
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Validates and stores a raw tick, returning the accepted observation.
    /// Rejected ticks leave the current observation untouched.
    pub async fn ingest(&self, tick: &RawPriceTick) -> Result<PriceObservation> {
        let observation = tick.validate()?;
        debug!(
            "Price update for {}: {}",
            observation.ticker, observation.price
        );
        *self.latest.write().await = Some(observation.clone());
        Ok(observation)
    }

    pub async fn latest(&self) -> Option<PriceObservation> {
        self.latest.read().await.clone()
    }

    /// Latest observation for `symbol`, only while inside the staleness window.
    pub async fn latest_fresh(
        &self,
        symbol: &str,
        now: DateTime<Utc>,
    ) -> Option<PriceObservation> {
        self.latest
            .read()
            .await
            .as_ref()
            .filter(|observation| {
                observation.ticker == symbol && observation.is_fresh(now, self.max_age)
            })
            .cloned()
    }

    /// Discards the session observation (tab/extension teardown).
    pub async fn clear(&self) {
        *self.latest.write().await = None;
    }
}

/// Fixed-interval polling loop against the price-source collaborator.
///
/// The interval comes from configuration (see `Settings::poll_interval`),
/// matching the pull-only nature of the source.
pub struct QuotePoller {
    provider: Arc<dyn PriceProvider>,
    state: Arc<QuoteState>,
    poll_interval: std::time::Duration,
}

impl QuotePoller {
    pub fn new(
        provider: Arc<dyn PriceProvider>,
        state: Arc<QuoteState>,
        poll_interval: std::time::Duration,
    ) -> Self {
        QuotePoller {
            provider,
            state,
            poll_interval,
        }
    }

    /// Polls until the surrounding task is dropped.
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        loop {
            ticker.tick().await;
            self.poll_once().await;
        }
    }

    /// Single poll cycle. Failed fetches and invalid ticks are logged and
    /// dropped; the session state keeps its previous observation.
    pub async fn poll_once(&self) {
        match self.provider.fetch_tick().await {
            Ok(Some(tick)) => {
                if let Err(e) = self.state.ingest(&tick).await {
                    warn!("Dropping invalid price tick: {}", e);
                }
            }
            Ok(None) => debug!("Price source had no tick this cycle"),
            Err(e) => warn!("Price source fetch failed: {}", e),
        }
    }
}
