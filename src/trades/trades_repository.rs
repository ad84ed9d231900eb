use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::storage::storage_constants::TRANSACTIONS_KEY;
use crate::storage::{get_json, set_json, KvStore};

use super::trades_model::Trade;

/// Trait defining the contract for trade log persistence.
#[async_trait]
pub trait TradeRepositoryTrait: Send + Sync {
    async fn get_trades(&self) -> Result<Vec<Trade>>;
    async fn append_trade(&self, trade: Trade) -> Result<Trade>;
    async fn clear_trades(&self) -> Result<()>;
}

/// Key-value-store-backed trade log.
pub struct TradeRepository {
    store: Arc<dyn KvStore>,
}

impl TradeRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        TradeRepository { store }
    }
}

#[async_trait]
impl TradeRepositoryTrait for TradeRepository {
    async fn get_trades(&self) -> Result<Vec<Trade>> {
        Ok(get_json::<Vec<Trade>>(self.store.as_ref(), TRANSACTIONS_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Read-append-write against the durable log. Callers serialize
    /// concurrent appends; the store itself offers no conditional write.
    async fn append_trade(&self, trade: Trade) -> Result<Trade> {
        let mut trades = self.get_trades().await?;
        trades.push(trade.clone());
        set_json(self.store.as_ref(), TRANSACTIONS_KEY, &trades).await?;
        debug!("Appended trade {}, log now {} entries", trade.id, trades.len());
        Ok(trade)
    }

    async fn clear_trades(&self) -> Result<()> {
        set_json(self.store.as_ref(), TRANSACTIONS_KEY, &Vec::<Trade>::new()).await?;
        Ok(())
    }
}
