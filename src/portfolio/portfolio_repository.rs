use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::constants::DEFAULT_CASH_BALANCE;
use crate::errors::Result;
use crate::storage::storage_constants::USD_BALANCE_KEY;
use crate::storage::{get_json, set_json, KvStore};

/// Trait defining the contract for cash balance persistence.
///
/// The persisted value is the balance replay starts from, not the derived
/// final balance.
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    async fn get_cash_balance(&self) -> Result<Decimal>;
    async fn set_cash_balance(&self, balance: Decimal) -> Result<()>;
}

pub struct PortfolioRepository {
    store: Arc<dyn KvStore>,
}

impl PortfolioRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        PortfolioRepository { store }
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for PortfolioRepository {
    async fn get_cash_balance(&self) -> Result<Decimal> {
        Ok(get_json::<Decimal>(self.store.as_ref(), USD_BALANCE_KEY)
            .await?
            .unwrap_or(DEFAULT_CASH_BALANCE))
    }

    async fn set_cash_balance(&self, balance: Decimal) -> Result<()> {
        set_json(self.store.as_ref(), USD_BALANCE_KEY, &balance).await?;
        Ok(())
    }
}
