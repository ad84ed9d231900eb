use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::constants::DEFAULT_CASH_BALANCE;
use crate::errors::Result;
use crate::ledger::{LedgerCalculator, ReplayOutcome};
use crate::quotes::QuoteState;
use crate::trades::{Trade, TradeIntent, TradeRepositoryTrait, TradeValidator};
use crate::valuation::{PortfolioSnapshot, ValuationService};

use super::portfolio_errors::PortfolioError;
use super::portfolio_repository::PortfolioRepositoryTrait;

/// The only entry point allowed to append trades or touch the cash balance.
///
/// Every mutation holds the write lock across its whole read-modify-write
/// against the store, so two concurrent appends cannot both read the same log
/// and lose one of the writes.
pub struct PortfolioService {
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
    quote_state: Arc<QuoteState>,
    validator: TradeValidator,
    calculator: LedgerCalculator,
    valuation: ValuationService,
    write_lock: Mutex<()>,
}

impl PortfolioService {
    pub fn new(
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
        quote_state: Arc<QuoteState>,
    ) -> Self {
        let valuation = ValuationService::new(quote_state.max_age());
        Self {
            trade_repository,
            portfolio_repository,
            quote_state,
            validator: TradeValidator::new(),
            calculator: LedgerCalculator::new(),
            valuation,
            write_lock: Mutex::new(()),
        }
    }

    async fn replay_ledger(&self) -> Result<ReplayOutcome> {
        let trades = self.trade_repository.get_trades().await?;
        let starting_cash = self.portfolio_repository.get_cash_balance().await?;
        Ok(self.calculator.replay(trades, starting_cash))
    }

    /// Current ledger state, including any trades the replay refused to apply.
    pub async fn get_ledger(&self) -> Result<ReplayOutcome> {
        self.replay_ledger().await
    }

    /// Replay joined with the latest session observation.
    pub async fn get_snapshot(&self) -> Result<PortfolioSnapshot> {
        let now = Utc::now();
        let ledger = self.replay_ledger().await?;
        let latest = self.quote_state.latest().await;
        Ok(self
            .valuation
            .snapshot(&ledger.holdings, ledger.cash_balance, latest.as_ref(), now))
    }

    /// Validates the intent against a freshly replayed snapshot and appends
    /// it to the durable log. At most one append takes effect per call, and a
    /// rejected intent leaves the ledger untouched.
    pub async fn append_trade(&self, intent: &TradeIntent) -> Result<Trade> {
        let _guard = self.write_lock.lock().await;
        let now = Utc::now();

        let ledger = self.replay_ledger().await?;
        let reference = self.quote_state.latest().await;
        let trade = self.validator.validate(
            intent,
            reference.as_ref(),
            &ledger.holdings,
            ledger.cash_balance,
            self.quote_state.max_age(),
            now,
        )?;

        let trade = self.trade_repository.append_trade(trade).await?;
        info!(
            "Appended {} trade {} for {}",
            trade.trade_type, trade.id, trade.symbol
        );
        Ok(trade)
    }

    /// Explicit user correction of the cash balance; bypasses replay.
    pub async fn override_cash_balance(&self, new_balance: Decimal) -> Result<()> {
        if new_balance < Decimal::ZERO {
            return Err(PortfolioError::InvalidBalance(new_balance).into());
        }
        let _guard = self.write_lock.lock().await;
        self.portfolio_repository.set_cash_balance(new_balance).await
    }

    /// Clears the trade log and restores the default starting balance.
    /// Irreversible.
    pub async fn reset(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.trade_repository.clear_trades().await?;
        self.portfolio_repository
            .set_cash_balance(DEFAULT_CASH_BALANCE)
            .await?;
        warn!("Portfolio ledger reset to defaults");
        Ok(())
    }
}
