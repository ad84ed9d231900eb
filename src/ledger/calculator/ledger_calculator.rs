use log::debug;
use rust_decimal::Decimal;

use crate::ledger::ledger_model::ReplayOutcome;
use crate::trades::{Trade, TradeType};

use super::state::LedgerState;
use super::trade_handlers::{handle_buy, handle_sell};

/// Rebuilds holdings and the cash balance by folding the full trade log.
///
/// The replay is a pure fold: the same log and starting balance always
/// produce the same outcome, so it is safe to re-run on every mutation or
/// price tick. Trades that cannot be applied are reported in the outcome's
/// skipped list, never raised as errors.
#[derive(Debug, Default, Clone)]
pub struct LedgerCalculator {}

impl LedgerCalculator {
    pub fn new() -> Self {
        LedgerCalculator {}
    }

    /// Folds `trades` starting from `starting_cash`.
    ///
    /// The durable log is unordered by write sequence, so trades are
    /// re-ordered by timestamp here; the sort is stable, so insertion order
    /// breaks ties.
    pub fn replay(&self, mut trades: Vec<Trade>, starting_cash: Decimal) -> ReplayOutcome {
        debug!("Replaying {} trades", trades.len());
        trades.sort_by_key(|trade| trade.timestamp);

        let mut state = LedgerState::new(starting_cash);
        for trade in &trades {
            match trade.trade_type {
                TradeType::Buy => handle_buy(trade, &mut state),
                TradeType::Sell => handle_sell(trade, &mut state),
            }
        }

        state.finalize()
    }
}
