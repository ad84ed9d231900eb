use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::ledger::ledger_model::{is_amount_significant, Holding, ReplayOutcome, SkippedTrade};

/// Per-symbol position while the fold is running.
#[derive(Debug, Default)]
pub(super) struct PositionState {
    pub(super) amount: Decimal,
    pub(super) average_cost: Decimal,
    pub(super) total_cost_basis: Decimal,
}

/// Mutable fold state, visible only within the calculator module.
#[derive(Debug, Default)]
pub(super) struct LedgerState {
    pub(super) cash_balance: Decimal,
    pub(super) positions: HashMap<String, PositionState>,
    pub(super) skipped: Vec<SkippedTrade>,
}

impl LedgerState {
    pub(super) fn new(starting_cash: Decimal) -> Self {
        LedgerState {
            cash_balance: starting_cash,
            ..Default::default()
        }
    }

    pub(super) fn position_mut(&mut self, symbol: &str) -> &mut PositionState {
        self.positions.entry(symbol.to_string()).or_default()
    }

    pub(super) fn held_amount(&self, symbol: &str) -> Decimal {
        self.positions
            .get(symbol)
            .map(|position| position.amount)
            .unwrap_or(Decimal::ZERO)
    }

    /// Consumes the fold state into the outcome, dropping closed positions
    /// and sorting the live ones by symbol.
    pub(super) fn finalize(self) -> ReplayOutcome {
        let mut holdings: Vec<Holding> = self
            .positions
            .into_iter()
            .filter(|(_, position)| is_amount_significant(&position.amount))
            .map(|(symbol, position)| Holding {
                symbol,
                amount: position.amount,
                average_cost: position.average_cost,
                total_cost_basis: position.total_cost_basis,
            })
            .collect();

        holdings.sort_by(|a, b| a.symbol.cmp(&b.symbol));

        ReplayOutcome {
            cash_balance: self.cash_balance,
            holdings,
            skipped: self.skipped,
        }
    }
}
