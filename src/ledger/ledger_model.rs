use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::QUANTITY_THRESHOLD;
use crate::utils::decimal_serde::*;

/// Quantities below the threshold count as a closed position.
pub fn is_amount_significant(amount: &Decimal) -> bool {
    amount.abs() >= QUANTITY_THRESHOLD
}

/// Current non-zero position in one asset, derived exclusively by replay.
///
/// Invariant: `amount == 0` implies `average_cost == 0` and
/// `total_cost_basis == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    #[serde(with = "decimal_serde")]
    pub amount: Decimal,
    #[serde(with = "decimal_serde")]
    pub average_cost: Decimal,
    #[serde(with = "decimal_serde")]
    pub total_cost_basis: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    InsufficientHoldings,
}

/// A trade the replay refused to apply, reported to callers instead of being
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedTrade {
    pub trade_id: String,
    pub symbol: String,
    pub reason: SkipReason,
}

/// Result of folding the full trade log from a starting cash balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayOutcome {
    #[serde(with = "decimal_serde")]
    pub cash_balance: Decimal,
    pub holdings: Vec<Holding>,
    pub skipped: Vec<SkippedTrade>,
}

impl ReplayOutcome {
    pub fn holding(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.symbol == symbol)
    }
}
