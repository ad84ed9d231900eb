use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::*;

/// One holding joined with the effective price used to value it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub symbol: String,
    #[serde(with = "decimal_serde")]
    pub amount: Decimal,
    #[serde(with = "decimal_serde")]
    pub average_cost: Decimal,
    #[serde(with = "decimal_serde")]
    pub current_value: Decimal,
    #[serde(with = "decimal_serde")]
    pub unrealized_pnl: Decimal,
    #[serde(with = "decimal_serde")]
    pub pnl_percent: Decimal,
}

/// Point-in-time read-only view of the whole portfolio, pushed to the
/// presentation layer on every tick and after every mutation. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    #[serde(with = "decimal_serde")]
    pub cash_balance: Decimal,
    pub holdings: Vec<HoldingValuation>,
    #[serde(with = "decimal_serde")]
    pub total_value: Decimal,
    #[serde(with = "decimal_serde")]
    pub total_pnl: Decimal,
    pub as_of: DateTime<Utc>,
}
