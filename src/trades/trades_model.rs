use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::decimal_serde::*;

use super::trades_errors::TradeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    Buy,
    Sell,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Buy => "buy",
            TradeType::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeType {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(TradeType::Buy),
            "sell" => Ok(TradeType::Sell),
            other => Err(TradeError::InvalidData(format!(
                "unknown trade type: {}",
                other
            ))),
        }
    }
}

/// A settled paper trade. Immutable once persisted; removed only by a full
/// ledger reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    #[serde(with = "decimal_serde")]
    pub amount: Decimal,
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
    #[serde(with = "decimal_serde")]
    pub usd_amount: Decimal,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "notes", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// User trade intent as delivered by the presentation layer. The USD amount
/// arrives as a bare JSON number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeIntent {
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub symbol: String,
    #[serde(with = "decimal_serde_flexible")]
    pub usd_amount: Decimal,
    #[serde(rename = "notes", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
