use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ledger::Holding;
use crate::quotes::PriceObservation;

use super::trades_errors::{Result, TradeError};
use super::trades_model::{Trade, TradeIntent, TradeType};

/// Validates trade intents against the current ledger snapshot and turns them
/// into fully-populated trade records ready for persistence.
///
/// Validation never mutates anything: a rejected intent leaves holdings and
/// cash exactly as they were, and the caller receives the reason code.
#[derive(Debug, Default, Clone)]
pub struct TradeValidator {}

impl TradeValidator {
    pub fn new() -> Self {
        TradeValidator {}
    }

    /// `reference` is the session's latest observation; it must match the
    /// intent's symbol and be younger than `max_quote_age` to settle against.
    pub fn validate(
        &self,
        intent: &TradeIntent,
        reference: Option<&PriceObservation>,
        holdings: &[Holding],
        cash_balance: Decimal,
        max_quote_age: Duration,
        now: DateTime<Utc>,
    ) -> Result<Trade> {
        if intent.usd_amount <= Decimal::ZERO {
            return Err(TradeError::InvalidAmount(format!(
                "usd amount must be positive, got {}",
                intent.usd_amount
            )));
        }

        let reference = reference
            .filter(|observation| {
                observation.ticker == intent.symbol && observation.is_fresh(now, max_quote_age)
            })
            .ok_or_else(|| TradeError::NoPrice(intent.symbol.clone()))?;

        // Observation validation guarantees price > 0.
        let amount = intent.usd_amount / reference.price;

        match intent.trade_type {
            TradeType::Buy => {
                if intent.usd_amount > cash_balance {
                    return Err(TradeError::InsufficientFunds {
                        requested: intent.usd_amount,
                        available: cash_balance,
                    });
                }
            }
            TradeType::Sell => {
                let available = holdings
                    .iter()
                    .find(|holding| holding.symbol == intent.symbol)
                    .map(|holding| holding.amount)
                    .unwrap_or(Decimal::ZERO);
                if amount > available {
                    return Err(TradeError::InsufficientHoldings {
                        symbol: intent.symbol.clone(),
                        requested: amount,
                        available,
                    });
                }
            }
        }

        Ok(Trade {
            id: Uuid::new_v4().to_string(),
            symbol: intent.symbol.clone(),
            trade_type: intent.trade_type,
            amount,
            price: reference.price,
            usd_amount: intent.usd_amount,
            timestamp: now,
            note: intent.note.clone(),
        })
    }
}
