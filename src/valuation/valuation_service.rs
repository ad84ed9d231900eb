use chrono::{DateTime, Duration, Utc};
use log::debug;
use rust_decimal::Decimal;

use crate::ledger::Holding;
use crate::quotes::PriceObservation;

use super::valuation_model::{HoldingValuation, PortfolioSnapshot};

/// Joins replayed holdings with the session's latest observation.
///
/// Pure and side-effect free, so it is safe to call on every price tick and
/// after every mutation.
#[derive(Debug, Clone)]
pub struct ValuationService {
    max_quote_age: Duration,
}

impl ValuationService {
    pub fn new(max_quote_age: Duration) -> Self {
        ValuationService { max_quote_age }
    }

    /// Observation price when the ticker matches and the observation is
    /// still fresh; average cost otherwise. Stale or foreign observations
    /// fall back silently by design.
    fn effective_price(
        &self,
        holding: &Holding,
        latest: Option<&PriceObservation>,
        now: DateTime<Utc>,
    ) -> Decimal {
        match latest {
            Some(observation)
                if observation.ticker == holding.symbol
                    && observation.is_fresh(now, self.max_quote_age) =>
            {
                observation.price
            }
            _ => holding.average_cost,
        }
    }

    pub fn snapshot(
        &self,
        holdings: &[Holding],
        cash_balance: Decimal,
        latest: Option<&PriceObservation>,
        now: DateTime<Utc>,
    ) -> PortfolioSnapshot {
        let mut valued = Vec::with_capacity(holdings.len());
        let mut total_value = cash_balance;
        let mut total_pnl = Decimal::ZERO;

        for holding in holdings {
            let price = self.effective_price(holding, latest, now);
            let current_value = holding.amount * price;
            let unrealized_pnl = (price - holding.average_cost) * holding.amount;
            // Defined as zero on a zero basis rather than dividing by it.
            let pnl_percent = if holding.total_cost_basis.is_zero() {
                Decimal::ZERO
            } else {
                unrealized_pnl / holding.total_cost_basis * Decimal::ONE_HUNDRED
            };

            total_value += current_value;
            total_pnl += unrealized_pnl;

            valued.push(HoldingValuation {
                symbol: holding.symbol.clone(),
                amount: holding.amount,
                average_cost: holding.average_cost,
                current_value,
                unrealized_pnl,
                pnl_percent,
            });
        }

        debug!(
            "Snapshot of {} holdings: total value {}",
            valued.len(),
            total_value
        );

        PortfolioSnapshot {
            cash_balance,
            holdings: valued,
            total_value,
            total_pnl,
            as_of: now,
        }
    }
}
