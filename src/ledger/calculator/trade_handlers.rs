use log::warn;
use rust_decimal::Decimal;

use crate::ledger::ledger_model::{is_amount_significant, SkipReason, SkippedTrade};
use crate::trades::Trade;

use super::state::LedgerState;

/// Applies a buy: cash out, quantity and cost basis in, average re-blended.
pub(super) fn handle_buy(trade: &Trade, state: &mut LedgerState) {
    state.cash_balance -= trade.usd_amount;

    let position = state.position_mut(&trade.symbol);
    position.total_cost_basis += trade.amount * trade.price;
    position.amount += trade.amount;
    if position.amount > Decimal::ZERO {
        position.average_cost = position.total_cost_basis / position.amount;
    }
}

/// Applies a sell. Sells exceeding the held amount are recorded as skipped
/// and leave the state untouched; a corrupted or concurrently-written log
/// must not poison the fold.
pub(super) fn handle_sell(trade: &Trade, state: &mut LedgerState) {
    let held = state.held_amount(&trade.symbol);
    if held < trade.amount {
        warn!(
            "Skipping sell {} of {} {} (held {})",
            trade.id, trade.amount, trade.symbol, held
        );
        state.skipped.push(SkippedTrade {
            trade_id: trade.id.clone(),
            symbol: trade.symbol.clone(),
            reason: SkipReason::InsufficientHoldings,
        });
        return;
    }

    state.cash_balance += trade.usd_amount;

    let position = state.position_mut(&trade.symbol);
    let remaining = position.amount - trade.amount;
    if is_amount_significant(&remaining) {
        // Sells never move the per-unit average; only the basis shrinks.
        position.total_cost_basis = remaining * position.average_cost;
        position.amount = remaining;
    } else {
        // Closing the position zeroes the averages exactly, leaving no
        // rounding residue behind.
        position.amount = Decimal::ZERO;
        position.average_cost = Decimal::ZERO;
        position.total_cost_basis = Decimal::ZERO;
    }
}
