mod ledger_calculator;
mod state;
mod trade_handlers;

pub use ledger_calculator::LedgerCalculator;
