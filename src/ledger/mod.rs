pub mod calculator;
pub mod ledger_model;

pub use calculator::LedgerCalculator;
pub use ledger_model::{Holding, ReplayOutcome, SkipReason, SkippedTrade};
