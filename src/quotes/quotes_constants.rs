/// Observations older than this are never used for valuation (5 minutes).
pub const DEFAULT_MAX_QUOTE_AGE_MS: i64 = 5 * 60 * 1000;

/// Default cadence for polling the price source collaborator.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;
