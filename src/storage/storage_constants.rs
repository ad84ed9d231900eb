/// Key for the append-only trade log
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Key for the persisted starting cash balance
pub const USD_BALANCE_KEY: &str = "usdBalance";

/// Key for user settings
pub const SETTINGS_KEY: &str = "settings";

/// Key for the persisted layout version
pub const SCHEMA_VERSION_KEY: &str = "schemaVersion";

/// Current persisted layout version
pub const SCHEMA_VERSION: u32 = 1;
