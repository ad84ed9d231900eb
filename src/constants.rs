use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Starting cash balance for a fresh paper portfolio, in USD.
pub const DEFAULT_CASH_BALANCE: Decimal = dec!(100_000);

/// Decimal precision for serialized valuation figures
pub const DECIMAL_PRECISION: u32 = 8;

/// Quantity threshold below which a position counts as closed
pub const QUANTITY_THRESHOLD: Decimal = dec!(0.0000000001);
