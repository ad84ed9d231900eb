use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::ledger::Holding;
use crate::quotes::PriceObservation;
use crate::valuation::ValuationService;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

fn service() -> ValuationService {
    ValuationService::new(Duration::minutes(5))
}

fn holding(symbol: &str, amount: Decimal, average_cost: Decimal) -> Holding {
    Holding {
        symbol: symbol.to_string(),
        amount,
        average_cost,
        total_cost_basis: amount * average_cost,
    }
}

fn observation(ticker: &str, price: Decimal, age: Duration) -> PriceObservation {
    PriceObservation {
        ticker: ticker.to_string(),
        price,
        timestamp: now() - age,
    }
}

#[test]
fn fresh_observation_prices_the_matching_holding() {
    let holdings = vec![holding("BTCUSD", dec!(2), dec!(50))];
    let latest = observation("BTCUSD", dec!(80), Duration::minutes(1));

    let snapshot = service().snapshot(&holdings, dec!(1000), Some(&latest), now());

    assert_eq!(snapshot.total_value, dec!(1000) + dec!(160));
    assert_eq!(snapshot.holdings[0].current_value, dec!(160));
    assert_eq!(snapshot.holdings[0].unrealized_pnl, dec!(60));
    assert_eq!(snapshot.holdings[0].pnl_percent, dec!(60));
    assert_eq!(snapshot.total_pnl, dec!(60));
}

#[test]
fn stale_observation_falls_back_to_average_cost() {
    let holdings = vec![holding("BTCUSD", dec!(1), dec!(50))];
    // Observed at $80 six minutes ago: too old to use.
    let latest = observation("BTCUSD", dec!(80), Duration::minutes(6));

    let snapshot = service().snapshot(&holdings, dec!(0), Some(&latest), now());

    assert_eq!(snapshot.total_value, dec!(50));
    assert_eq!(snapshot.holdings[0].unrealized_pnl, dec!(0));
}

#[test]
fn foreign_ticker_falls_back_to_average_cost() {
    let holdings = vec![holding("ETHUSD", dec!(10), dec!(3000))];
    let latest = observation("BTCUSD", dec!(60000), Duration::minutes(1));

    let snapshot = service().snapshot(&holdings, dec!(0), Some(&latest), now());

    assert_eq!(snapshot.total_value, dec!(30000));
    assert_eq!(snapshot.holdings[0].unrealized_pnl, dec!(0));
}

#[test]
fn missing_observation_values_everything_at_cost() {
    let holdings = vec![
        holding("BTCUSD", dec!(1), dec!(60000)),
        holding("ETHUSD", dec!(10), dec!(3000)),
    ];

    let snapshot = service().snapshot(&holdings, dec!(10000), None, now());

    assert_eq!(snapshot.total_value, dec!(10000) + dec!(60000) + dec!(30000));
    assert_eq!(snapshot.total_pnl, dec!(0));
}

#[test]
fn pnl_percent_is_zero_on_zero_basis() {
    // Contrived zero-basis holding; percentage must not divide by zero.
    let holdings = vec![Holding {
        symbol: "BTCUSD".to_string(),
        amount: dec!(1),
        average_cost: dec!(0),
        total_cost_basis: dec!(0),
    }];
    let latest = observation("BTCUSD", dec!(100), Duration::minutes(1));

    let snapshot = service().snapshot(&holdings, dec!(0), Some(&latest), now());

    assert_eq!(snapshot.holdings[0].pnl_percent, dec!(0));
    assert_eq!(snapshot.holdings[0].unrealized_pnl, dec!(100));
}

#[test]
fn empty_portfolio_is_just_cash() {
    let snapshot = service().snapshot(&[], dec!(100000), None, now());
    assert_eq!(snapshot.total_value, dec!(100000));
    assert_eq!(snapshot.total_pnl, dec!(0));
    assert!(snapshot.holdings.is_empty());
}
