// End-to-end tests for the mutation API over the in-memory store.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal_macros::dec;

use crate::errors::Error;
use crate::portfolio::{PortfolioError, PortfolioRepository, PortfolioService};
use crate::quotes::{QuoteState, RawPrice, RawPriceTick};
use crate::storage::storage_constants::TRANSACTIONS_KEY;
use crate::storage::{ensure_schema, KvStore, MemoryKvStore};
use crate::trades::{TradeError, TradeIntent, TradeRepository, TradeType};

struct Fixture {
    store: Arc<MemoryKvStore>,
    quote_state: Arc<QuoteState>,
    service: Arc<PortfolioService>,
}

async fn fixture() -> Fixture {
    let store = Arc::new(MemoryKvStore::new());
    ensure_schema(store.as_ref()).await.unwrap();

    let quote_state = Arc::new(QuoteState::with_default_max_age());
    let service = Arc::new(PortfolioService::new(
        Arc::new(TradeRepository::new(store.clone())),
        Arc::new(PortfolioRepository::new(store.clone())),
        quote_state.clone(),
    ));

    Fixture {
        store,
        quote_state,
        service,
    }
}

async fn ingest_price(fixture: &Fixture, ticker: &str, price: f64) {
    fixture
        .quote_state
        .ingest(&RawPriceTick {
            ticker: ticker.to_string(),
            price: RawPrice::Number(price),
            timestamp: Utc::now().to_rfc3339(),
        })
        .await
        .unwrap();
}

fn intent(trade_type: TradeType, symbol: &str, usd_amount: rust_decimal::Decimal) -> TradeIntent {
    TradeIntent {
        trade_type,
        symbol: symbol.to_string(),
        usd_amount,
        note: None,
    }
}

#[tokio::test]
async fn fresh_portfolio_is_all_cash() {
    let fixture = fixture().await;
    let snapshot = fixture.service.get_snapshot().await.unwrap();
    assert_eq!(snapshot.cash_balance, dec!(100000));
    assert_eq!(snapshot.total_value, dec!(100000));
    assert!(snapshot.holdings.is_empty());
}

#[tokio::test]
async fn buy_then_sell_scenario() {
    let fixture = fixture().await;

    ingest_price(&fixture, "BTCUSD", 60000.0).await;
    let buy = fixture
        .service
        .append_trade(&intent(TradeType::Buy, "BTCUSD", dec!(60000)))
        .await
        .unwrap();
    assert_eq!(buy.amount, dec!(1));

    let ledger = fixture.service.get_ledger().await.unwrap();
    assert_eq!(ledger.cash_balance, dec!(40000));
    let holding = ledger.holding("BTCUSD").unwrap();
    assert_eq!(holding.amount, dec!(1));
    assert_eq!(holding.average_cost, dec!(60000));

    ingest_price(&fixture, "BTCUSD", 70000.0).await;
    let sell = fixture
        .service
        .append_trade(&intent(TradeType::Sell, "BTCUSD", dec!(35000)))
        .await
        .unwrap();
    assert_eq!(sell.amount, dec!(0.5));

    let ledger = fixture.service.get_ledger().await.unwrap();
    assert_eq!(ledger.cash_balance, dec!(75000));
    let holding = ledger.holding("BTCUSD").unwrap();
    assert_eq!(holding.amount, dec!(0.5));
    assert_eq!(holding.average_cost, dec!(60000));

    // The snapshot uses the fresh 70000 quote.
    let snapshot = fixture.service.get_snapshot().await.unwrap();
    assert_eq!(snapshot.total_value, dec!(75000) + dec!(35000));
    assert_eq!(snapshot.total_pnl, dec!(5000));
}

#[tokio::test]
async fn append_is_rejected_without_a_fresh_price() {
    let fixture = fixture().await;
    let err = fixture
        .service
        .append_trade(&intent(TradeType::Buy, "BTCUSD", dec!(100)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Trade(TradeError::NoPrice(_))));

    // Nothing was persisted.
    let ledger = fixture.service.get_ledger().await.unwrap();
    assert_eq!(ledger.cash_balance, dec!(100000));
    assert!(fixture
        .store
        .get(TRANSACTIONS_KEY)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn rejected_oversell_leaves_ledger_unchanged() {
    let fixture = fixture().await;
    ingest_price(&fixture, "BTCUSD", 100.0).await;

    fixture
        .service
        .append_trade(&intent(TradeType::Buy, "BTCUSD", dec!(300)))
        .await
        .unwrap();

    let before = fixture.service.get_ledger().await.unwrap();
    let err = fixture
        .service
        .append_trade(&intent(TradeType::Sell, "BTCUSD", dec!(500)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Trade(TradeError::InsufficientHoldings { .. })
    ));
    assert_eq!(fixture.service.get_ledger().await.unwrap(), before);
}

#[tokio::test]
async fn override_rejects_negative_balance() {
    let fixture = fixture().await;
    let err = fixture
        .service
        .override_cash_balance(dec!(-1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Portfolio(PortfolioError::InvalidBalance(_))
    ));
}

#[tokio::test]
async fn override_sets_the_starting_balance() {
    let fixture = fixture().await;
    fixture
        .service
        .override_cash_balance(dec!(5000))
        .await
        .unwrap();
    let snapshot = fixture.service.get_snapshot().await.unwrap();
    assert_eq!(snapshot.cash_balance, dec!(5000));
}

#[tokio::test]
async fn reset_clears_the_log_and_restores_defaults() {
    let fixture = fixture().await;
    ingest_price(&fixture, "BTCUSD", 100.0).await;
    fixture
        .service
        .append_trade(&intent(TradeType::Buy, "BTCUSD", dec!(300)))
        .await
        .unwrap();
    fixture
        .service
        .override_cash_balance(dec!(5000))
        .await
        .unwrap();

    fixture.service.reset().await.unwrap();

    let ledger = fixture.service.get_ledger().await.unwrap();
    assert_eq!(ledger.cash_balance, dec!(100000));
    assert!(ledger.holdings.is_empty());
}

#[tokio::test]
async fn concurrent_appends_both_land_in_the_log() {
    let fixture = fixture().await;
    ingest_price(&fixture, "BTCUSD", 100.0).await;

    let a = {
        let service = fixture.service.clone();
        tokio::spawn(
            async move { service.append_trade(&intent(TradeType::Buy, "BTCUSD", dec!(100))).await },
        )
    };
    let b = {
        let service = fixture.service.clone();
        tokio::spawn(
            async move { service.append_trade(&intent(TradeType::Buy, "BTCUSD", dec!(200))).await },
        )
    };

    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();

    let ledger = fixture.service.get_ledger().await.unwrap();
    assert_eq!(ledger.cash_balance, dec!(100000) - dec!(300));
    assert_eq!(ledger.holding("BTCUSD").unwrap().amount, dec!(3));
}

#[tokio::test]
async fn persisted_log_uses_the_documented_layout() {
    let fixture = fixture().await;
    ingest_price(&fixture, "BTCUSD", 100.0).await;
    fixture
        .service
        .append_trade(&intent(TradeType::Buy, "BTCUSD", dec!(100)))
        .await
        .unwrap();

    let raw = fixture
        .store
        .get(TRANSACTIONS_KEY)
        .await
        .unwrap()
        .unwrap();
    assert!(raw.contains("\"usdAmount\""));
    assert!(raw.contains("\"type\":\"buy\""));
}
