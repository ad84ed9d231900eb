use chrono::{DateTime, Duration, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::decimal_serde::*;

use super::quotes_errors::{QuoteError, Result};

/// Raw price payload as delivered by the price source. The collaborator may
/// send either a formatted string or a bare number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

/// Inbound price tick crossing the collaborator boundary, unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPriceTick {
    pub ticker: String,
    pub price: RawPrice,
    pub timestamp: String,
}

/// A validated price reading for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceObservation {
    pub ticker: String,
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl RawPriceTick {
    /// Validates the raw tick into a usable observation.
    ///
    /// Empty tickers, unparseable timestamps and unparseable prices are
    /// rejected as `Malformed`; finite prices at or below zero as
    /// `NonPositive`. Never panics on bad input.
    pub fn validate(&self) -> Result<PriceObservation> {
        let ticker = self.ticker.trim();
        if ticker.is_empty() {
            return Err(QuoteError::Malformed("ticker is empty".to_string()));
        }

        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|e| {
                QuoteError::Malformed(format!("bad timestamp '{}': {}", self.timestamp, e))
            })?
            .with_timezone(&Utc);

        let price = match &self.price {
            RawPrice::Number(n) => {
                if !n.is_finite() {
                    return Err(QuoteError::Malformed(format!("non-finite price: {}", n)));
                }
                Decimal::from_f64(*n)
                    .ok_or_else(|| QuoteError::Malformed(format!("unrepresentable price: {}", n)))?
            }
            RawPrice::Text(s) => parse_price_text(s)
                .ok_or_else(|| QuoteError::Malformed(format!("unparseable price: '{}'", s)))?,
        };

        if price <= Decimal::ZERO {
            return Err(QuoteError::NonPositive(price.to_string()));
        }

        Ok(PriceObservation {
            ticker: ticker.to_string(),
            price,
            timestamp,
        })
    }
}

impl PriceObservation {
    /// An observation is fresh when strictly younger than `max_age`.
    pub fn is_fresh(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now.signed_duration_since(self.timestamp) < max_age
    }
}

/// Parses a scraped price string. The source uses (possibly non-breaking)
/// spaces as thousands separators and a comma decimal mark, and its number
/// parsing stops at the first character it cannot read; reproduce that by
/// stripping all whitespace, treating the first comma as the decimal mark,
/// and taking the longest numeric prefix.
fn parse_price_text(s: &str) -> Option<Decimal> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.replacen(',', ".", 1);

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in cleaned.char_indices() {
        match c {
            '-' | '+' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            '0'..='9' => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }

    let numeric = &cleaned[..end];
    if !numeric.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    Decimal::from_str(numeric).ok()
}
