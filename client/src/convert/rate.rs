//! # Rate Source Resolver
//!
//! Holds the per-currency quote table and selects the effective rate: the
//! live fetched quote or the user's override, never both.

use crate::convert::engine::Currency;
use crate::convert::ConversionState;
use crate::utils::format::parse_decimal;
use chrono::{DateTime, Utc};
use shared::dto::exchange::ExchangeRateResponse;
use std::collections::HashMap;
use tracing::debug;

/// Where a quote table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteOrigin {
    /// Fetched from the backend
    Live,
    /// Built from the static offline table after a fetch failure
    Fallback,
}

/// One currency's resolved quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeQuote {
    pub currency: Currency,
    /// KRW per quoted unit (per 100 for JPY)
    pub rate_krw_per_unit: f64,
    pub fetched_at: DateTime<Utc>,
}

/// The shared quote table, replaced wholesale on every successful fetch.
///
/// Screens must not hold a rate out of this table across a refresh; every
/// conversion resolves its rate through [`effective_rate`] at the moment it
/// runs.
#[derive(Debug, Clone)]
pub struct RateTable {
    quotes: HashMap<Currency, ExchangeQuote>,
    pub origin: QuoteOrigin,
}

impl RateTable {
    /// Empty table for the moments before the first fetch resolves.
    pub fn empty() -> Self {
        Self {
            quotes: HashMap::new(),
            origin: QuoteOrigin::Live,
        }
    }

    /// Build a table from a fetch response. Unknown currency codes are
    /// skipped; non-positive rates are dropped as provider glitches.
    pub fn from_response(response: &ExchangeRateResponse) -> Self {
        let fetched_at = Utc::now();
        let mut quotes = HashMap::new();

        for (code, info) in &response.rates {
            let Some(currency) = Currency::from_code(code) else {
                debug!(code = %code, "Skipping unsupported currency in rate response");
                continue;
            };
            if info.rate_krw_per_unit <= 0.0 {
                debug!(code = %code, rate = info.rate_krw_per_unit, "Skipping non-positive rate");
                continue;
            }
            quotes.insert(
                currency,
                ExchangeQuote {
                    currency,
                    rate_krw_per_unit: info.rate_krw_per_unit,
                    fetched_at,
                },
            );
        }

        Self {
            quotes,
            origin: QuoteOrigin::Live,
        }
    }

    /// The static offline table, same shape as a live one, so the calculator
    /// keeps working when the rate endpoint is unreachable.
    pub fn fallback() -> Self {
        let fetched_at = Utc::now();
        let quotes = Currency::all()
            .iter()
            .map(|&currency| {
                (
                    currency,
                    ExchangeQuote {
                        currency,
                        rate_krw_per_unit: currency.fallback_rate(),
                        fetched_at,
                    },
                )
            })
            .collect();

        Self {
            quotes,
            origin: QuoteOrigin::Fallback,
        }
    }

    pub fn get(&self, currency: Currency) -> Option<&ExchangeQuote> {
        self.quotes.get(&currency)
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Resolve the rate a conversion should use right now.
///
/// Custom mode parses the user's override text; `None` (empty, garbage, or
/// non-positive) means "cannot convert" and callers clear the dependent
/// field. Outside custom mode the live table answers, with `None` while no
/// quote for the selected currency has loaded.
pub fn effective_rate(state: &ConversionState, rates: &RateTable) -> Option<f64> {
    if state.is_custom_rate {
        parse_decimal(&state.custom_rate_text).filter(|rate| *rate > 0.0)
    } else {
        rates
            .get(state.currency)
            .map(|quote| quote.rate_krw_per_unit)
            .filter(|rate| *rate > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::exchange::RateInfo;

    fn live_table(rate: f64) -> RateTable {
        let mut rates = HashMap::new();
        rates.insert(
            "USD".to_string(),
            RateInfo {
                rate_krw_per_unit: rate,
                last_updated: None,
            },
        );
        RateTable::from_response(&ExchangeRateResponse { rates })
    }

    #[test]
    fn live_rate_resolves_when_not_custom() {
        let state = ConversionState::default();
        assert_eq!(effective_rate(&state, &live_table(1350.0)), Some(1350.0));
    }

    #[test]
    fn no_quote_loaded_resolves_to_none() {
        let state = ConversionState::default();
        assert_eq!(effective_rate(&state, &RateTable::empty()), None);
    }

    #[test]
    fn custom_rate_overrides_live_quote() {
        let state = ConversionState {
            is_custom_rate: true,
            custom_rate_text: "1,400".to_string(),
            ..Default::default()
        };
        assert_eq!(effective_rate(&state, &live_table(1350.0)), Some(1400.0));
    }

    #[test]
    fn unparsable_or_non_positive_custom_rate_is_none() {
        for text in ["", "abc", "0", "-3"] {
            let state = ConversionState {
                is_custom_rate: true,
                custom_rate_text: text.to_string(),
                ..Default::default()
            };
            assert_eq!(effective_rate(&state, &live_table(1350.0)), None, "text: {:?}", text);
        }
    }

    #[test]
    fn fallback_table_covers_every_currency() {
        let table = RateTable::fallback();
        assert_eq!(table.origin, QuoteOrigin::Fallback);
        for &currency in Currency::all() {
            let quote = table.get(currency).unwrap();
            assert_eq!(quote.rate_krw_per_unit, currency.fallback_rate());
        }
    }

    #[test]
    fn from_response_skips_junk_entries() {
        let mut rates = HashMap::new();
        rates.insert(
            "USD".to_string(),
            RateInfo {
                rate_krw_per_unit: 1350.0,
                last_updated: None,
            },
        );
        rates.insert(
            "GBP".to_string(),
            RateInfo {
                rate_krw_per_unit: 1700.0,
                last_updated: None,
            },
        );
        rates.insert(
            "EUR".to_string(),
            RateInfo {
                rate_krw_per_unit: -1.0,
                last_updated: None,
            },
        );

        let table = RateTable::from_response(&ExchangeRateResponse { rates });
        assert!(table.get(Currency::Usd).is_some());
        assert!(table.get(Currency::Eur).is_none());
    }
}
