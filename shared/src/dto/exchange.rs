//! # Exchange Rate DTOs
//!
//! Per-currency KRW exchange rates for the currency calculator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single currency's quote.
///
/// `rate_krw_per_unit` is KRW per quoted unit of the currency. For most
/// currencies the quoted unit is 1; JPY follows the market convention of
/// quoting per 100 JPY. The unit convention is the client's concern, not
/// part of the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateInfo {
    pub rate_krw_per_unit: f64,
    /// Epoch milliseconds of the provider's last update, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
}

/// Response body for `GET /api/exchange-rate`, keyed by currency code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateResponse {
    pub rates: HashMap<String, RateInfo>,
}
