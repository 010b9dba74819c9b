//! # Exchange Rate Endpoint
//!
//! Fetches the per-currency KRW rate table for the currency calculator.
//!
//! Failure handling lives with the caller: the fetch task substitutes the
//! static fallback table on any error here, so the calculator never ends up
//! without a usable rate.

use super::client::ApiClient;
use shared::dto::exchange::ExchangeRateResponse;

/// Get the current exchange-rate table.
#[tracing::instrument(skip(client))]
pub async fn get_exchange_rates(client: &ApiClient) -> Result<ExchangeRateResponse, String> {
    let start = std::time::Instant::now();
    let url = format!("{}/api/exchange-rate", client.base_url());

    tracing::debug!("Fetching exchange rates");

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Exchange rate network error");
        format!("Network error: {}", e)
    })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = response.json::<ExchangeRateResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Exchange rate parse error");
            format!("Failed to parse response: {}", e)
        });

        if let Ok(ref rates) = result {
            tracing::debug!(
                duration_ms = duration.as_millis(),
                currency_count = rates.rates.len(),
                "Exchange rates fetched successfully"
            );
        }
        result
    } else {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Exchange rate fetch failed"
        );
        Err(format!("Failed to fetch exchange rates: {}", status))
    }
}
