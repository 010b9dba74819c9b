//! # Currency Conversion Engine
//!
//! Pure bidirectional conversion between a KRW amount and a foreign amount,
//! given a resolved rate and the per-currency quote convention.
//!
//! Rates are quoted as KRW per quoted unit. For most currencies the quoted
//! unit is 1; JPY follows the market convention of quoting per 100 JPY, so
//! its conversions carry an extra factor of 100. That rule is hard-coded per
//! currency on [`Currency::quote_units`] - a new "per N units" currency must
//! extend the match explicitly rather than flow through a generic parameter.
//!
//! No rounding happens here. Callers round only when formatting for display,
//! so repeated edits re-derive from full-precision values.

use serde::{Deserialize, Serialize};

/// Foreign currencies supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US dollar
    Usd,
    /// Japanese yen (quoted per 100 JPY)
    Jpy,
    /// Chinese yuan
    Cny,
    /// Euro
    Eur,
}

impl Currency {
    /// All currencies in display order
    pub fn all() -> &'static [Currency] {
        &[Currency::Usd, Currency::Jpy, Currency::Cny, Currency::Eur]
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
            Currency::Eur => "EUR",
        }
    }

    /// Parse an ISO code as it appears in the rate response.
    pub fn from_code(code: &str) -> Option<Currency> {
        match code {
            "USD" => Some(Currency::Usd),
            "JPY" => Some(Currency::Jpy),
            "CNY" => Some(Currency::Cny),
            "EUR" => Some(Currency::Eur),
            _ => None,
        }
    }

    /// How many units of the currency one quote covers.
    ///
    /// JPY is quoted per 100 units; everything else per 1.
    pub fn quote_units(&self) -> f64 {
        match self {
            Currency::Jpy => 100.0,
            _ => 1.0,
        }
    }

    /// Static offline rate used when no live quote can be fetched.
    pub fn fallback_rate(&self) -> f64 {
        match self {
            Currency::Usd => 1350.0,
            Currency::Jpy => 950.0,
            Currency::Cny => 190.0,
            Currency::Eur => 1400.0,
        }
    }
}

/// Convert a KRW amount to the foreign amount at `rate` KRW per quoted unit.
///
/// # Examples
///
/// ```rust
/// use client::convert::{base_to_foreign, Currency};
///
/// // 10,000 KRW at 950 KRW per 100 JPY is 1052.63... JPY
/// let jpy = base_to_foreign(10_000.0, 950.0, Currency::Jpy);
/// assert!((jpy - 1052.6315).abs() < 0.001);
/// ```
pub fn base_to_foreign(krw_amount: f64, rate: f64, currency: Currency) -> f64 {
    krw_amount / rate * currency.quote_units()
}

/// Convert a foreign amount back to KRW at `rate` KRW per quoted unit.
pub fn foreign_to_base(foreign_amount: f64, rate: f64, currency: Currency) -> f64 {
    foreign_amount * rate / currency.quote_units()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::format::format_foreign;

    #[test]
    fn usd_round_numbers() {
        assert_eq!(base_to_foreign(135_000.0, 1350.0, Currency::Usd), 100.0);
        assert_eq!(foreign_to_base(100.0, 1350.0, Currency::Usd), 135_000.0);
    }

    #[test]
    fn jpy_is_quoted_per_100_units() {
        // 950 KRW per 100 JPY: 10,000 KRW buys 1052.63 JPY, not 10.53
        let jpy = base_to_foreign(10_000.0, 950.0, Currency::Jpy);
        assert_eq!(format_foreign(jpy), "1,052.63");

        // And back
        let krw = foreign_to_base(jpy, 950.0, Currency::Jpy);
        assert!((krw - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn conversion_is_inverse_within_rounding_tolerance() {
        let cases = [
            (Currency::Usd, 1350.25),
            (Currency::Cny, 190.4),
            (Currency::Eur, 1401.77),
        ];
        for (currency, rate) in cases {
            for amount in [0.01_f64, 1.0, 123.45, 99_999.99] {
                let round_trip = foreign_to_base(base_to_foreign(amount, rate, currency), rate, currency);
                assert!(
                    (round_trip - amount).abs() < 0.01,
                    "{:?} at {} broke on {}",
                    currency,
                    rate,
                    amount
                );
            }
        }

        // JPY tolerance scales with the 100-unit quote convention
        for amount in [100.0_f64, 10_000.0, 1_234_567.0] {
            let round_trip =
                foreign_to_base(base_to_foreign(amount, 950.0, Currency::Jpy), 950.0, Currency::Jpy);
            assert!((round_trip - amount).abs() < 1.0);
        }
    }

    #[test]
    fn currency_codes_round_trip() {
        for currency in Currency::all() {
            assert_eq!(Currency::from_code(currency.code()), Some(*currency));
        }
        assert_eq!(Currency::from_code("GBP"), None);
    }
}
