//! # Currency Conversion
//!
//! The bidirectional KRW-to-foreign calculator core: rate selection,
//! conversion math, and the conversion state the handlers drive.
//!
//! ```text
//! GET /api/exchange-rate ──> RateTable (replaced wholesale per fetch,
//!         │                             fallback table on failure)
//!         ▼
//!   effective_rate(state, table)   - live quote or user override, never both
//!         │
//!         ▼
//!   engine::{base_to_foreign, foreign_to_base}
//!         │                        - per-currency quote units (JPY per 100)
//!         ▼
//!   utils::format::{format_krw, format_foreign}
//!                                  - rounding only at this boundary
//! ```
//!
//! ## Module Overview
//!
//! - **[`rate`]**: [`rate::RateTable`] and the live-vs-override resolver
//! - **[`engine`]**: the pure conversion functions and [`Currency`] unit rules
//!
//! Everything here is synchronous and free of UI dependencies; the screens
//! own only strings and booleans ([`ConversionState`]) and call into
//! [`crate::app::handlers::calculator`] on each keystroke.

pub mod engine;
pub mod rate;

pub use engine::{base_to_foreign, foreign_to_base, Currency};
pub use rate::{effective_rate, ExchangeQuote, QuoteOrigin, RateTable};

/// Which amount field the user edited last.
///
/// The edited field is authoritative: the other one is always recomputed
/// from it, never the reverse, so partial input is never destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    /// The KRW (base) amount field
    Base,
    /// The foreign-currency amount field
    Foreign,
}

/// Calculator input state as the screens hold it.
///
/// Amounts are kept as display strings, not numbers, so mid-typing states
/// (`"1,234."`) survive recomputation of the opposite field. Both fields
/// empty is a legitimate cleared state.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionState {
    /// Foreign currency currently selected
    pub currency: Currency,
    /// KRW amount field text (comma-grouped while typing)
    pub krw_text: String,
    /// Foreign amount field text
    pub foreign_text: String,
    /// Whether the user-supplied rate override is active
    pub is_custom_rate: bool,
    /// Override rate text; seeded from the live rate when custom mode is
    /// enabled, then owned by the user until custom mode is disabled
    pub custom_rate_text: String,
    /// Whether the KRW field occupies the first input slot
    pub is_base_first: bool,
    /// Field the user edited last; the anchor for recomputation
    pub edited_field: AmountField,
}

impl Default for ConversionState {
    fn default() -> Self {
        Self {
            currency: Currency::Usd,
            krw_text: String::new(),
            foreign_text: String::new(),
            is_custom_rate: false,
            custom_rate_text: String::new(),
            is_base_first: true,
            edited_field: AmountField::Base,
        }
    }
}

impl ConversionState {
    /// Parsed KRW amount, `None` when the field is empty or mid-garbage.
    pub fn base_amount(&self) -> Option<f64> {
        crate::utils::format::parse_decimal(&self.krw_text)
    }

    /// Parsed foreign amount.
    pub fn foreign_amount(&self) -> Option<f64> {
        crate::utils::format::parse_decimal(&self.foreign_text)
    }

    /// Clear both amount fields. There is no meaningful partial state.
    pub fn clear_amounts(&mut self) {
        self.krw_text.clear();
        self.foreign_text.clear();
    }
}
