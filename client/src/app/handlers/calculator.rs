//! # Calculator Handlers
//!
//! The keystroke-level choreography of the bidirectional calculator:
//! which field is authoritative, when the other is recomputed, and how the
//! swap operation re-anchors.
//!
//! Invariant maintained throughout: the field the user last edited is the
//! anchor, and the opposite field is always a pure function of
//! `(anchor, effective rate, currency)`. The anchor's text is never rewritten
//! by a recomputation - doing so would destroy cursor position and partial
//! input mid-typing.

use crate::app::state::{CalculatorState, ConversionRecord, MAX_CONVERSION_HISTORY};
use crate::convert::{base_to_foreign, effective_rate, foreign_to_base, AmountField, Currency, RateTable};
use crate::utils::format::{
    format_foreign, format_krw, format_plain, format_with_separators, parse_decimal,
};

/// Apply one keystroke's worth of edit to an amount field.
///
/// The edited field keeps the user's text (re-grouped, fragment preserved);
/// the opposite field is recomputed exactly once.
pub fn on_amount_edited(calc: &mut CalculatorState, field: AmountField, text: &str) {
    let formatted = format_with_separators(text);
    match field {
        AmountField::Base => calc.conversion.krw_text = formatted,
        AmountField::Foreign => calc.conversion.foreign_text = formatted,
    }
    calc.conversion.edited_field = field;
    recompute_other(calc, field);
}

/// Enable or disable the custom-rate override.
///
/// Enabling seeds the override text with the currently selected currency's
/// live rate - a one-time copy, not a binding. Later live refreshes leave
/// the override alone until the user turns custom mode off.
pub fn set_custom_rate_enabled(calc: &mut CalculatorState, enabled: bool) {
    if enabled && !calc.conversion.is_custom_rate {
        if let Some(quote) = calc.rates.get(calc.conversion.currency) {
            calc.conversion.custom_rate_text = format_plain(quote.rate_krw_per_unit);
        }
    }
    calc.conversion.is_custom_rate = enabled;
    let edited = calc.conversion.edited_field;
    recompute_other(calc, edited);
}

/// Apply an edit to the custom-rate field.
///
/// The dependent amount field recomputes from the anchor; the anchor itself
/// is not re-touched. An unparsable rate clears the dependent field.
pub fn on_custom_rate_edited(calc: &mut CalculatorState, text: &str) {
    calc.conversion.custom_rate_text = text.to_string();
    let edited = calc.conversion.edited_field;
    recompute_other(calc, edited);
}

/// Select a different foreign currency.
///
/// Switching currency leaves custom mode: the override was priced against
/// the previous currency's quote and keeping it would silently misconvert.
pub fn set_currency(calc: &mut CalculatorState, currency: Currency) {
    calc.conversion.currency = currency;
    calc.conversion.is_custom_rate = false;
    calc.conversion.custom_rate_text.clear();
    let edited = calc.conversion.edited_field;
    recompute_other(calc, edited);
}

/// Swap which currency occupies the first input slot.
///
/// The numeric value displayed in the first slot is the anchor: it stays in
/// place, gets re-interpreted as the other currency, and the second slot is
/// recomputed from it. The old second-slot value is discarded, never reused
/// as the new first value.
pub fn swap_slots(calc: &mut CalculatorState) {
    let conv = &mut calc.conversion;
    let anchor = if conv.is_base_first {
        conv.krw_text.clone()
    } else {
        conv.foreign_text.clone()
    };

    conv.is_base_first = !conv.is_base_first;

    // The first slot now belongs to the other field; move the anchored text
    // into it and make it the authoritative side
    if conv.is_base_first {
        conv.krw_text = anchor;
        conv.edited_field = AmountField::Base;
    } else {
        conv.foreign_text = anchor;
        conv.edited_field = AmountField::Foreign;
    }

    let edited = calc.conversion.edited_field;
    recompute_other(calc, edited);
}

/// Clear both amount fields.
pub fn clear_amounts(calc: &mut CalculatorState) {
    calc.conversion.clear_amounts();
}

/// Replace the quote table after a fetch and re-derive the dependent field.
///
/// In custom mode the override keeps governing the conversion, so the
/// recomputation reproduces the same dependent value - a live refresh never
/// changes custom-mode output.
pub fn refresh_rates(calc: &mut CalculatorState, rates: RateTable) {
    calc.rates = rates;
    calc.fetching_rates = false;
    let edited = calc.conversion.edited_field;
    recompute_other(calc, edited);
}

/// Save the currently displayed conversion into the history list.
///
/// A save requires both amounts and a resolvable rate; otherwise it is a
/// no-op. History is capped, newest first.
pub fn save_conversion(calc: &mut CalculatorState) {
    let Some(rate) = effective_rate(&calc.conversion, &calc.rates) else {
        return;
    };
    let (Some(krw_amount), Some(foreign_amount)) =
        (calc.conversion.base_amount(), calc.conversion.foreign_amount())
    else {
        return;
    };

    calc.history.insert(
        0,
        ConversionRecord {
            currency: calc.conversion.currency,
            krw_amount,
            foreign_amount,
            rate,
            saved_at: chrono::Utc::now(),
        },
    );
    calc.history.truncate(MAX_CONVERSION_HISTORY);
}

/// Recompute the field opposite `edited` from the anchor and the effective
/// rate. Never writes into `edited` itself.
fn recompute_other(calc: &mut CalculatorState, edited: AmountField) {
    let rate = effective_rate(&calc.conversion, &calc.rates);
    let conv = &mut calc.conversion;

    let source_text = match edited {
        AmountField::Base => &conv.krw_text,
        AmountField::Foreign => &conv.foreign_text,
    };

    // An emptied field clears both sides - there is no partial state
    if source_text.trim().is_empty() {
        conv.clear_amounts();
        return;
    }

    let derived = match (parse_decimal(source_text), rate) {
        (Some(amount), Some(rate)) => Some((amount, rate)),
        _ => None,
    };

    match (edited, derived) {
        (AmountField::Base, Some((amount, rate))) => {
            conv.foreign_text = format_foreign(base_to_foreign(amount, rate, conv.currency));
        }
        (AmountField::Foreign, Some((amount, rate))) => {
            conv.krw_text = format_krw(foreign_to_base(amount, rate, conv.currency));
        }
        // Unparsable input or no usable rate: the dependent field goes blank
        (AmountField::Base, None) => conv.foreign_text.clear(),
        (AmountField::Foreign, None) => conv.krw_text.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::QuoteOrigin;
    use shared::dto::exchange::{ExchangeRateResponse, RateInfo};
    use std::collections::HashMap;

    fn live_table(pairs: &[(&str, f64)]) -> RateTable {
        let rates: HashMap<String, RateInfo> = pairs
            .iter()
            .map(|(code, rate)| {
                (
                    code.to_string(),
                    RateInfo {
                        rate_krw_per_unit: *rate,
                        last_updated: None,
                    },
                )
            })
            .collect();
        RateTable::from_response(&ExchangeRateResponse { rates })
    }

    fn calc_with_usd_rate(rate: f64) -> CalculatorState {
        let mut calc = CalculatorState::default();
        calc.rates = live_table(&[("USD", rate)]);
        calc
    }

    #[test]
    fn editing_base_recomputes_foreign_only() {
        let mut calc = calc_with_usd_rate(1350.0);
        on_amount_edited(&mut calc, AmountField::Base, "135000");

        assert_eq!(calc.conversion.krw_text, "135,000");
        assert_eq!(calc.conversion.foreign_text, "100.00");
    }

    #[test]
    fn editing_foreign_recomputes_base_only() {
        let mut calc = calc_with_usd_rate(1350.0);
        on_amount_edited(&mut calc, AmountField::Foreign, "100");

        assert_eq!(calc.conversion.foreign_text, "100");
        assert_eq!(calc.conversion.krw_text, "135,000");
    }

    #[test]
    fn custom_rate_edit_recomputes_without_touching_anchor() {
        // User enters 100 USD at live rate 1350 -> 135,000 KRW; then enables
        // custom rate and edits it to 1400 -> 140,000 KRW, USD untouched.
        let mut calc = calc_with_usd_rate(1350.0);
        on_amount_edited(&mut calc, AmountField::Foreign, "100");
        assert_eq!(calc.conversion.krw_text, "135,000");

        set_custom_rate_enabled(&mut calc, true);
        assert_eq!(calc.conversion.custom_rate_text, "1350");

        on_custom_rate_edited(&mut calc, "1400");
        assert_eq!(calc.conversion.krw_text, "140,000");
        assert_eq!(calc.conversion.foreign_text, "100");
    }

    #[test]
    fn live_refresh_does_not_disturb_custom_mode() {
        let mut calc = calc_with_usd_rate(1350.0);
        on_amount_edited(&mut calc, AmountField::Foreign, "100");
        set_custom_rate_enabled(&mut calc, true);
        on_custom_rate_edited(&mut calc, "1400");
        assert_eq!(calc.conversion.krw_text, "140,000");

        // A fresh live table arrives; custom output must not move
        refresh_rates(&mut calc, live_table(&[("USD", 1500.0)]));
        assert_eq!(calc.conversion.custom_rate_text, "1400");
        assert_eq!(calc.conversion.krw_text, "140,000");
        assert_eq!(calc.conversion.foreign_text, "100");

        // Disabling custom mode hands control back to the live quote
        set_custom_rate_enabled(&mut calc, false);
        assert_eq!(calc.conversion.krw_text, "150,000");
    }

    #[test]
    fn unparsable_custom_rate_clears_dependent_field() {
        let mut calc = calc_with_usd_rate(1350.0);
        on_amount_edited(&mut calc, AmountField::Foreign, "100");
        set_custom_rate_enabled(&mut calc, true);

        on_custom_rate_edited(&mut calc, "not a rate");
        assert_eq!(calc.conversion.krw_text, "");
        assert_eq!(calc.conversion.foreign_text, "100");
    }

    #[test]
    fn swap_anchors_on_the_first_slot_value() {
        // Base-first: 1000 KRW converts to 0.74 USD
        let mut calc = calc_with_usd_rate(1350.0);
        on_amount_edited(&mut calc, AmountField::Base, "1000");
        assert!(calc.conversion.is_base_first);
        assert_eq!(calc.conversion.foreign_text, "0.74");

        // After swap, the first slot still reads 1,000 - now as USD - and
        // KRW is recomputed from it. The old 0.74 is discarded.
        swap_slots(&mut calc);
        assert!(!calc.conversion.is_base_first);
        assert_eq!(calc.conversion.foreign_text, "1,000");
        assert_eq!(calc.conversion.krw_text, "1,350,000");
    }

    #[test]
    fn swapping_back_re_anchors_again() {
        let mut calc = calc_with_usd_rate(1350.0);
        on_amount_edited(&mut calc, AmountField::Base, "1000");
        swap_slots(&mut calc);
        swap_slots(&mut calc);

        // First slot is KRW again, still showing the anchored 1,000
        assert!(calc.conversion.is_base_first);
        assert_eq!(calc.conversion.krw_text, "1,000");
        assert_eq!(calc.conversion.foreign_text, "0.74");
    }

    #[test]
    fn jpy_conversion_uses_per_100_quote() {
        let mut calc = CalculatorState::default();
        calc.rates = live_table(&[("JPY", 950.0)]);
        set_currency(&mut calc, Currency::Jpy);

        on_amount_edited(&mut calc, AmountField::Base, "10000");
        assert_eq!(calc.conversion.foreign_text, "1,052.63");
    }

    #[test]
    fn clearing_either_field_clears_both() {
        let mut calc = calc_with_usd_rate(1350.0);
        on_amount_edited(&mut calc, AmountField::Base, "1000");
        assert!(!calc.conversion.foreign_text.is_empty());

        on_amount_edited(&mut calc, AmountField::Base, "");
        assert_eq!(calc.conversion.krw_text, "");
        assert_eq!(calc.conversion.foreign_text, "");
    }

    #[test]
    fn no_loaded_rate_leaves_dependent_field_empty() {
        let mut calc = CalculatorState::default();
        assert!(calc.rates.is_empty());

        on_amount_edited(&mut calc, AmountField::Base, "1000");
        assert_eq!(calc.conversion.krw_text, "1,000");
        assert_eq!(calc.conversion.foreign_text, "");
    }

    #[test]
    fn switching_currency_exits_custom_mode() {
        let mut calc = calc_with_usd_rate(1350.0);
        set_custom_rate_enabled(&mut calc, true);
        assert!(calc.conversion.is_custom_rate);

        set_currency(&mut calc, Currency::Eur);
        assert!(!calc.conversion.is_custom_rate);
        assert!(calc.conversion.custom_rate_text.is_empty());
    }

    #[test]
    fn save_conversion_records_the_displayed_pair() {
        let mut calc = calc_with_usd_rate(1350.0);
        on_amount_edited(&mut calc, AmountField::Foreign, "100");
        save_conversion(&mut calc);

        assert_eq!(calc.history.len(), 1);
        let record = &calc.history[0];
        assert_eq!(record.currency, Currency::Usd);
        assert_eq!(record.foreign_amount, 100.0);
        assert_eq!(record.krw_amount, 135_000.0);
        assert_eq!(record.rate, 1350.0);

        // Nothing to save from a cleared state
        clear_amounts(&mut calc);
        save_conversion(&mut calc);
        assert_eq!(calc.history.len(), 1);
    }

    #[test]
    fn history_is_capped_newest_first() {
        let mut calc = calc_with_usd_rate(1350.0);
        for i in 0..(MAX_CONVERSION_HISTORY + 5) {
            on_amount_edited(&mut calc, AmountField::Foreign, &format!("{}", i + 1));
            save_conversion(&mut calc);
        }
        assert_eq!(calc.history.len(), MAX_CONVERSION_HISTORY);
        assert_eq!(
            calc.history[0].foreign_amount,
            (MAX_CONVERSION_HISTORY + 5) as f64
        );
    }

    #[test]
    fn fallback_table_keeps_calculator_usable() {
        let mut calc = CalculatorState::default();
        refresh_rates(&mut calc, RateTable::fallback());
        assert_eq!(calc.rates.origin, QuoteOrigin::Fallback);

        on_amount_edited(&mut calc, AmountField::Foreign, "100");
        assert_eq!(calc.conversion.krw_text, "135,000");
    }
}
