//! Currency-aware rounding, formatting and display.
//!
//! These are thin policy layers: they resolve precision, grouping and
//! symbol from a [`CurrencyMetadata`] record and hand the arithmetic to
//! [`moneta_math::round`] and [`format_grouped`].  When no record is
//! available the amount passes through untouched (as a number, or as its
//! plain string form), never with a symbol attached.

use crate::grouping::{format_grouped, plain_string};
use crate::options::{DisplayOptions, FormatOptions, RoundOptions};
use moneta_core::Real;
use moneta_currencies::CurrencyMetadata;
use moneta_math::round;

/// Round `amount` to the precision `currency` prescribes.
///
/// Returns `amount` unchanged when `currency` is `None`.
///
/// ```
/// use moneta_currencies::currencies::BDT;
/// use moneta_format::{round_for_currency, RoundOptions};
///
/// assert_eq!(round_for_currency(1.123, Some(&BDT), &RoundOptions::new()), 2.0);
/// let standard = RoundOptions::new().nearest_rounding(true).standard_decimals(true);
/// assert_eq!(round_for_currency(1.123, Some(&BDT), &standard), 1.12);
/// assert_eq!(round_for_currency(1.123, None, &standard), 1.123);
/// ```
pub fn round_for_currency(
    amount: Real,
    currency: Option<&CurrencyMetadata>,
    options: &RoundOptions,
) -> Real {
    match currency {
        Some(currency) => round(amount, options.decimal_places(currency), options.policy()),
        None => amount,
    }
}

/// Round (unless skipped) and group `amount` the way `currency` prescribes.
///
/// Returns the plain string form of `amount` when `currency` is `None`.
pub fn format_for_currency(
    amount: Real,
    currency: Option<&CurrencyMetadata>,
    options: &FormatOptions,
) -> String {
    let Some(currency) = currency else {
        log::trace!("no currency metadata, formatting {amount} plainly");
        return plain_string(amount);
    };
    let amount = prepare(amount, currency, options);
    format_grouped(
        amount,
        currency.digit_grouping,
        options.fixed_decimal_places(currency),
    )
}

/// Compose `symbol + separator + amount` for `currency`.
///
/// Returns the plain string form of `amount`, without any symbol, when
/// `currency` is `None`.
///
/// ```
/// use moneta_currencies::currencies::BDT;
/// use moneta_format::{display_for_currency, DisplayOptions};
///
/// let standard = DisplayOptions::new().standard_symbol(true);
/// assert_eq!(display_for_currency(1123.0, Some(&BDT), &standard), "৳ 1,123");
/// let tight = DisplayOptions::new().separator("");
/// assert_eq!(display_for_currency(1123.0, Some(&BDT), &tight), "Tk1,123");
/// assert_eq!(display_for_currency(42.0, None, &standard), "42");
/// ```
pub fn display_for_currency(
    amount: Real,
    currency: Option<&CurrencyMetadata>,
    options: &DisplayOptions,
) -> String {
    let Some(currency) = currency else {
        log::trace!("no currency metadata, displaying {amount} without symbol");
        return plain_string(amount);
    };
    let amount = prepare(amount, currency, &options.format);
    let segment = if options.skip_formatting {
        plain_string(amount)
    } else {
        format_grouped(
            amount,
            currency.digit_grouping,
            options.format.fixed_decimal_places(currency),
        )
    };

    let symbol = currency.symbol_for(options.symbol_variant());
    let separator = options.resolved_separator();
    let mut out = String::with_capacity(symbol.len() + separator.len() + segment.len());
    out.push_str(symbol);
    out.push_str(separator);
    out.push_str(&segment);
    out
}

fn prepare(amount: Real, currency: &CurrencyMetadata, options: &FormatOptions) -> Real {
    if options.skip_rounding {
        amount
    } else {
        round_for_currency(amount, Some(currency), &options.round)
    }
}
