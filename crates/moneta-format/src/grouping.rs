//! Digit grouping and fraction normalisation.
//!
//! Amounts are rendered from their shortest round-trip decimal form, so
//! `0.1 + 0.2` keeps its full `0.30000000000000004` expansion unless a
//! fixed number of decimal places truncates it.

use moneta_core::{DecimalPlaces, DigitGrouping, Real};
use std::borrow::Cow;

/// Separator inserted between digit groups.
pub const GROUP_SEPARATOR: char = ',';

/// Plain decimal rendering of `amount`: no grouping, no padding.
///
/// Negative zero renders as `"0"`; NaN and infinities use Rust's `Display`
/// forms.
///
/// ```
/// use moneta_format::grouping::plain_string;
///
/// assert_eq!(plain_string(42.0), "42");
/// assert_eq!(plain_string(1234.5), "1234.5");
/// assert_eq!(plain_string(-0.0), "0");
/// ```
pub fn plain_string(amount: Real) -> String {
    if amount == 0.0 {
        return "0".to_string();
    }
    amount.to_string()
}

/// Insert group separators into a string of integer digits.
///
/// The right-most group always holds three digits; the digits before it are
/// grouped by [`DigitGrouping::group_size`].  A leading `-` stays in front
/// of the first group, and three or fewer digits are returned unchanged.
/// Input that is not an optionally signed run of ASCII digits is returned
/// unchanged as well.
///
/// ```
/// use moneta_core::DigitGrouping;
/// use moneta_format::grouping::group_digits;
///
/// assert_eq!(group_digits("1234567", DigitGrouping::Three), "1,234,567");
/// assert_eq!(group_digits("1234567", DigitGrouping::Two), "12,34,567");
/// assert_eq!(group_digits("-123456", DigitGrouping::Two), "-1,23,456");
/// ```
pub fn group_digits(integer: &str, grouping: DigitGrouping) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    if digits.len() <= 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }

    let (head, last) = digits.split_at(digits.len() - 3);
    let size = grouping.group_size();
    let mut out = String::with_capacity(integer.len() + head.len() / size + 1);
    out.push_str(sign);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % size == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out.push(GROUP_SEPARATOR);
    out.push_str(last);
    out
}

/// Render `amount` with digit grouping and, optionally, a fixed number of
/// decimal places.
///
/// With `Some(k)` and `k > 0` the fraction is truncated (never re-rounded)
/// or right-padded with zeros to exactly `k` digits.  `None` and `Some(0)`
/// leave the fraction exactly as the decimal conversion produced it.
/// Non-finite amounts come back in their plain form.
///
/// ```
/// use moneta_core::DigitGrouping;
/// use moneta_format::format_grouped;
///
/// assert_eq!(format_grouped(123456.0, DigitGrouping::Three, Some(0)), "123,456");
/// assert_eq!(format_grouped(123456.0, DigitGrouping::Two, Some(0)), "1,23,456");
/// assert_eq!(format_grouped(12345.1, DigitGrouping::Two, Some(2)), "12,345.10");
/// ```
pub fn format_grouped(
    amount: Real,
    grouping: DigitGrouping,
    fixed_decimal_places: Option<DecimalPlaces>,
) -> String {
    let text = plain_string(amount);
    if !amount.is_finite() {
        return text;
    }

    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let fraction = match fixed_decimal_places {
        Some(places) if places > 0 => Some(fit_fraction(fraction.unwrap_or(""), places)),
        _ => fraction.map(Cow::Borrowed),
    };

    let mut out = group_digits(integer, grouping);
    if let Some(fraction) = fraction.filter(|f| !f.is_empty()) {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

fn fit_fraction(fraction: &str, places: DecimalPlaces) -> Cow<'_, str> {
    let places = places as usize;
    if fraction.len() >= places {
        // ASCII digits only, so byte and char positions coincide.
        Cow::Borrowed(&fraction[..places])
    } else {
        Cow::Owned(format!("{fraction:0<places$}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn two_digit_grouping() {
        let two = DigitGrouping::Two;
        assert_eq!(format_grouped(1234.0, two, Some(0)), "1,234");
        assert_eq!(format_grouped(12345.0, two, Some(0)), "12,345");
        assert_eq!(format_grouped(123456.0, two, Some(0)), "1,23,456");
        assert_eq!(format_grouped(1234567.0, two, Some(0)), "12,34,567");
        assert_eq!(format_grouped(123456789.0, two, Some(0)), "12,34,56,789");
        assert_eq!(format_grouped(12345678912.0, two, Some(0)), "12,34,56,78,912");
    }

    #[test]
    fn two_digit_grouping_with_fixed_decimals() {
        let two = DigitGrouping::Two;
        assert_eq!(format_grouped(1234.0, two, Some(2)), "1,234.00");
        assert_eq!(format_grouped(12345.1, two, Some(2)), "12,345.10");
        assert_eq!(format_grouped(123456.12, two, Some(2)), "1,23,456.12");
        assert_eq!(format_grouped(123456.1234, two, Some(2)), "1,23,456.12");
        assert_eq!(format_grouped(123456.1299, two, Some(2)), "1,23,456.12");
        assert_eq!(format_grouped(123456.1299123, two, Some(3)), "1,23,456.129");
        assert_eq!(format_grouped(123456.1, two, Some(5)), "1,23,456.10000");
    }

    #[test]
    fn three_digit_grouping() {
        let three = DigitGrouping::Three;
        assert_eq!(format_grouped(1234.0, three, Some(0)), "1,234");
        assert_eq!(format_grouped(12345.0, three, Some(0)), "12,345");
        assert_eq!(format_grouped(123456.0, three, Some(0)), "123,456");
        assert_eq!(format_grouped(1234567.0, three, Some(0)), "1,234,567");
        assert_eq!(format_grouped(123456789.0, three, Some(0)), "123,456,789");
        assert_eq!(format_grouped(12345678912.0, three, Some(0)), "12,345,678,912");
        assert_eq!(format_grouped(1234.0, three, Some(2)), "1,234.00");
        assert_eq!(format_grouped(12345.1, three, Some(2)), "12,345.10");
        assert_eq!(format_grouped(123456.12, three, Some(2)), "123,456.12");
    }

    #[test]
    fn short_integers_are_not_grouped() {
        assert_eq!(format_grouped(123.0, DigitGrouping::Two, None), "123");
        assert_eq!(format_grouped(7.5, DigitGrouping::Three, None), "7.5");
        assert_eq!(format_grouped(0.0, DigitGrouping::Three, Some(2)), "0.00");
    }

    #[test]
    fn fraction_left_alone_without_fixed_places() {
        assert_eq!(format_grouped(1234.5678, DigitGrouping::Three, None), "1,234.5678");
        assert_eq!(format_grouped(1234.5678, DigitGrouping::Three, Some(0)), "1,234.5678");
        assert_eq!(format_grouped(1234.0, DigitGrouping::Three, None), "1,234");
    }

    #[test]
    fn negative_amounts_keep_sign_outside_groups() {
        assert_eq!(format_grouped(-1234567.5, DigitGrouping::Three, Some(2)), "-1,234,567.50");
        assert_eq!(format_grouped(-123.0, DigitGrouping::Two, None), "-123");
        assert_eq!(format_grouped(-123456.0, DigitGrouping::Two, None), "-1,23,456");
    }

    #[test]
    fn non_digit_input_is_left_alone() {
        assert_eq!(group_digits("1৳2", DigitGrouping::Two), "1৳2");
        assert_eq!(group_digits("12a4567", DigitGrouping::Three), "12a4567");
        assert_eq!(group_digits("-", DigitGrouping::Three), "-");
        assert_eq!(group_digits("", DigitGrouping::Two), "");
    }

    #[test]
    fn non_finite_amounts_pass_through() {
        assert_eq!(format_grouped(f64::NAN, DigitGrouping::Three, Some(2)), "NaN");
        assert_eq!(format_grouped(f64::INFINITY, DigitGrouping::Two, None), "inf");
    }

    #[test]
    fn large_amounts_never_use_exponent_notation() {
        assert_eq!(
            format_grouped(1e21, DigitGrouping::Three, None),
            "1,000,000,000,000,000,000,000"
        );
    }

    fn digits_only(s: &str) -> String {
        s.chars().filter(|c| *c != GROUP_SEPARATOR).collect()
    }

    proptest! {
        #[test]
        fn three_grouping_shape(n in 0u64..10_000_000_000_000) {
            let grouped = format_grouped(n as f64, DigitGrouping::Three, None);
            prop_assert_eq!(digits_only(&grouped), n.to_string());
            let groups: Vec<&str> = grouped.split(GROUP_SEPARATOR).collect();
            prop_assert!((1..=3).contains(&groups[0].len()));
            for g in &groups[1..] {
                prop_assert_eq!(g.len(), 3);
            }
        }

        #[test]
        fn two_grouping_shape(n in 0u64..10_000_000_000_000) {
            let grouped = format_grouped(n as f64, DigitGrouping::Two, None);
            prop_assert_eq!(digits_only(&grouped), n.to_string());
            let groups: Vec<&str> = grouped.split(GROUP_SEPARATOR).collect();
            let last = groups.len() - 1;
            if last > 0 {
                prop_assert_eq!(groups[last].len(), 3);
                prop_assert!((1..=2).contains(&groups[0].len()));
                for g in &groups[1..last] {
                    prop_assert_eq!(g.len(), 2);
                }
            } else {
                prop_assert!(groups[0].len() <= 3);
            }
        }

        #[test]
        fn fixed_decimals_are_idempotent(
            amount in 0.0f64..1.0e9,
            places in 1u32..6,
            two in any::<bool>(),
        ) {
            let grouping = if two { DigitGrouping::Two } else { DigitGrouping::Three };
            let once = format_grouped(amount, grouping, Some(places));
            let reparsed: f64 = digits_only(&once).parse().unwrap();
            let twice = format_grouped(reparsed, grouping, Some(places));
            prop_assert_eq!(once, twice);
        }
    }
}
