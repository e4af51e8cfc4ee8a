use rust_decimal::{Decimal, RoundingStrategy};

/// Canonical string for an amount in JSON output: cents precision, no padding.
pub fn format_amount(value: Decimal) -> String {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

fn group_thousands(int_part: &str) -> String {
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Human-readable amount such as `-1,234.50 AED`.
///
/// Always shows exactly `decimals` places; the sign precedes the digits and
/// the currency code, when non-empty, follows them.
pub fn format_currency_display(
    value: Decimal,
    decimals: u32,
    grouping: bool,
    currency: &str,
) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let mut digits = rounded.abs();
    digits.rescale(decimals);
    let digits = digits.to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (digits, None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if grouping {
        out.push_str(&group_thousands(&int_part));
    } else {
        out.push_str(&int_part);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac);
    }
    if !currency.is_empty() {
        out.push(' ');
        out.push_str(currency);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn format_amount_strips_trailing_zeros() {
        assert_eq!(format_amount(dec("5000.00")), "5000");
        assert_eq!(format_amount(dec("-12.50")), "-12.5");
        assert_eq!(format_amount(dec("0.005")), "0.01");
    }

    #[test]
    fn display_pads_groups_and_suffixes_currency() {
        assert_eq!(
            format_currency_display(dec("1234567.5"), 2, true, "AED"),
            "1,234,567.50 AED"
        );
        assert_eq!(format_currency_display(dec("999"), 2, true, ""), "999.00");
        assert_eq!(format_currency_display(dec("100000"), 0, true, "AED"), "100,000 AED");
    }

    #[test]
    fn display_keeps_sign_before_digits() {
        assert_eq!(
            format_currency_display(dec("-4850"), 2, false, "AED"),
            "-4850.00 AED"
        );
        assert_eq!(format_currency_display(dec("-0.001"), 2, true, ""), "0.00");
    }
}
