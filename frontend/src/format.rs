use rust_decimal::{Decimal, RoundingStrategy};

const MAX_FRACTION_DIGITS: u32 = 3;

/// Groups an unsigned digit string Indian style: the last three digits, then pairs.
fn group_en_in(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let head = head.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in head.iter().enumerate() {
        if i > 0 && i % 2 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let grouped: String = out.into_iter().rev().collect();
    format!("{},{}", grouped, tail)
}

/// Formats `value` with `en-IN` digit grouping, at least `min_fraction_digits`
/// and at most three fraction digits.
pub fn format_en_in(value: Decimal, min_fraction_digits: u32) -> String {
    let min_fraction_digits = min_fraction_digits.min(MAX_FRACTION_DIGITS) as usize;
    let rounded =
        value.round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);

    let raw = rounded.abs().to_string();
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (raw.as_str(), ""),
    };

    let mut fraction = frac_part.trim_end_matches('0').to_string();
    while fraction.len() < min_fraction_digits {
        fraction.push('0');
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    if fraction.is_empty() {
        format!("{}{}", sign, group_en_in(int_part))
    } else {
        format!("{}{}.{}", sign, group_en_in(int_part), fraction)
    }
}

/// Symbol glued to the formatted magnitude, e.g. `€1,250`.
pub fn format_currency(amount: Decimal, symbol: &str, min_fraction_digits: u32) -> String {
    format!("{}{}", symbol, format_en_in(amount, min_fraction_digits))
}

/// Plain `"<symbol> <amount>"` used for balances, without grouping.
pub fn format_balance(amount: Decimal, symbol: &str) -> String {
    format!("{} {}", symbol, amount.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn groups_indian_style() {
        assert_eq!(format_en_in(dec("0"), 0), "0");
        assert_eq!(format_en_in(dec("999"), 0), "999");
        assert_eq!(format_en_in(dec("1000"), 0), "1,000");
        assert_eq!(format_en_in(dec("123456"), 0), "1,23,456");
        assert_eq!(format_en_in(dec("12345678"), 0), "1,23,45,678");
    }

    #[test]
    fn honours_fraction_digit_bounds() {
        assert_eq!(format_en_in(dec("1234.5"), 0), "1,234.5");
        assert_eq!(format_en_in(dec("1234.5"), 2), "1,234.50");
        assert_eq!(format_en_in(dec("200"), 2), "200.00");
        assert_eq!(format_en_in(dec("0.12345"), 0), "0.123");
        assert_eq!(format_en_in(dec("0.0005"), 0), "0.001");
        assert_eq!(format_en_in(dec("10.100"), 0), "10.1");
    }

    #[test]
    fn keeps_sign_for_negative_values() {
        assert_eq!(format_en_in(dec("-150000"), 0), "-1,50,000");
        assert_eq!(format_en_in(dec("-0.0001"), 0), "0");
    }

    #[test]
    fn currency_and_balance_layouts() {
        assert_eq!(format_currency(dec("2500"), "€", 0), "€2,500");
        assert_eq!(format_currency(dec("2500"), "€", 2), "€2,500.00");
        assert_eq!(format_balance(dec("800.00"), "€"), "€ 800");
        assert_eq!(format_balance(dec("-12.50"), "€"), "€ -12.5");
    }
}
