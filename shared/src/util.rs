//! Time and money helpers

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Whole minutes between two timestamps.
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_minutes()
}

/// Elapsed time as fractional hours (minute precision), for
/// hourly-rate billing: 30 minutes -> 0.5.
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Decimal {
    Decimal::from(minutes_between(start, end)) / Decimal::from(60)
}

/// Round a monetary value to 2 decimal places, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to the nearest multiple of 5 currency units, half away from
/// zero. Used for the other-income adjustment figure.
pub fn round_to_nearest_5(value: Decimal) -> Decimal {
    let five = Decimal::from(5);
    (value / five).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * five
}

/// Format a monetary value with thousands separators and 2 decimals,
/// e.g. `1234.5` -> `"1,234.50"`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_money(value);
    let raw = format!("{:.2}", rounded);
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn hours_between_handles_fractions() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap();
        assert_eq!(hours_between(start, end), Decimal::new(5, 1)); // 0.5
    }

    #[test]
    fn round_to_nearest_5_rounds_half_up() {
        assert_eq!(round_to_nearest_5(Decimal::new(12, 0)), Decimal::new(10, 0));
        assert_eq!(round_to_nearest_5(Decimal::new(125, 1)), Decimal::new(15, 0));
        assert_eq!(round_to_nearest_5(Decimal::new(13, 0)), Decimal::new(15, 0));
        assert_eq!(round_to_nearest_5(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(Decimal::new(12345, 1)), "1,234.50");
        assert_eq!(format_amount(Decimal::new(200, 0)), "200.00");
        assert_eq!(format_amount(Decimal::new(-12345678, 3)), "-12,345.68");
    }
}
