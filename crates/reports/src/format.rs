//! Cell formatting shared by all report builders.

use chrono::{DateTime, Utc};

/// Format an amount the way reports print money: thousands-separated,
/// truncated to whole francs, suffixed with the currency.
pub fn amount(value: f64) -> String {
    let whole = value.trunc() as i64;
    let negative = whole < 0;
    let digits = whole.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if negative {
        out.push('-');
    }
    let first_group = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first_group) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(" Rwf");
    out
}

/// Long-form date, e.g. "January 3, 2020".
pub fn date(value: DateTime<Utc>) -> String {
    value.format("%B %-d, %Y").to_string()
}

/// How occupancy prints.
pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn amounts_are_thousands_separated() {
        assert_eq!(amount(0.0), "0 Rwf");
        assert_eq!(amount(950.0), "950 Rwf");
        assert_eq!(amount(5_000.0), "5,000 Rwf");
        assert_eq!(amount(1_234_567.0), "1,234,567 Rwf");
    }

    #[test]
    fn fractions_are_truncated() {
        assert_eq!(amount(1_500.75), "1,500 Rwf");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(amount(-12_000.0), "-12,000 Rwf");
    }

    #[test]
    fn dates_print_long_form() {
        let d = Utc.with_ymd_and_hms(2020, 1, 3, 9, 30, 0).unwrap();
        assert_eq!(date(d), "January 3, 2020");
    }
}
