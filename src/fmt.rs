//! Presentation helpers. Nothing here feeds back into totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Group an integer's digits with commas (1234567 -> "1,234,567")
pub fn grouped_int(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Two decimal places with thousands separators, sign in front
pub fn amount(value: Decimal) -> String {
    let value = value.round_dp(2);
    let rounded = format!("{:.2}", value.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{}.{frac}", grouped_int(whole))
}

/// `amount` with a currency symbol between sign and digits ("-$1,500.00")
pub fn money(value: Decimal, currency_symbol: &str) -> String {
    let formatted = amount(value);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-{currency_symbol}{rest}"),
        None => format!("{currency_symbol}{formatted}"),
    }
}

/// "May 01, 2023"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// "June 05, 2023"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// "October 19, 2026" without a leading zero on the day
pub fn generated_on(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "2023-01" -> "January 2023"; anything else (e.g. "Q1 2023") unchanged
pub fn period_label(period: &str) -> String {
    NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d")
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|_| period.to_string())
}
