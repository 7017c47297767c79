//! Display formatting for result table cells.

use serde_json::{Number, Value};

/// Prefix for numeric cells above `CURRENCY_THRESHOLD`.
pub const CURRENCY_PREFIX: &str = "₹";

/// Numbers strictly greater than this are rendered as currency.
pub const CURRENCY_THRESHOLD: f64 = 1000.0;

const MAX_FRACTION_DIGITS: usize = 3;

/// Format a table cell for display.
///
/// Numbers above the threshold get the currency prefix and thousands
/// separators; everything else is shown as-is. `null` renders empty.
#[must_use]
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(amount) if amount > CURRENCY_THRESHOLD => format_currency(number, amount),
            _ => plain_number(number),
        },
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn format_currency(number: &Number, amount: f64) -> String {
    let digits = match number.as_u64() {
        Some(whole) => group_thousands(&whole.to_string()),
        None => grouped_decimal(amount),
    };
    format!("{CURRENCY_PREFIX}{digits}")
}

fn grouped_decimal(amount: f64) -> String {
    let fixed = format!("{amount:.MAX_FRACTION_DIGITS$}");
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        group_thousands(whole)
    } else {
        format!("{}.{fraction}", group_thousands(whole))
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

// Integral floats print without a trailing ".0".
fn plain_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", value as i64)
        }
        Some(value) => format!("{value}"),
        None => number.to_string(),
    }
}
