//! String form of cell values
//!
//! Grid data arrives from JavaScript with mixed typing: an option declared as
//! `{value: 1}` must match a cell holding `"1"`. Every comparison goes through
//! [`display_string`], which reproduces the host's `String(x)` conversion.

use serde_json::Value;

/// Largest decimal point position the host still prints without an exponent
const MAX_PLAIN_POINT: i32 = 21;

/// Decimal point positions at or below this get an exponent
const MIN_PLAIN_POINT: i32 = -6;

/// Convert a JSON value to the string the host would produce with `String(x)`
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(number_string).unwrap_or_else(|| n.to_string())
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // Array.prototype.join renders null as empty
                Value::Null => String::new(),
                other => display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Format a finite float the way the host's `Number.prototype.toString` does
fn number_string(n: f64) -> String {
    // Covers -0 as well
    if n == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.5e300" or "2.5e-8"
    let sci = format!("{:e}", n.abs());
    let (mantissa, exp) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return n.to_string(),
    };
    let exp: i32 = match exp.parse() {
        Ok(e) => e,
        Err(_) => return n.to_string(),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`
    let point = exp + 1;

    let body = if k <= point && point <= MAX_PLAIN_POINT {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= MAX_PLAIN_POINT {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if MIN_PLAIN_POINT < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let sign = if exp < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exp.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exp.abs())
        }
    };

    if n < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}
