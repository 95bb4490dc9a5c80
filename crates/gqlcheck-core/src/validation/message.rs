//! Message templates for field errors
//!
//! Messages follow the wording of the yup validation library, so payloads
//! validated here report the same strings a JavaScript client would see.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Render a value the way type errors quote it
pub fn print_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => print_number(n),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

fn print_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64().filter(|i| i.unsigned_abs() <= MAX_SAFE_INTEGER) {
        return i.to_string();
    }
    if let Some(u) = n.as_u64().filter(|u| *u <= MAX_SAFE_INTEGER) {
        return u.to_string();
    }
    n.as_f64().map(print_float).unwrap_or_else(|| n.to_string())
}

/// Largest integer a JavaScript number holds exactly
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Format a float the way JavaScript's `Number.prototype.toString` does
///
/// Plain notation for magnitudes from `1e-6` up to below `1e21`, exponent
/// notation (`1e+21`, `1.5e-7`) outside that range.
pub fn print_float(f: f64) -> String {
    if !f.is_finite() {
        return if f.is_nan() {
            "NaN".to_string()
        } else if f > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Shortest round-trip digits, e.g. "-1.5e-7"
    let scientific = format!("{:e}", f.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;
    let sign = if f < 0.0 { "-" } else { "" };

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exponent_sign = if n - 1 < 0 { '-' } else { '+' };
        let mantissa = if k == 1 {
            digits
        } else {
            format!("{}.{}", &digits[..1], &digits[1..])
        };
        format!("{}e{}{}", mantissa, exponent_sign, (n - 1).abs())
    };

    format!("{}{}", sign, body)
}

/// Label used in type errors for a JSON value
pub fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn required(path: &str) -> String {
    format!("{} is a required field", path)
}

/// Appended to type errors caused by `null`
pub const NULLABLE_HINT: &str =
    "\n If \"null\" is intended as an empty value be sure to mark the schema as `.nullable()`";

pub fn type_error(path: &str, expected: &str, value: &Value) -> String {
    let mut message = format!(
        "{} must be a `{}` type, but the final value was: `{}`.",
        path,
        expected,
        print_value(value)
    );
    if value.is_null() {
        message.push_str(NULLABLE_HINT);
    }
    message
}

pub fn integer(path: &str) -> String {
    format!("{} must be an integer", path)
}

pub fn email(path: &str) -> String {
    format!("{} must be a valid email", path)
}

pub fn length(path: &str, length: usize) -> String {
    format!("{} must be exactly {} characters", path, length)
}

pub fn matches(path: &str, pattern: &str) -> String {
    format!("{} must match the following: \"{}\"", path, pattern)
}

/// Interpolate `${path}` in a custom test message
pub fn interpolate(template: &str, path: &str) -> String {
    template.replace("${path}", path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_print_value() {
        assert_eq!(print_value(&json!(16)), "16");
        assert_eq!(print_value(&json!(16.87)), "16.87");
        assert_eq!(print_value(&json!(2.0)), "2");
        assert_eq!(print_value(&json!(true)), "true");
        assert_eq!(print_value(&json!(null)), "null");
        assert_eq!(print_value(&json!("Yes")), "\"Yes\"");
        assert_eq!(print_value(&json!([1])), "[\n  1\n]");
    }

    #[test]
    fn test_type_error_template() {
        assert_eq!(
            type_error("knowsJS", "boolean", &json!("Yes")),
            "knowsJS must be a `boolean` type, but the final value was: `\"Yes\"`."
        );
        assert_eq!(
            type_error("numbers[0]", "number", &json!("hello")),
            "numbers[0] must be a `number` type, but the final value was: `\"hello\"`."
        );
    }

    #[test]
    fn test_null_type_error_carries_hint() {
        assert_eq!(
            type_error("age", "number", &json!(null)),
            "age must be a `number` type, but the final value was: `null`.\n \
             If \"null\" is intended as an empty value be sure to mark the schema as `.nullable()`"
        );
    }

    #[test]
    fn test_print_float_matches_javascript() {
        assert_eq!(print_float(1e21), "1e+21");
        assert_eq!(print_float(1e20), "100000000000000000000");
        assert_eq!(print_float(1e-7), "1e-7");
        assert_eq!(print_float(-1.5e-7), "-1.5e-7");
        assert_eq!(print_float(0.000001), "0.000001");
        assert_eq!(print_float(1.2345e25), "1.2345e+25");
        assert_eq!(print_float(123.456), "123.456");
        assert_eq!(print_float(-0.0), "-0");
        assert_eq!(print_value(&json!(1e21)), "1e+21");
        assert_eq!(print_value(&json!(18446744073709551615u64)), "18446744073709552000");
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(
            interpolate("${path} must be a valid Ethereum address", "address"),
            "address must be a valid Ethereum address"
        );
    }
}
