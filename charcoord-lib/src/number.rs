use serde::Deserialize;
use serde_json::Number;
use std::fmt;

/// A single metric value, printed the way atlas tables expect it
///
/// Integer literals are printed digit for digit, however large. Anything
/// with a fraction or exponent is read as an `f64` and printed in shortest
/// round-trip form, switching to exponent notation (`1e-05`, `1e+16`)
/// outside the range `1e-4 <= |v| < 1e16`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct MetricValue(pub Number);

impl MetricValue {
    /// Whether the source text has no fraction or exponent
    pub fn is_integer_literal(&self) -> bool {
        !self.0.to_string().contains(['.', 'e', 'E'])
    }
}

impl From<Number> for MetricValue {
    fn from(number: Number) -> Self {
        MetricValue(number)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.0.to_string();
        if self.is_integer_literal() {
            if text.trim_start_matches('-').bytes().all(|b| b == b'0') {
                return f.write_str("0");
            }
            return f.write_str(&text);
        }
        match text.parse::<f64>() {
            Ok(value) => write_float(f, value),
            Err(_) => f.write_str(&text),
        }
    }
}

fn write_float(f: &mut fmt::Formatter, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_sign_negative() {
        f.write_str("-")?;
    }
    let value = value.abs();
    if value.is_infinite() {
        return f.write_str("inf");
    }
    if value == 0.0 {
        return f.write_str("0.0");
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let n_digits = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let point = exponent + 1;

    if point <= -4 || point > 16 {
        let (first, rest) = digits.split_at(1);
        f.write_str(first)?;
        if !rest.is_empty() {
            write!(f, ".{}", rest)?;
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "e{}{:02}", sign, exponent.abs())
    } else if point <= 0 {
        write!(f, "0.{}{}", "0".repeat((-point) as usize), digits)
    } else if point < n_digits {
        let (whole, fraction) = digits.split_at(point as usize);
        write!(f, "{}.{}", whole, fraction)
    } else {
        write!(f, "{}{}.0", digits, "0".repeat((point - n_digits) as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(literal: &str) -> String {
        let number: Number = serde_json::from_str(literal).unwrap();
        MetricValue(number).to_string()
    }

    #[test]
    fn test_integers_verbatim() {
        assert_eq!(show("7"), "7");
        assert_eq!(show("-1"), "-1");
        assert_eq!(show("-0"), "0");
        assert_eq!(show("18446744073709551616"), "18446744073709551616");
        assert_eq!(
            show("123456789012345678901234"),
            "123456789012345678901234"
        );
        assert_eq!(
            show("-123456789012345678901234"),
            "-123456789012345678901234"
        );
    }

    #[test]
    fn test_fixed_point_floats() {
        assert_eq!(show("0.5"), "0.5");
        assert_eq!(show("2.0"), "2.0");
        assert_eq!(show("-2.50"), "-2.5");
        assert_eq!(show("1e3"), "1000.0");
        assert_eq!(show("0.0001"), "0.0001");
        assert_eq!(show("123.456"), "123.456");
        assert_eq!(show("1e15"), "1000000000000000.0");
        assert_eq!(show("-0.0"), "-0.0");
    }

    #[test]
    fn test_exponent_floats() {
        assert_eq!(show("1e16"), "1e+16");
        assert_eq!(show("1e-5"), "1e-05");
        assert_eq!(show("0.00001"), "1e-05");
        assert_eq!(show("1.5e-7"), "1.5e-07");
        assert_eq!(show("1.2345678901234567e23"), "1.2345678901234567e+23");
        assert_eq!(show("-2.5E100"), "-2.5e+100");
    }

    #[test]
    fn test_integer_literal_detection() {
        let int: Number = serde_json::from_str("42").unwrap();
        let float: Number = serde_json::from_str("42.0").unwrap();
        assert!(MetricValue(int).is_integer_literal());
        assert!(!MetricValue(float).is_integer_literal());
    }
}
