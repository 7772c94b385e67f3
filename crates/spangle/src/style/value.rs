//! Declaration values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value of a single CSS declaration.
///
/// Numbers are kept distinct from strings so the normalizer can decide
/// whether to append a pixel unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Str(String),
}

impl StyleValue {
    /// Returns true if this value is numeric.
    pub fn is_number(&self) -> bool {
        matches!(self, StyleValue::Number(_))
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral numbers print without a fractional part, so `4.0` is `4`.
            StyleValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            StyleValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            StyleValue::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<usize> for StyleValue {
    fn from(n: usize) -> Self {
        StyleValue::Number(n as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_number_display() {
        assert_eq!(StyleValue::from(4).to_string(), "4");
        assert_eq!(StyleValue::from(700.0).to_string(), "700");
    }

    #[test]
    fn test_fractional_number_display() {
        assert_eq!(StyleValue::from(0.5).to_string(), "0.5");
        assert_eq!(StyleValue::from(-1.25).to_string(), "-1.25");
    }

    #[test]
    fn test_non_finite_number_display() {
        assert_eq!(StyleValue::from(f64::NAN).to_string(), "NaN");
        assert_eq!(StyleValue::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(StyleValue::from(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_string_display_passes_through() {
        assert_eq!(StyleValue::from("12px").to_string(), "12px");
        assert!(!StyleValue::from("12px").is_number());
    }

    #[test]
    fn test_deserialize_untagged() {
        let n: StyleValue = serde_json::from_str("3").unwrap();
        let s: StyleValue = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(n, StyleValue::Number(3.0));
        assert_eq!(s, StyleValue::Str("red".into()));
    }
}
