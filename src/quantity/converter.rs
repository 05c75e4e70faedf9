//! Quantity normalization
//!
//! Turns user-entered (amount, unit) pairs into comparable quantities.
//! Parsing is permissive: malformed amounts become zero and unknown units
//! become counts, so one messy pantry record never blocks a whole check.

use std::fmt;

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::units::{unit_factor, NormalizedQuantity};

/// An amount as entered: either a JSON number or free text like "1.5"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
    /// Any other JSON value (bool, array, object); reads as zero
    Other(serde_json::Value),
}

impl Amount {
    /// Numeric value of the amount, `0.0` when it cannot be read
    pub fn value(&self) -> f64 {
        match self {
            Amount::Number(n) if n.is_nan() => 0.0,
            Amount::Number(n) => *n,
            Amount::Text(s) => parse_amount(s),
            Amount::Other(_) => 0.0,
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::Text(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Text(s) => f.write_str(s),
            Amount::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Parse the leading number of a string, returning `0.0` if there is none
///
/// Examples:
/// - "500" -> 500.0
/// - " 1.5kg" -> 1.5
/// - "2 cups" -> 2.0
/// - ".5" -> 0.5
/// - "Infinity" / "1e999" -> infinity
/// - "abc" -> 0.0
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when it carries digits ("2e" parses as 2)
    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    // Overflow saturates to infinity rather than failing
    s[..end].parse::<f64>().unwrap_or(0.0)
}

/// Normalize an (amount, unit) pair onto its measurement axis
///
/// Examples:
/// - (1, "kg") -> 1000 g, Mass
/// - (2, "tbsp") -> 30 ml, Volume
/// - (3, "pack") -> 3, Count
pub fn normalize(amount: &Amount, unit: &str) -> NormalizedQuantity {
    let (axis, factor) = unit_factor(unit);
    NormalizedQuantity::new(amount.value() * factor, axis)
}

/// Normalize an optional amount, treating a missing one as zero
pub fn normalize_opt(amount: Option<&Amount>, unit: &str) -> NormalizedQuantity {
    match amount {
        Some(amount) => normalize(amount, unit),
        None => NormalizedQuantity::new(0.0, unit_factor(unit).0),
    }
}
