//! Cell values.
//!
//! Records are schema-less, so every field is one of a small closed set of
//! value kinds. Anything richer (booleans, nested structures) is folded into
//! these kinds at the input boundary.

use std::fmt;

/// A single field value read off a record.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Textual value.
    String(String),
    /// Numeric value (integers are stored losslessly up to 2^53).
    Number(f64),
    /// Missing or explicitly null value.
    #[default]
    Null,
}

impl Value {
    /// True for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value, if it is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String view of the value, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Case-folded string form used by search, filters and string ordering.
    ///
    /// Returns `None` for null: nulls never match a needle and are ordered
    /// separately by the comparator.
    pub fn folded(&self) -> Option<String> {
        match self {
            Value::Null => None,
            other => Some(other.to_string().to_lowercase()),
        }
    }

    /// Case-insensitive substring test against an already-folded needle.
    pub fn contains_folded(&self, needle: &str) -> bool {
        self.folded().is_some_and(|hay| hay.contains(needle))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => write_number(*n, f),
            Value::Null => Ok(()),
        }
    }
}

const EXPONENT_ABOVE: f64 = 1e21;
const EXPONENT_BELOW: f64 = 1e-6;

/// Numbers print in their shortest round-trip form ("10", "2.5").
///
/// Magnitudes from 1e21 up and below 1e-6 switch to exponent form with a
/// signed exponent ("1e+21", "1.5e-7").
fn write_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 prints as 0
        f.write_str("0")
    } else if n.abs() >= EXPONENT_ABOVE || n.abs() < EXPONENT_BELOW {
        let scientific = format!("{n:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&scientific),
        }
    } else {
        write!(f, "{n}")
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    /// Fold a JSON value into a cell value.
    ///
    /// Booleans keep their textual form so they stay searchable; arrays and
    /// objects carry no renderable scalar and become null.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::Bool(b) => Value::String(b.to_string()),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => Value::Null,
        }
    }
}
