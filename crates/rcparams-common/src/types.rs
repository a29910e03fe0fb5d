//! The tagged value type stored for every runtime parameter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A runtime parameter value.
///
/// Parameters hold an integer, a float, an enumerated string, or nothing.
/// Which variant a key accepts is decided by its rule, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RcValue {
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value, lowercased for enumerations.
    Str(String),
    /// Explicit null.
    None,
}

impl RcValue {
    /// Interpret a raw template literal.
    ///
    /// `none` and `null` (any case) become [`RcValue::None`]; everything else
    /// stays a string and is coerced later by the parameter's rule.
    pub fn from_literal(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("none") || trimmed.eq_ignore_ascii_case("null") {
            Self::None
        } else {
            Self::Str(trimmed.to_string())
        }
    }

    /// Returns the integer, if this is an `Int`.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float, widening integers.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// True for the null value.
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Short name of the variant, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::None => "None",
        }
    }
}

impl fmt::Display for RcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
            Self::None => f.write_str("None"),
        }
    }
}

impl From<i64> for RcValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for RcValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for RcValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for RcValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for RcValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for RcValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::None, Into::into)
    }
}
