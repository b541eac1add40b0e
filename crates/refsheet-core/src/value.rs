//! Value types and literal classification

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Prefix that forces a literal to classify as [`ValueType::String`]
///
/// Without the sentinel, `"true"` or `"42"` would classify as boolean or
/// integer; `"$true"` is a string.
pub const STRING_SENTINEL: char = '$';

/// The declared type of a column, and the classification of a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueType {
    /// `$`-prefixed text
    String,
    /// Signed 64-bit integer literals
    Integer,
    /// Exactly `true` or `false`
    Boolean,
}

impl ValueType {
    /// Classify a raw literal into one of the supported value types
    ///
    /// Classification is ordered: the `$` sentinel wins, then integer, then
    /// boolean. Anything else (including the empty string) is unsupported.
    ///
    /// # Examples
    /// ```
    /// use refsheet_core::ValueType;
    ///
    /// assert_eq!(ValueType::classify("$hello").unwrap(), ValueType::String);
    /// assert_eq!(ValueType::classify("-17").unwrap(), ValueType::Integer);
    /// assert_eq!(ValueType::classify("true").unwrap(), ValueType::Boolean);
    /// assert!(ValueType::classify("hello").is_err());
    /// ```
    pub fn classify(raw: &str) -> Result<ValueType> {
        if raw.starts_with(STRING_SENTINEL) {
            return Ok(ValueType::String);
        }
        if raw.parse::<i64>().is_ok() {
            return Ok(ValueType::Integer);
        }
        if raw.parse::<bool>().is_ok() {
            return Ok(ValueType::Boolean);
        }
        Err(Error::UnsupportedValueType(raw.to_string()))
    }

    /// Check whether a raw literal classifies as this type
    pub fn matches(self, raw: &str) -> bool {
        Self::classify(raw).map(|t| t == self).unwrap_or(false)
    }

    /// Get the lowercase name for error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "string" => Ok(ValueType::String),
            "integer" | "int" => Ok(ValueType::Integer),
            "boolean" | "bool" => Ok(ValueType::Boolean),
            _ => Err(Error::UnknownValueType(s.to_string())),
        }
    }
}
