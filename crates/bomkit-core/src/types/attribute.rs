//! Dynamically typed instance attribute values.
//!
//! Stored values are JSON scalars. Decoding produces a closed variant set;
//! the rule language only ever sees a value through [`AttributeValue::to_text`]
//! or [`AttributeValue::as_f64`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Attributes of one instance, keyed by attribute name.
pub type AttributeMap = HashMap<String, AttributeValue>;

/// A decoded attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Null,
}

impl AttributeValue {
    /// Decode a stored value column. SQL NULL decodes to [`AttributeValue::Null`].
    pub fn decode(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        match raw {
            None => Ok(Self::Null),
            Some(text) => serde_json::from_str::<serde_json::Value>(text).map(Self::from_json),
        }
    }

    /// Decode a stored value, keeping the raw text when it is not valid JSON.
    /// The parse error is handed back so the caller can report it.
    pub fn decode_lossy(raw: Option<&str>) -> (Self, Option<serde_json::Error>) {
        match Self::decode(raw) {
            Ok(value) => (value, None),
            Err(e) => (Self::Text(raw.unwrap_or_default().to_string()), Some(e)),
        }
    }

    /// Map a JSON value onto the closed variant set. Arrays and objects are
    /// not scalars; they are kept as their compact JSON text, as are
    /// integers beyond f64 precision.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            // Integers an f64 cannot hold exactly keep their decimal text.
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() || f.to_string() == n.to_string() => Self::Number(f),
                _ => Self::Text(n.to_string()),
            },
            serde_json::Value::String(s) => Self::Text(s),
            other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Self::Text(other.to_string())
            }
        }
    }

    /// Text form used by every text comparison. Null stringifies to "".
    /// Integral numbers print without a fractional part (`5`, not `5.0`).
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Null => String::new(),
        }
    }

    /// Numeric view of the value. Text is parsed after trimming;
    /// booleans and null have no numeric form.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Boolean(_) | Self::Null => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}
