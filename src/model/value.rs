//! Value kinds and the raw value wrapper

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Value Type
// =============================================================================

/// The closed set of value kinds a setting's data may hold
///
/// The type only describes what the downstream denormalizer should build
/// from the raw data; the normalizer never coerces data to match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Bool,
    String,
    Int,
    Float,
    Date,
    Array,
    Choice,
}

impl ValueType {
    /// All members of the enumeration, in declaration order
    pub const ALL: [ValueType; 7] = [
        ValueType::Bool,
        ValueType::String,
        ValueType::Int,
        ValueType::Float,
        ValueType::Date,
        ValueType::Array,
        ValueType::Choice,
    ];

    /// Wire name of the type, as written in declarations
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::String => "string",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Date => "date",
            ValueType::Array => "array",
            ValueType::Choice => "choice",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

// =============================================================================
// Setting Value
// =============================================================================

/// The one-field value wrapper every declaration's data normalizes into
///
/// Scalar shorthand (`42`, `"abc"`, `true`) becomes `{ value: <scalar> }`;
/// object input that already carries a `value` field passes through with
/// its extra fields preserved; anything else is wrapped whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingValue {
    pub value: Value,

    /// Sibling fields carried alongside `value` in the object form
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SettingValue {
    /// Wrap a raw value without extra fields
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            extra: Map::new(),
        }
    }

    /// Apply the normalization rule to loose data
    ///
    /// Rules, in order: scalars (string, integer, float) are wrapped as
    /// `{ value: scalar }`; objects containing a `value` field pass
    /// through unchanged; everything else is wrapped as-is.
    #[must_use]
    pub fn wrap(raw: Value) -> Self {
        match raw {
            Value::String(_) | Value::Number(_) => Self {
                value: raw,
                extra: Map::new(),
            },
            Value::Object(mut map) if map.contains_key("value") => {
                let value = map.remove("value").unwrap_or(Value::Null);
                Self { value, extra: map }
            }
            other => Self {
                value: other,
                extra: Map::new(),
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_type_parse() {
        assert_eq!("bool".parse::<ValueType>(), Ok(ValueType::Bool));
        assert_eq!("choice".parse::<ValueType>(), Ok(ValueType::Choice));
        assert!("not-a-real-type".parse::<ValueType>().is_err());
    }

    #[test]
    fn test_value_type_serde_names() {
        for t in ValueType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_wrap_scalars() {
        assert_eq!(SettingValue::wrap(json!("abc")).value, json!("abc"));
        assert_eq!(SettingValue::wrap(json!(42)).value, json!(42));
        assert_eq!(SettingValue::wrap(json!(1.5)).value, json!(1.5));
        assert_eq!(SettingValue::wrap(json!(true)).value, json!(true));
    }

    #[test]
    fn test_wrap_object_with_value_passes_through() {
        let wrapped = SettingValue::wrap(json!({"value": 5, "extra": "x"}));

        assert_eq!(wrapped.value, json!(5));
        assert_eq!(wrapped.extra.get("extra"), Some(&json!("x")));

        // Round-trips back to the input object shape
        assert_eq!(
            serde_json::to_value(&wrapped).unwrap(),
            json!({"value": 5, "extra": "x"})
        );
    }

    #[test]
    fn test_wrap_object_without_value() {
        let wrapped = SettingValue::wrap(json!({"extra": "x"}));

        assert_eq!(wrapped.value, json!({"extra": "x"}));
        assert!(wrapped.extra.is_empty());
    }

    #[test]
    fn test_wrap_array_and_null() {
        assert_eq!(SettingValue::wrap(json!([1, 2])).value, json!([1, 2]));
        assert_eq!(SettingValue::wrap(Value::Null).value, Value::Null);
    }
}
