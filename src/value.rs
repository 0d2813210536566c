//! Variant value names.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value name within a variant group.
///
/// Values are normalized to their string form on construction, so a boolean
/// group can be selected with either `true` or `"true"`:
///
/// ```rust
/// use variant_recipes::VariantValue;
///
/// assert_eq!(VariantValue::from(true), VariantValue::from("true"));
/// assert_eq!(VariantValue::from(2), VariantValue::from("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantValue(String);

impl VariantValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the boolean this value spells, if it is `"true"` or `"false"`.
    pub fn as_bool(&self) -> Option<bool> {
        match self.0.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl std::fmt::Display for VariantValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for VariantValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for VariantValue {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<bool> for VariantValue {
    fn from(value: bool) -> Self {
        Self(value.to_string())
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for VariantValue {
                fn from(value: $t) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_from_int!(i32, i64, u8, u16, u32, u64, usize);

impl Serialize for VariantValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_bool() {
            Some(b) => serializer.serialize_bool(b),
            None => serializer.serialize_str(&self.0),
        }
    }
}

/// Scalar shapes accepted for a value name in recipe files.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for VariantValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawValue::deserialize(deserializer)? {
            RawValue::Bool(b) => b.into(),
            RawValue::Int(n) => n.into(),
            RawValue::Text(s) => s.into(),
        })
    }
}
