//! Dynamically typed values checked by the validator.
//!
//! [`DynamicValue`] makes the difference between a slot that was never
//! supplied ([`DynamicValue::Absent`]) and one explicitly set to null
//! ([`DynamicValue::Null`]) part of the type, instead of relying on a host
//! format's sentinel. Values can be built from Rust literals, converted from
//! [`serde_json::Value`] / [`serde_yaml::Value`], or parsed from text.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};

use crate::error::{Error, Result};

static ABSENT: DynamicValue = DynamicValue::Absent;

/// Runtime category of a [`DynamicValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    /// No value supplied.
    Absent,
    /// Explicit null.
    Null,
    /// Boolean scalar.
    Boolean,
    /// Numeric scalar.
    Number,
    /// Text scalar.
    String,
    /// Ordered, heterogeneous sequence.
    Sequence,
    /// String-keyed mapping.
    Mapping,
}

/// A dynamically typed value.
///
/// # Examples
///
/// ```
/// use value_schema_core::{DynamicValue, ValueCategory};
///
/// let doc = DynamicValue::from_json_str(r#"{"name": "John", "id": 0}"#).unwrap();
/// assert_eq!(doc.category(), ValueCategory::Mapping);
/// assert_eq!(doc.get("name"), &DynamicValue::from("John"));
/// assert!(doc.get("missing").is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DynamicValue {
    /// No value supplied (distinct from [`Null`](DynamicValue::Null)).
    #[default]
    Absent,
    /// Explicit null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(f64),
    /// Text scalar.
    String(String),
    /// Ordered sequence.
    Sequence(Vec<DynamicValue>),
    /// String-keyed mapping. An entry holding `Absent` reads the same as a
    /// missing key.
    Mapping(BTreeMap<String, DynamicValue>),
}

impl DynamicValue {
    /// Returns the runtime category tag.
    pub fn category(&self) -> ValueCategory {
        match self {
            DynamicValue::Absent => ValueCategory::Absent,
            DynamicValue::Null => ValueCategory::Null,
            DynamicValue::Bool(_) => ValueCategory::Boolean,
            DynamicValue::Number(_) => ValueCategory::Number,
            DynamicValue::String(_) => ValueCategory::String,
            DynamicValue::Sequence(_) => ValueCategory::Sequence,
            DynamicValue::Mapping(_) => ValueCategory::Mapping,
        }
    }

    /// Returns `true` for [`DynamicValue::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, DynamicValue::Absent)
    }

    /// Returns `true` for [`DynamicValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, DynamicValue::Null)
    }

    /// Looks up `key` in a mapping.
    ///
    /// Missing keys, and lookups on anything that is not a mapping, read as
    /// [`DynamicValue::Absent`].
    pub fn get(&self, key: &str) -> &DynamicValue {
        match self {
            DynamicValue::Mapping(entries) => entries.get(key).unwrap_or(&ABSENT),
            _ => &ABSENT,
        }
    }

    /// Builds a mapping from `(key, value)` pairs.
    pub fn mapping<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<DynamicValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        DynamicValue::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if `input` is not valid JSON.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        Ok(value.into())
    }

    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Yaml`] if `input` is not valid YAML, or
    /// [`Error::UnsupportedKey`] if a mapping uses a non-scalar key.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(input)?;
        DynamicValue::try_from(value)
    }

    /// Converts any serializable Rust value through its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if `value` cannot be represented as JSON
    /// (e.g. a map with non-string keys).
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(serde_json::to_value(value)?.into())
    }
}

impl From<bool> for DynamicValue {
    fn from(value: bool) -> Self {
        DynamicValue::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for DynamicValue {
                fn from(value: $ty) -> Self {
                    DynamicValue::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        DynamicValue::String(value.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(value: String) -> Self {
        DynamicValue::String(value)
    }
}

impl<T: Into<DynamicValue>> From<Vec<T>> for DynamicValue {
    fn from(values: Vec<T>) -> Self {
        DynamicValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

/// `None` converts to [`DynamicValue::Null`]; use
/// [`DynamicValue::Absent`] explicitly for a missing slot.
impl<T: Into<DynamicValue>> From<Option<T>> for DynamicValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DynamicValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for DynamicValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => DynamicValue::Null,
            Value::Bool(b) => DynamicValue::Bool(b),
            Value::Number(n) => DynamicValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => DynamicValue::String(s),
            Value::Array(items) => {
                DynamicValue::Sequence(items.into_iter().map(DynamicValue::from).collect())
            }
            Value::Object(entries) => DynamicValue::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, DynamicValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for DynamicValue {
    fn from(value: &serde_json::Value) -> Self {
        DynamicValue::from(value.clone())
    }
}

impl TryFrom<serde_yaml::Value> for DynamicValue {
    type Error = Error;

    fn try_from(value: serde_yaml::Value) -> Result<Self> {
        use serde_yaml::Value;

        Ok(match value {
            Value::Null => DynamicValue::Null,
            Value::Bool(b) => DynamicValue::Bool(b),
            Value::Number(n) => DynamicValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => DynamicValue::String(s),
            Value::Sequence(items) => DynamicValue::Sequence(
                items
                    .into_iter()
                    .map(DynamicValue::try_from)
                    .collect::<Result<_>>()?,
            ),
            Value::Mapping(entries) => {
                let mut mapping = BTreeMap::new();
                for (key, value) in entries {
                    mapping.insert(yaml_key(key)?, DynamicValue::try_from(value)?);
                }
                DynamicValue::Mapping(mapping)
            }
            Value::Tagged(tagged) => DynamicValue::try_from(tagged.value)?,
        })
    }
}

fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => yaml_key(tagged.value),
        other => Err(Error::UnsupportedKey(format!("{other:?}"))),
    }
}

/// Absent serializes as unit at the top level and is skipped inside
/// mappings.
impl Serialize for DynamicValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DynamicValue::Absent | DynamicValue::Null => serializer.serialize_unit(),
            DynamicValue::Bool(b) => serializer.serialize_bool(*b),
            DynamicValue::Number(n) => serializer.serialize_f64(*n),
            DynamicValue::String(s) => serializer.serialize_str(s),
            DynamicValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            DynamicValue::Mapping(entries) => {
                let present = entries.iter().filter(|(_, value)| !value.is_absent());
                let mut map = serializer.serialize_map(Some(present.clone().count()))?;
                for (key, value) in present {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
