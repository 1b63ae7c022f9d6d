//! Flat request bodies and their JSON rendering.
//!
//! A request body is an insertion-ordered map from field name to a scalar
//! [`FieldValue`]. [`to_json`] renders it the way the backends have always
//! received it: a flat object, keys and text values wrapped in quotes with
//! no escaping at all, everything else written with its plain text form.
//!
//! Text containing `"` or `\` therefore produces invalid JSON. That output
//! is kept as-is; [`validate`] is available for callers (or clients built
//! with `strict_bodies`) that want such bodies rejected instead.
//!
//! # Example
//!
//! ```rust
//! use rest_resource_client::rest::{to_json, Fields};
//!
//! let fields = Fields::new().with("name", "Widget").with("price", 9.99);
//! assert_eq!(to_json(&fields), r#"{"name":"Widget","price":9.99}"#);
//! ```

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::rest::errors::ResourceError;

/// A single request body value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Text, written quoted and unescaped.
    Text(String),
    /// An integer or finite float.
    Number(serde_json::Number),
    /// A boolean.
    Bool(bool),
    /// An explicit `null`.
    Null,
    /// Any other value's text form, written verbatim and unquoted.
    Raw(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Number(number) => write!(f, "{number}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Raw(raw) => match serde_json::from_str::<serde_json::Value>(raw) {
                Ok(value) => value.serialize(serializer),
                Err(_) => serializer.serialize_str(raw),
            },
            Self::Number(number) => number.serialize(serializer),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Null => serializer.serialize_unit(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::Number(serde_json::Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value).map_or_else(
            || {
                // Non-finite floats have no JSON form; keep their usual spelling.
                let raw = if value.is_nan() {
                    "NaN"
                } else if value.is_sign_positive() {
                    "Infinity"
                } else {
                    "-Infinity"
                };
                Self::Raw(raw.to_string())
            },
            Self::Number,
        )
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        // Widening keeps the binary value, so go through the shortest f32 text.
        let value = value
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(value));
        Self::from(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// An insertion-ordered map of request body fields.
///
/// Inserting an existing key replaces its value and keeps its position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, FieldValue)>,
}

impl Fields {
    /// Creates an empty field map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a field, returning the previous value for that key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        let key = key.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(existing, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}

impl Serialize for Fields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Renders fields as a flat JSON object without escaping.
#[must_use]
pub fn to_json(fields: &Fields) -> String {
    let mut json = String::from("{");
    for (index, (key, value)) in fields.iter().enumerate() {
        if index > 0 {
            json.push(',');
        }
        json.push('"');
        json.push_str(key);
        json.push_str("\":");
        json.push_str(&value.to_string());
    }
    json.push('}');
    json
}

/// Checks that [`to_json`] would produce valid JSON for these fields.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidBody`] for the first field whose name or
/// text value would need escaping, or whose raw value is not valid JSON.
pub fn validate(fields: &Fields) -> Result<(), ResourceError> {
    for (key, value) in fields.iter() {
        if needs_escaping(key) {
            return Err(invalid_body(key, "field name requires JSON escaping"));
        }
        match value {
            FieldValue::Text(text) if needs_escaping(text) => {
                return Err(invalid_body(key, "text value requires JSON escaping"));
            }
            FieldValue::Raw(raw) if serde_json::from_str::<serde_json::Value>(raw).is_err() => {
                return Err(invalid_body(key, "raw value is not valid JSON"));
            }
            _ => {}
        }
    }
    Ok(())
}

fn needs_escaping(text: &str) -> bool {
    serde_json::to_string(text).map_or(true, |escaped| escaped.len() != text.len() + 2)
}

fn invalid_body(field: &str, reason: &'static str) -> ResourceError {
    ResourceError::InvalidBody {
        field: field.to_string(),
        reason,
    }
}
