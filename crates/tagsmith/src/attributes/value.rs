//! Attribute value types.
//!
//! This module defines the runtime representation of a tag's attribute section.
//! The shape of the value is decided once, when it is constructed (or
//! deserialized), and the renderer matches on it exhaustively.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

/// Runtime representation of an attributes structure.
///
/// | Variant | Renders as |
/// |---------|------------|
/// | `Text` | the string, verbatim |
/// | `List` | each element rendered, joined with a single space |
/// | `Map` | `key="value"` pairs in insertion order, joined with a single space |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Raw attribute text (e.g., `disabled` or `class="x"`)
    Text(String),

    /// Space separated values (e.g., a list of class names)
    List(Vec<AttrValue>),

    /// Ordered `key="value"` pairs. Values render recursively.
    Map(Vec<(String, AttrValue)>),
}

impl Default for AttrValue {
    /// The empty mapping, which renders to nothing.
    fn default() -> Self {
        AttrValue::Map(Vec::new())
    }
}

impl AttrValue {
    /// Create an empty attribute map.
    pub fn map() -> Self {
        AttrValue::default()
    }

    /// Builder-style insert for maps.
    ///
    /// See [`AttrValue::with_attribute`] for how non-map values are handled.
    pub fn with(self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.with_attribute(key, value)
    }

    /// Return a copy of this value with `key` set as the last attribute.
    ///
    /// - `Map`: any existing entry for `key` is removed, the new pair is appended.
    /// - Blank `Text` or empty `List`: becomes a single-entry `Map`.
    /// - Anything else: the existing value and the new pair are wrapped in a `List`,
    ///   so the pair renders after it.
    pub fn with_attribute(self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self {
            AttrValue::Map(mut entries) => {
                entries.retain(|(existing, _)| *existing != key);
                entries.push((key, value));
                AttrValue::Map(entries)
            }
            AttrValue::Text(text) if text.trim().is_empty() => AttrValue::Map(vec![(key, value)]),
            AttrValue::List(items) if items.is_empty() => AttrValue::Map(vec![(key, value)]),
            other => AttrValue::List(vec![other, AttrValue::Map(vec![(key, value)])]),
        }
    }

    /// Look up a key in a `Map`. Other variants have no keys.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        match self {
            AttrValue::Map(entries) => entries
                .iter()
                .find(|(existing, _)| existing == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// True when the value holds nothing at all (not even whitespace).
    pub fn is_empty(&self) -> bool {
        match self {
            AttrValue::Text(text) => text.is_empty(),
            AttrValue::List(items) => items.is_empty(),
            AttrValue::Map(entries) => entries.is_empty(),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(values: Vec<T>) -> Self {
        AttrValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<AttrValue>, const N: usize> From<[T; N]> for AttrValue {
    fn from(values: [T; N]) -> Self {
        AttrValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttrValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        AttrValue::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for AttrValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AttrValueVisitor)
    }
}

struct AttrValueVisitor;

impl<'de> Visitor<'de> for AttrValueVisitor {
    type Value = AttrValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, a list, or a map of attributes")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<AttrValue, E> {
        Ok(AttrValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<AttrValue, E> {
        Ok(AttrValue::Text(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<AttrValue, E> {
        Ok(AttrValue::Text(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<AttrValue, E> {
        Ok(AttrValue::Text(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<AttrValue, E> {
        Ok(AttrValue::Text(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<AttrValue, E> {
        Ok(AttrValue::Text(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<AttrValue, E> {
        Ok(AttrValue::Text(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<AttrValue, E> {
        Ok(AttrValue::Text(String::new()))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<AttrValue, D::Error> {
        AttrValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<AttrValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(AttrValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<AttrValue, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, AttrValue>()? {
            entries.push((key, value));
        }
        Ok(AttrValue::Map(entries))
    }
}
