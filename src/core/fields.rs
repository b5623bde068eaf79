//! Ordered key/value fields attached to a single log record
//!
//! This module provides:
//! - `FieldValue`: the closed set of printable value kinds
//! - `Fields`: an insertion-ordered sequence of `(key, value)` pairs

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
    Error(String),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::List(items) => write!(f, "[{}]", items.join(", ")),
            FieldValue::Map(map) => {
                let pairs = map
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{}}}", pairs)
            }
            FieldValue::Error(message) => write!(f, "{}", message),
            FieldValue::Null => Ok(()),
        }
    }
}

impl FieldValue {
    /// Capture an error by its display text.
    pub fn error(err: &dyn std::error::Error) -> Self {
        FieldValue::Error(err.to_string())
    }

    /// Whether this value renders as nothing.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<char> for FieldValue {
    fn from(c: char) -> Self {
        FieldValue::String(c.to_string())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(i: $t) -> Self {
                FieldValue::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(u: $t) -> Self {
                FieldValue::UInt(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for FieldValue {
    fn from(items: &[&str]) -> Self {
        FieldValue::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<BTreeMap<String, String>> for FieldValue {
    fn from(map: BTreeMap<String, String>) -> Self {
        FieldValue::Map(map)
    }
}

impl From<HashMap<String, String>> for FieldValue {
    fn from(map: HashMap<String, String>) -> Self {
        FieldValue::Map(map.into_iter().collect())
    }
}

impl From<HashMap<&str, &str>> for FieldValue {
    fn from(map: HashMap<&str, &str>) -> Self {
        FieldValue::Map(
            map.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Insertion-ordered fields of one log record.
///
/// Setting a key that already exists replaces its value and keeps the
/// position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, FieldValue)>,
}

impl Fields {
    /// Create a new empty field sequence
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build fields from flat, interleaved `key, value, key, value, ...` arguments.
    ///
    /// A trailing key without a value becomes a field with a `Null` value.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = FieldValue>,
    {
        let mut fields = Fields::new();
        let mut args = args.into_iter();
        while let Some(key) = args.next() {
            let value = args.next().unwrap_or(FieldValue::Null);
            fields.set(key.to_string(), value);
        }
        fields
    }

    /// Add a field (chaining version)
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.set(key, value);
        self
    }

    /// Append a field, or replace the value in place when `key` is present.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Append without looking for an existing key. Used for the reserved
    /// rows that must follow every user field.
    pub(crate) fn append(&mut self, key: impl Into<String>, value: FieldValue) {
        self.entries.push((key.into(), value));
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate in insertion order, flagging the final element.
    pub fn iter_with_last(&self) -> impl Iterator<Item = (bool, &str, &FieldValue)> {
        let last = self.entries.len().saturating_sub(1);
        self.entries
            .iter()
            .enumerate()
            .map(move |(i, (k, v))| (i == last, k.as_str(), v))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, value) in iter {
            fields.set(key, value);
        }
        fields
    }
}

impl<K, V> Extend<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}
