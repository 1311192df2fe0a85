//! Ordered query parameters and their values.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single query parameter value.
///
/// Lists expand to one `key=value` pair per element; a list nested inside a
/// list renders as its elements joined by `,`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<QueryValue>),
}

impl QueryValue {
    /// Renders the value as it appears on the right of `=`.
    fn render(&self) -> String {
        match self {
            QueryValue::Bool(b) => b.to_string(),
            QueryValue::Integer(n) => n.to_string(),
            QueryValue::Float(f) => render_float(*f),
            QueryValue::Text(s) => s.clone(),
            QueryValue::List(items) => items
                .iter()
                .map(QueryValue::render)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            QueryValue::List(items) => {
                out.extend(items.iter().map(|item| (key.to_string(), item.render())));
            }
            other => out.push((key.to_string(), other.render())),
        }
    }
}

fn render_float(f: f64) -> String {
    if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if f == 0.0 {
        // Covers -0.0 as well.
        "0".to_string()
    } else if f.is_finite() && (f.abs() >= 1e21 || f.abs() < 1e-6) {
        exponent_form(f)
    } else {
        f.to_string()
    }
}

/// `1e21` → `1e+21`, `1.5e-7` → `1.5e-7`.
fn exponent_form(f: f64) -> String {
    let s = format!("{f:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Text(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Text(s)
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl From<f64> for QueryValue {
    fn from(f: f64) -> Self {
        QueryValue::Float(f)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(n: $t) -> Self {
                QueryValue::Integer(i64::from(n))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(items: Vec<T>) -> Self {
        QueryValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// Query parameters in insertion order.
///
/// Behaves like an ordered map: inserting an existing key replaces its value
/// in place. A `None` value is kept in the map but produces no pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object, keeping the key order of the document.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Sets `key` to `value`, replacing an existing entry in its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.set(key.into(), Some(value.into()));
    }

    /// Sets `key` to "no value"; the key is skipped when the query is built.
    pub fn insert_none(&mut self, key: impl Into<String>) {
        self.set(key.into(), None);
    }

    /// Adds `value` under `key`. If `key` already holds a value, the entry
    /// becomes a list holding both.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot @ None)) => *slot = Some(value),
            Some((_, Some(QueryValue::List(items)))) => items.push(value),
            Some((_, Some(existing))) => {
                let first = existing.clone();
                *existing = QueryValue::List(vec![first, value]);
            }
            None => self.entries.push((key, Some(value))),
        }
    }

    /// Appends every entry of `other`, in order, using [`QueryParams::append`].
    pub fn extend_from(&mut self, other: &QueryParams) {
        for (key, value) in &other.entries {
            match value {
                Some(v) => self.append(key.clone(), v.clone()),
                None if !self.contains_key(key) => self.insert_none(key.clone()),
                None => {}
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Expands the parameters into `(key, value)` pairs in insertion order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            if let Some(value) = value {
                value.push_pairs(key, &mut out);
            }
        }
        out
    }

    fn set(&mut self, key: String, value: Option<QueryValue>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present: Vec<_> = self
            .entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k, v)))
            .collect();
        let mut map = serializer.serialize_map(Some(present.len()))?;
        for (k, v) in present {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QueryParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParamsVisitor;

        impl<'de> Visitor<'de> for ParamsVisitor {
            type Value = QueryParams;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of query parameter names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<QueryParams, A::Error> {
                let mut params = QueryParams::new();
                while let Some((key, value)) = map.next_entry::<String, Option<QueryValue>>()? {
                    params.set(key, value);
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ParamsVisitor)
    }
}
