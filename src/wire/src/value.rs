// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Timestamp;
use std::collections::BTreeMap;

/// A field value in native form.
///
/// Fields declared in a [Shape][crate::Shape] hold the variant matching their
/// kind and cardinality. All other fields hold [Value::Json], with the value
/// exactly as received.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A byte sequence, base64 text on the wire.
    Bytes(bytes::Bytes),
    /// A 64-bit integer (signed or unsigned), a decimal string on the wire.
    Integer(i128),
    /// A point in time, an RFC 3339 string on the wire.
    Timestamp(Timestamp),
    /// A nested entity.
    Record(Record),
    /// The elements of a repeated field.
    List(Vec<Value>),
    /// The entries of a map field.
    Map(BTreeMap<String, Value>),
    /// A value that is not transcoded.
    Json(serde_json::Value),
}

impl Value {
    pub fn as_bytes(&self) -> Option<&bytes::Bytes> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match self {
            Self::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(j) => Some(j),
            _ => None,
        }
    }

    /// Returns the string in a [Value::Json], if any.
    pub fn as_str(&self) -> Option<&str> {
        self.as_json().and_then(|j| j.as_str())
    }
}

impl From<bytes::Bytes> for Value {
    fn from(value: bytes::Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Self::Map(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Json(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Json(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Json(value.into())
    }
}

/// An entity in native form.
///
/// A record maps field names (as they appear in JSON) to values. Absent
/// fields are simply not present in the map, there is no placeholder for
/// them.
///
/// # Example
/// ```
/// # use google_rest_wire::{Record, Value};
/// let record = Record::new()
///     .set("transactionId", bytes::Bytes::from_static(&[1, 2, 3]))
///     .set("mutationCount", 42_i64);
/// assert_eq!(record.get("mutationCount").and_then(Value::as_integer), Some(42));
/// assert!(record.get("commitTimestamp").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a field, replacing any previous value.
    pub fn set<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Sets the value of a field if `value` is `Some`, removes the field otherwise.
    pub fn set_or_clear<K, V>(mut self, name: K, value: Option<V>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let name = name.into();
        match value {
            Some(v) => {
                self.0.insert(name, v.into());
            }
            None => {
                self.0.remove(&name);
            }
        };
        self
    }

    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, name: K, value: V) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_and_get() {
        let ts = Timestamp::clamp(123, 0);
        let record = Record::new()
            .set("name", "projects/p/instances/i")
            .set("createTime", ts)
            .set("id", bytes::Bytes::from_static(b"abc"))
            .set("rowCount", u64::MAX)
            .set("extra", json!({"a": 1}));
        assert_eq!(
            record.get("name").and_then(Value::as_str),
            Some("projects/p/instances/i")
        );
        assert_eq!(
            record.get("createTime").and_then(Value::as_timestamp),
            Some(&ts)
        );
        assert_eq!(
            record.get("id").and_then(Value::as_bytes).map(|b| b.to_vec()),
            Some(b"abc".to_vec())
        );
        assert_eq!(
            record.get("rowCount").and_then(Value::as_integer),
            Some(u64::MAX as i128)
        );
        assert_eq!(
            record.get("extra").and_then(Value::as_json),
            Some(&json!({"a": 1}))
        );
        assert_eq!(record.len(), 5);
    }

    #[test]
    fn set_or_clear() {
        let record = Record::new()
            .set("a", 1_i64)
            .set_or_clear("a", None::<i64>)
            .set_or_clear("b", Some(2_i64));
        assert!(!record.contains("a"));
        assert_eq!(record.get("b").and_then(Value::as_integer), Some(2));
    }

    #[test]
    fn accessors_mismatch() {
        let v = Value::from(42_i64);
        assert!(v.as_bytes().is_none());
        assert!(v.as_timestamp().is_none());
        assert!(v.as_record().is_none());
        assert!(v.as_list().is_none());
        assert!(v.as_map().is_none());
        assert!(v.as_json().is_none());
        assert!(v.as_str().is_none());
    }

    #[test]
    fn from_iter() {
        let record = [("a", 1_i64), ("b", 2_i64)]
            .into_iter()
            .collect::<Record>();
        let names = record.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b"]);
        let mut record = record;
        assert!(record.remove("a").is_some());
        assert!(!record.is_empty());
    }
}
