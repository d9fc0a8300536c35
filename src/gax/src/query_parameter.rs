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

//! Assemble query parameters.
//!
//! Google APIs use [HTTP/JSON transcoding](https://google.aip.dev/127). Some
//! request fields are sent as query parameters and need special formatting:
//! - Simple scalars are formatted as usual.
//! - Bytes, 64-bit integers, and timestamps use their wire form: base64
//!   text, decimal strings, and RFC 3339 strings.
//! - [Option] fields that do not contain a value are not included in the HTTP
//!   query. Neither are JSON `null` values.
//! - Repeated fields are formatted as repeated query parameters.
//! - Object fields use `field.subfield` format, and may recurse.

use wire::{Record, Timestamp, Value};

/// The query parameters for a request, in wire form.
///
/// # Example
/// ```
/// # use google_rest_gax::query_parameter::QueryParameters;
/// # use wire::{Record, Timestamp};
/// let read_options = Record::new().set("minReadTimestamp", Timestamp::clamp(1412262083, 45_000_000));
/// let query = QueryParameters::new()
///     .add("pageSize", &25_i32)
///     .add("pageToken", &None::<String>)
///     .add("readOptions", &read_options);
/// assert_eq!(query.pairs(), &[
///     ("pageSize".to_string(), "25".to_string()),
///     ("readOptions.minReadTimestamp".to_string(), "2014-10-02T15:01:23.045Z".to_string()),
/// ]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParameters {
    pairs: Vec<(String, String)>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the parameter `name` with the value in `parameter`.
    ///
    /// Depending on the value this may add zero, one, or many pairs.
    pub fn add<T>(mut self, name: &str, parameter: &T) -> Self
    where
        T: QueryParameter + ?Sized,
    {
        parameter.append(name, &mut self.pairs);
        self
    }

    /// The `(name, value)` pairs, in the order they were added.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    /// Appends zero or more `(name, value)` pairs representing `self`.
    fn append(&self, name: &str, pairs: &mut Vec<(String, String)>);
}

impl<T: QueryParameter + ?Sized> QueryParameter for &T {
    fn append(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        T::append(self, name, pairs)
    }
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn append(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        if let Some(t) = self {
            t.append(name, pairs);
        }
    }
}

impl<T: QueryParameter> QueryParameter for [T] {
    fn append(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        self.iter().for_each(|e| e.append(name, pairs));
    }
}

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn append(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        self.as_slice().append(name, pairs);
    }
}

macro_rules! display_parameter {
    ($($t:ty),*) => {
        $(
            impl QueryParameter for $t {
                fn append(&self, name: &str, pairs: &mut Vec<(String, String)>) {
                    pairs.push((name.to_string(), self.to_string()));
                }
            }
        )*
    };
}

display_parameter!(str, String, bool, i32, u32, f32, f64);

macro_rules! wire_integer_parameter {
    ($($t:ty),*) => {
        $(
            impl QueryParameter for $t {
                fn append(&self, name: &str, pairs: &mut Vec<(String, String)>) {
                    pairs.push((name.to_string(), wire::integer::to_wire(*self as i128)));
                }
            }
        )*
    };
}

wire_integer_parameter!(i64, u64, i128);

impl QueryParameter for bytes::Bytes {
    fn append(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        pairs.push((name.to_string(), wire::bytes::encode(self)));
    }
}

impl QueryParameter for Timestamp {
    fn append(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        pairs.push((name.to_string(), wire::timestamp::to_wire(self)));
    }
}

impl QueryParameter for Record {
    fn append(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        for (k, v) in self {
            v.append(&format!("{name}.{k}"), pairs);
        }
    }
}

impl QueryParameter for Value {
    fn append(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        match self {
            Value::Bytes(b) => b.append(name, pairs),
            Value::Integer(i) => i.append(name, pairs),
            Value::Timestamp(t) => t.append(name, pairs),
            Value::Record(r) => r.append(name, pairs),
            Value::List(l) => l.append(name, pairs),
            Value::Map(m) => m
                .iter()
                .for_each(|(k, v)| v.append(&format!("{name}.{k}"), pairs)),
            Value::Json(j) => j.append(name, pairs),
        }
    }
}

impl QueryParameter for serde_json::Value {
    fn append(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        use serde_json::Value;
        match self {
            Value::Object(object) => object
                .iter()
                .for_each(|(k, v)| v.append(&format!("{name}.{k}"), pairs)),
            Value::Array(array) => array.iter().for_each(|v| v.append(name, pairs)),
            Value::Null => {}
            Value::String(s) => s.append(name, pairs),
            Value::Number(n) => pairs.push((name.to_string(), n.to_string())),
            Value::Bool(b) => b.append(name, pairs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn none() {
        let query = QueryParameters::new()
            .add("i32", &None::<i32>)
            .add("i64", &None::<i64>)
            .add("str", &None::<String>)
            .add("ts", &None::<Timestamp>)
            .add("null", &json!(null));
        assert!(query.is_empty(), "{query:?}");
    }

    #[test]
    fn scalars() {
        let query = QueryParameters::new()
            .add("i32", &Some(42_i32))
            .add("u32", &42_u32)
            .add("f64", &42.5_f64)
            .add("bool", &true)
            .add("str", "abc")
            .add("string", &"def".to_string());
        assert_eq!(
            query.into_pairs(),
            pairs(&[
                ("i32", "42"),
                ("u32", "42"),
                ("f64", "42.5"),
                ("bool", "true"),
                ("str", "abc"),
                ("string", "def"),
            ])
        );
    }

    #[test]
    fn wire_scalars() {
        let query = QueryParameters::new()
            .add("i64", &i64::MIN)
            .add("u64", &u64::MAX)
            .add("bytes", &bytes::Bytes::from_static(&[1, 2, 3]))
            .add("ts", &Timestamp::clamp(1412262083, 45_000_000));
        assert_eq!(
            query.into_pairs(),
            pairs(&[
                ("i64", "-9223372036854775808"),
                ("u64", "18446744073709551615"),
                ("bytes", "AQID"),
                ("ts", "2014-10-02T15:01:23.045Z"),
            ])
        );
    }

    #[test]
    fn repeated() {
        let query = QueryParameters::new()
            .add("fields", &vec!["a", "b"])
            .add("empty", &Vec::<i64>::new())
            .add("ids", &[1_i64, 2_i64][..]);
        assert_eq!(
            query.into_pairs(),
            pairs(&[("fields", "a"), ("fields", "b"), ("ids", "1"), ("ids", "2")])
        );
    }

    #[test]
    fn record() {
        let options = Record::new()
            .set("readOnly", Record::new().set("strong", true))
            .set("ids", vec![Value::from(1_i64), Value::from(2_i64)])
            .set("token", bytes::Bytes::from_static(b"abc"))
            .set("labels", Value::Map([("k".to_string(), Value::from("v"))].into()));
        let query = QueryParameters::new().add("options", &options);
        assert_eq!(
            query.into_pairs(),
            pairs(&[
                ("options.ids", "1"),
                ("options.ids", "2"),
                ("options.labels.k", "v"),
                ("options.readOnly.strong", "true"),
                ("options.token", "YWJj"),
            ])
        );
    }

    #[test]
    fn json() {
        let value = json!({
            "a": {"b": 1, "c": [true, false]},
            "d": null,
            "e": "f",
        });
        let query = QueryParameters::new().add("json", &value);
        assert_eq!(
            query.into_pairs(),
            pairs(&[
                ("json.a.b", "1"),
                ("json.a.c", "true"),
                ("json.a.c", "false"),
                ("json.e", "f"),
            ])
        );
    }
}
