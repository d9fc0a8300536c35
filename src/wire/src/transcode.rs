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

//! Transcode entities between their wire and native forms.
//!
//! The functions in this module walk a record guided by its [Shape]. Fields
//! declared in the shape are converted with the scalar transcoders, or
//! recursively for nested entities. All other fields are copied unchanged.
//!
//! Absent fields remain absent in both directions. A JSON `null` is treated
//! as data: it is preserved in both directions, even for declared fields.

use crate::error::ErrorKind;
use crate::shape::{Cardinality, Field, Kind, Shape};
use crate::{Error, Record, Value, bytes, integer, timestamp};
use serde_json::Map;
use std::collections::BTreeMap;

type Json = serde_json::Value;

/// Converts a native-form record to its wire form.
///
/// # Example
/// ```
/// # use google_rest_wire::{Field, Record, Shape, to_wire_form};
/// # use serde_json::json;
/// static COMMIT: Shape = Shape::new("CommitRequest", &[Field::bytes("transactionId")]);
/// let record = Record::new()
///     .set("transactionId", bytes::Bytes::from_static(&[0x01, 0x02, 0x03]))
///     .set("returnCommitStats", true);
/// let wire = to_wire_form(&record, &COMMIT)?;
/// assert_eq!(
///     serde_json::Value::Object(wire),
///     json!({"transactionId": "AQID", "returnCommitStats": true})
/// );
/// # Ok::<(), google_rest_wire::Error>(())
/// ```
///
/// Fields not declared in `shape` and holding [Value::Json] are copied. Fields
/// not declared in `shape` but holding native values (bytes, integers,
/// timestamps, nested records) are encoded using the natural wire form for
/// each value.
///
/// Declared fields must hold the native value matching the declaration, or
/// `null`. In particular, a declared bytes field holding a JSON string is an
/// error: that would mix wire and native forms in the same record.
pub fn to_wire_form(record: &Record, shape: &Shape) -> Result<Map<String, Json>, Error> {
    record
        .iter()
        .map(|(name, value)| {
            let wire = match shape.field(name) {
                Some(field) => encode_field(value, field).map_err(|e| e.in_field(name))?,
                None => encode_untyped(value),
            };
            Ok((name.clone(), wire))
        })
        .collect()
}

/// Converts a wire-form record to its native form.
///
/// # Example
/// ```
/// # use google_rest_wire::{Field, Shape, Value, to_native_form};
/// # use serde_json::json;
/// static COMMIT: Shape = Shape::new("CommitRequest", &[Field::bytes("transactionId")]);
/// let wire = json!({"transactionId": "AQID", "returnCommitStats": true});
/// let serde_json::Value::Object(wire) = wire else { unreachable!() };
/// let record = to_native_form(wire, &COMMIT)?;
/// assert_eq!(
///     record.get("transactionId").and_then(Value::as_bytes).map(|b| b.to_vec()),
///     Some(vec![0x01, 0x02, 0x03])
/// );
/// assert_eq!(record.get("returnCommitStats"), Some(&Value::Json(json!(true))));
/// # Ok::<(), google_rest_wire::Error>(())
/// ```
pub fn to_native_form(record: Map<String, Json>, shape: &Shape) -> Result<Record, Error> {
    let mut native = Record::new();
    for (name, value) in record {
        let value = match shape.field(&name) {
            Some(field) => decode_field(value, field).map_err(|e| e.in_field(&name))?,
            None => Value::Json(value),
        };
        native.insert(name, value);
    }
    Ok(native)
}

/// Converts a native-form record to a wire-form JSON value.
///
/// Convenient when the transport expects a [serde_json::Value].
pub fn to_wire_value(record: &Record, shape: &Shape) -> Result<Json, Error> {
    to_wire_form(record, shape).map(Json::Object)
}

/// Converts a wire-form JSON value to a native-form record.
///
/// The value must be a JSON object.
pub fn to_native_value(value: Json, shape: &Shape) -> Result<Record, Error> {
    match value {
        Json::Object(map) => to_native_form(map, shape),
        v => Err(Error::unexpected_type("an object", &v)),
    }
}

fn encode_field(value: &Value, field: &Field) -> Result<Json, Error> {
    match (field.cardinality(), value) {
        (_, Value::Json(Json::Null)) => Ok(Json::Null),
        (Cardinality::Singular, v) => encode_scalar(v, field.kind()),
        (Cardinality::Repeated, Value::List(list)) => list
            .iter()
            .enumerate()
            .map(|(i, v)| encode_element(v, field.kind()).map_err(|e| e.in_element(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Json::Array),
        (Cardinality::Map, Value::Map(map)) => map
            .iter()
            .map(|(k, v)| {
                encode_element(v, field.kind())
                    .map(|v| (k.clone(), v))
                    .map_err(|e| e.in_entry(k))
            })
            .collect::<Result<Map<_, _>, _>>()
            .map(Json::Object),
        (Cardinality::Repeated, v) => Err(unexpected_native("a list", v)),
        (Cardinality::Map, v) => Err(unexpected_native("a map", v)),
    }
}

fn encode_element(value: &Value, kind: Kind) -> Result<Json, Error> {
    match value {
        Value::Json(Json::Null) => Ok(Json::Null),
        v => encode_scalar(v, kind),
    }
}

fn encode_scalar(value: &Value, kind: Kind) -> Result<Json, Error> {
    match (kind, value) {
        (Kind::Bytes, Value::Bytes(b)) => Ok(Json::String(bytes::encode(b))),
        (Kind::Integer, Value::Integer(i)) => Ok(Json::String(integer::to_wire(*i))),
        (Kind::Timestamp, Value::Timestamp(t)) => Ok(Json::String(timestamp::to_wire(t))),
        (Kind::Message(shape), Value::Record(r)) => to_wire_form(r, shape).map(Json::Object),
        (Kind::Bytes, v) => Err(unexpected_native("bytes", v)),
        (Kind::Integer, v) => Err(unexpected_native("an integer", v)),
        (Kind::Timestamp, v) => Err(unexpected_native("a timestamp", v)),
        (Kind::Message(_), v) => Err(unexpected_native("a record", v)),
    }
}

fn encode_untyped(value: &Value) -> Json {
    match value {
        Value::Json(j) => j.clone(),
        Value::Bytes(b) => Json::String(bytes::encode(b)),
        Value::Integer(i) => Json::String(integer::to_wire(*i)),
        Value::Timestamp(t) => Json::String(timestamp::to_wire(t)),
        Value::Record(r) => Json::Object(
            r.iter()
                .map(|(k, v)| (k.clone(), encode_untyped(v)))
                .collect(),
        ),
        Value::List(l) => Json::Array(l.iter().map(encode_untyped).collect()),
        Value::Map(m) => Json::Object(
            m.iter()
                .map(|(k, v)| (k.clone(), encode_untyped(v)))
                .collect(),
        ),
    }
}

fn decode_field(value: Json, field: &Field) -> Result<Value, Error> {
    match (field.cardinality(), value) {
        (_, Json::Null) => Ok(Value::Json(Json::Null)),
        (Cardinality::Singular, v) => decode_scalar(v, field.kind()),
        (Cardinality::Repeated, Json::Array(list)) => list
            .into_iter()
            .enumerate()
            .map(|(i, v)| decode_element(v, field.kind()).map_err(|e| e.in_element(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        (Cardinality::Map, Json::Object(map)) => map
            .into_iter()
            .map(|(k, v)| match decode_element(v, field.kind()) {
                Ok(v) => Ok((k, v)),
                Err(e) => Err(e.in_entry(&k)),
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Value::Map),
        (Cardinality::Repeated, v) => Err(Error::unexpected_type("an array", &v)),
        (Cardinality::Map, v) => Err(Error::unexpected_type("an object", &v)),
    }
}

fn decode_element(value: Json, kind: Kind) -> Result<Value, Error> {
    match value {
        Json::Null => Ok(Value::Json(Json::Null)),
        v => decode_scalar(v, kind),
    }
}

fn decode_scalar(value: Json, kind: Kind) -> Result<Value, Error> {
    match (kind, value) {
        (Kind::Bytes, Json::String(s)) => bytes::decode(&s).map(Value::Bytes),
        (Kind::Integer, v) => integer::from_json(&v).map(Value::Integer),
        (Kind::Timestamp, Json::String(s)) => timestamp::from_wire(&s).map(Value::Timestamp),
        (Kind::Message(shape), Json::Object(map)) => to_native_form(map, shape).map(Value::Record),
        (Kind::Bytes, v) => Err(Error::unexpected_type("a base64 string", &v)),
        (Kind::Timestamp, v) => Err(Error::unexpected_type("an RFC 3339 string", &v)),
        (Kind::Message(_), v) => Err(Error::unexpected_type("an object", &v)),
    }
}

fn unexpected_native(expected: &'static str, found: &Value) -> Error {
    let found = match found {
        Value::Bytes(_) => "bytes",
        Value::Integer(_) => "an integer",
        Value::Timestamp(_) => "a timestamp",
        Value::Record(_) => "a record",
        Value::List(_) => "a list",
        Value::Map(_) => "a map",
        Value::Json(_) => "a JSON value",
    };
    Error::new(ErrorKind::UnexpectedType { expected, found })
}
