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

//! Declarative descriptions of entity shapes.
//!
//! A [Shape] lists the fields of an entity that need transcoding: the fields
//! holding bytes, wire integers, or timestamps, and the fields holding nested
//! entities that (directly or indirectly) contain such fields. All other
//! fields are copied unchanged, and do not need to appear in the shape.
//!
//! Shapes are built with `const` functions, so client libraries declare
//! them as `static` items:
//!
//! ```
//! # use google_rest_wire::{Field, Shape};
//! pub static TRANSACTION: Shape = Shape::new(
//!     "google.spanner.v1.Transaction",
//!     &[Field::bytes("id"), Field::timestamp("readTimestamp")],
//! );
//! pub static COMMIT_REQUEST: Shape = Shape::new(
//!     "google.spanner.v1.CommitRequest",
//!     &[
//!         Field::bytes("transactionId"),
//!         Field::message("singleUseTransaction", &TRANSACTION),
//!     ],
//! );
//! assert_eq!(COMMIT_REQUEST.field("transactionId").map(|f| f.name()), Some("transactionId"));
//! ```
//!
//! Shapes may be recursive. A static item can refer to itself.

/// The wire encoding of a field.
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum Kind {
    /// Base64 text on the wire, [bytes::Bytes] in memory.
    Bytes,
    /// Decimal string on the wire, `i128` in memory.
    Integer,
    /// RFC 3339 string on the wire, [Timestamp][crate::Timestamp] in memory.
    Timestamp,
    /// A nested entity, transcoded with its own shape.
    Message(&'static Shape),
}

/// How many values a field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinality {
    /// A single value, possibly absent.
    Singular,
    /// A JSON array of values. The order is preserved.
    Repeated,
    /// A JSON object with arbitrary string keys. The key set is preserved.
    Map,
}

/// A field that needs transcoding.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    name: &'static str,
    kind: Kind,
    cardinality: Cardinality,
}

impl Field {
    /// Creates a field with the given name, kind, and cardinality.
    pub const fn new(name: &'static str, kind: Kind, cardinality: Cardinality) -> Self {
        Self {
            name,
            kind,
            cardinality,
        }
    }

    /// A singular `bytes` field.
    pub const fn bytes(name: &'static str) -> Self {
        Self::new(name, Kind::Bytes, Cardinality::Singular)
    }

    /// A singular 64-bit integer field.
    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, Kind::Integer, Cardinality::Singular)
    }

    /// A singular timestamp field.
    pub const fn timestamp(name: &'static str) -> Self {
        Self::new(name, Kind::Timestamp, Cardinality::Singular)
    }

    /// A singular nested entity.
    pub const fn message(name: &'static str, shape: &'static Shape) -> Self {
        Self::new(name, Kind::Message(shape), Cardinality::Singular)
    }

    /// Changes the field to a repeated field.
    pub const fn repeated(self) -> Self {
        Self {
            cardinality: Cardinality::Repeated,
            ..self
        }
    }

    /// Changes the field to a map field with string keys.
    pub const fn map(self) -> Self {
        Self {
            cardinality: Cardinality::Map,
            ..self
        }
    }

    /// The field name, as it appears in the JSON payload (usually camelCase).
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }
}

/// The shape of an entity: the fields that need transcoding.
#[derive(Debug)]
pub struct Shape {
    name: &'static str,
    fields: &'static [Field],
}

impl Shape {
    /// Creates a new shape.
    ///
    /// The `name` is only used for logging and debugging, typically this is
    /// the fully qualified name of the schema in the service description.
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self { name, fields }
    }

    /// A shape without any fields needing transcoding.
    ///
    /// Useful for requests and responses that carry no bytes, integers, or
    /// timestamps, such as `google.protobuf.Empty`.
    pub const fn opaque(name: &'static str) -> Self {
        Self::new(name, &[])
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Finds a field by its JSON name.
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
