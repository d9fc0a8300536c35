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

//! Wire transcoding for Google REST APIs.
//!
//! Google REST APIs exchange JSON payloads. JSON has no representation for
//! byte sequences, no date type, and its numbers lose precision past 53 bits.
//! The services work around this with string encodings:
//!
//! | native form        | wire form                                    |
//! |--------------------|----------------------------------------------|
//! | bytes              | base64 text, standard alphabet with padding  |
//! | 64-bit integers    | decimal strings, e.g. `"9223372036854775807"`|
//! | points in time     | RFC 3339 strings, e.g. `"2014-10-02T15:01:23.045Z"` |
//!
//! This crate converts between both forms. The scalar transcoders live in
//! the [bytes], [integer], and [timestamp] modules. Entities are converted by
//! a single generic transcoder ([to_wire_form] and [to_native_form]) guided
//! by a static [Shape] that declares which fields need transcoding.
//!
//! All the functions are pure: they perform no I/O, hold no state, and may be
//! called concurrently from any number of threads.
//!
//! # Example
//! ```
//! # use google_rest_wire::{Field, Record, Shape, Timestamp, Value};
//! # use google_rest_wire::{to_native_value, to_wire_value};
//! # use serde_json::json;
//! static TRANSACTION: Shape = Shape::new(
//!     "google.spanner.v1.Transaction",
//!     &[Field::bytes("id"), Field::timestamp("readTimestamp")],
//! );
//! let wire = json!({"id": "AQID", "readTimestamp": "2014-10-02T15:01:23.045Z"});
//! let native = to_native_value(wire.clone(), &TRANSACTION)?;
//! assert_eq!(
//!     native.get("readTimestamp").and_then(Value::as_timestamp),
//!     Some(&Timestamp::new(1412262083, 45_000_000)?)
//! );
//! assert_eq!(to_wire_value(&native, &TRANSACTION)?, wire);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod bytes;
mod error;
pub use error::*;
pub mod integer;
mod shape;
pub use shape::*;
pub mod timestamp;
pub use timestamp::{Timestamp, TimestampError};
mod transcode;
pub use transcode::*;
mod value;
pub use value::*;
