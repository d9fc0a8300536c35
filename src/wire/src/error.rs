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

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// The error returned by all the transcoders in this crate.
///
/// Transcoding errors indicate that a payload does not match the shape
/// declared for it. They are never transient, and retrying the same call
/// produces the same error.
///
/// When the error was detected inside a record, [Error::path] identifies the
/// offending field, for example `transactions[2].id`.
///
/// # Example
/// ```
/// # use google_rest_wire::bytes;
/// let err = bytes::decode("A").unwrap_err();
/// assert!(err.is_malformed_wire_text(), "{err:?}");
/// assert!(err.path().is_empty());
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    path: String,
}

/// The kinds of transcoding errors.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The text is not valid padded base64.
    #[error("malformed wire text: {0}")]
    MalformedWireText(#[source] BoxedError),

    /// The string is not a decimal integer, or it is out of range.
    #[error("malformed wire integer: {0:?}")]
    MalformedWireInteger(String),

    /// The string is not an RFC 3339 timestamp, or it is out of range.
    #[error("malformed wire timestamp: {0}")]
    MalformedWireTimestamp(#[source] BoxedError),

    /// The JSON value type does not match the declared field shape.
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: String::new(),
        }
    }

    pub(crate) fn malformed_wire_text<T: Into<BoxedError>>(source: T) -> Self {
        Self::new(ErrorKind::MalformedWireText(source.into()))
    }

    pub(crate) fn malformed_wire_integer<T: Into<String>>(value: T) -> Self {
        Self::new(ErrorKind::MalformedWireInteger(value.into()))
    }

    pub(crate) fn malformed_wire_timestamp<T: Into<BoxedError>>(source: T) -> Self {
        Self::new(ErrorKind::MalformedWireTimestamp(source.into()))
    }

    pub(crate) fn unexpected_type(expected: &'static str, found: &serde_json::Value) -> Self {
        Self::new(ErrorKind::UnexpectedType {
            expected,
            found: json_type(found),
        })
    }

    /// Prefixes the path with a field name.
    pub(crate) fn in_field(mut self, name: &str) -> Self {
        self.path = match self.path.as_str() {
            "" => name.to_string(),
            p if p.starts_with('[') || p.starts_with('{') => format!("{name}{p}"),
            p => format!("{name}.{p}"),
        };
        self
    }

    /// Prefixes the path with the position of an element in a repeated field.
    pub(crate) fn in_element(mut self, index: usize) -> Self {
        self.path = match self.path.as_str() {
            "" => format!("[{index}]"),
            p if p.starts_with('[') || p.starts_with('{') => format!("[{index}]{p}"),
            p => format!("[{index}].{p}"),
        };
        self
    }

    /// Prefixes the path with the key of an entry in a map field.
    pub(crate) fn in_entry(mut self, key: &str) -> Self {
        self.path = match self.path.as_str() {
            "" => format!("{{{key:?}}}"),
            p if p.starts_with('[') || p.starts_with('{') => format!("{{{key:?}}}{p}"),
            p => format!("{{{key:?}}}.{p}"),
        };
        self
    }

    /// The kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The path of the field where the error was detected.
    ///
    /// This is empty for errors returned by the scalar transcoders.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The text is not valid padded base64.
    pub fn is_malformed_wire_text(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedWireText(_))
    }

    /// The string is not a decimal integer in range.
    pub fn is_malformed_wire_integer(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedWireInteger(_))
    }

    /// The string is not an RFC 3339 timestamp in range.
    pub fn is_malformed_wire_timestamp(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedWireTimestamp(_))
    }

    /// The JSON type of some field does not match its declared shape.
    pub fn is_unexpected_type(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedType { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.kind);
        }
        write!(f, "cannot transcode field `{}`: {}", self.path, self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

fn json_type(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
