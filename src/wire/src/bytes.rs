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

//! Transcode byte sequences.
//!
//! In JSON, `bytes` fields are encoded as base64 strings using the standard
//! alphabet (`A-Z`, `a-z`, `0-9`, `+`, `/`) with `=` padding, as defined in
//! [RFC 4648]. The services never use the URL-safe alphabet for these fields,
//! and the encoded text never contains line breaks.
//!
//! [RFC 4648]: https://www.rfc-editor.org/rfc/rfc4648#section-4

use crate::Error;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encodes a byte sequence as wire text.
///
/// # Example
/// ```
/// # use google_rest_wire::bytes;
/// assert_eq!(bytes::encode([0x01, 0x02, 0x03]), "AQID");
/// assert_eq!(bytes::encode(b"f"), "Zg==");
/// assert_eq!(bytes::encode(b""), "");
/// ```
pub fn encode<T: AsRef<[u8]>>(input: T) -> String {
    STANDARD.encode(input)
}

/// Decodes wire text into a byte sequence.
///
/// Fails if the text length is not a multiple of 4, if it contains
/// characters outside the alphabet, or if the padding is not canonical.
///
/// # Example
/// ```
/// # use google_rest_wire::bytes;
/// let got = bytes::decode("AQID")?;
/// assert_eq!(&got[..], &[0x01, 0x02, 0x03]);
/// assert!(bytes::decode("AQI").is_err());
/// # Ok::<(), google_rest_wire::Error>(())
/// ```
pub fn decode(input: &str) -> Result<bytes::Bytes, Error> {
    if input.len() % 4 != 0 {
        return Err(Error::malformed_wire_text(format!(
            "length {} is not a multiple of 4",
            input.len()
        )));
    }
    STANDARD
        .decode(input)
        .map(bytes::Bytes::from)
        .map_err(Error::malformed_wire_text)
}
