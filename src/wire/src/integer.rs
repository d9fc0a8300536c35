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

//! Transcode integers that do not fit in a JSON number.
//!
//! JSON numbers are IEEE 754 double precision floating point values, with
//! only 53 bits of mantissa. The services send 64-bit counters (row counts,
//! sequence numbers, sizes in bytes) as strings of decimal digits. In memory
//! we represent them as `i128`, which holds both the `int64` and `uint64`
//! ranges without loss.
//!
//! The services accept both strings and numbers for these fields, and some
//! (rarely) send numbers. We always send strings, and we accept JSON integer
//! numbers when reading.

use crate::Error;

/// Formats an integer as a wire integer.
///
/// The output has no leading zeros, no separators, and a leading `-` only
/// for negative values.
///
/// # Example
/// ```
/// # use google_rest_wire::integer;
/// assert_eq!(integer::to_wire(9_007_199_254_740_993), "9007199254740993");
/// assert_eq!(integer::to_wire(-42), "-42");
/// ```
pub fn to_wire(value: i128) -> String {
    value.to_string()
}

/// Parses a wire integer.
///
/// The only accepted format is an optional `-` followed by one or more ASCII
/// digits. Note that `str::parse` also accepts a leading `+`, we do not.
///
/// # Example
/// ```
/// # use google_rest_wire::integer;
/// assert_eq!(integer::from_wire("9223372036854775807")?, i64::MAX as i128);
/// assert!(integer::from_wire("12a3").is_err());
/// # Ok::<(), google_rest_wire::Error>(())
/// ```
pub fn from_wire(value: &str) -> Result<i128, Error> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed_wire_integer(value));
    }
    value
        .parse::<i128>()
        .map_err(|_| Error::malformed_wire_integer(value))
}

/// Converts a JSON value holding a wire integer into its native form.
///
/// Strings must satisfy [from_wire]. Numbers must be integers, a JSON number
/// with a fractional part or exponent is rejected.
pub(crate) fn from_json(value: &serde_json::Value) -> Result<i128, Error> {
    use serde_json::Value;
    match value {
        Value::String(s) => from_wire(s),
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .ok_or_else(|| Error::malformed_wire_integer(n.to_string())),
        v => Err(Error::unexpected_type("a wire integer", v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(-1)]
    #[test_case(1_i128 << 53; "2^53")]
    #[test_case((1_i128 << 53) - 1; "2^53 - 1")]
    #[test_case(9223372036854775807; "int64 max")]
    #[test_case(-9223372036854775808; "int64 min")]
    #[test_case(u64::MAX as i128; "uint64 max")]
    fn roundtrip(input: i128) -> Result {
        let wire = to_wire(input);
        let got = from_wire(&wire)?;
        assert_eq!(got, input, "wire={wire}");
        Ok(())
    }

    #[test_case(0, "0")]
    #[test_case(-1, "-1")]
    #[test_case(1_i128 << 60, "1152921504606846976")]
    #[test_case(i64::MIN as i128, "-9223372036854775808")]
    fn canonical_format(input: i128, want: &str) {
        assert_eq!(to_wire(input), want);
    }

    #[test_case("12a3")]
    #[test_case("")]
    #[test_case("-")]
    #[test_case("+5")]
    #[test_case("--5")]
    #[test_case(" 5")]
    #[test_case("5 ")]
    #[test_case("1,000")]
    #[test_case("1_000")]
    #[test_case("1e5")]
    #[test_case("2.0")]
    #[test_case("0x10")]
    #[test_case("٣"; "non ascii digit")]
    #[test_case("1000000000000000000000000000000000000000000"; "out of range")]
    fn malformed(input: &str) {
        let err = from_wire(input).unwrap_err();
        assert!(err.is_malformed_wire_integer(), "{err:?}");
    }

    #[test]
    fn leading_zeros_are_accepted() -> Result {
        assert_eq!(from_wire("007")?, 7);
        assert_eq!(from_wire("-0")?, 0);
        Ok(())
    }

    #[test_case(json!("123"), 123)]
    #[test_case(json!(123), 123)]
    #[test_case(json!(-123), -123)]
    #[test_case(json!(u64::MAX), u64::MAX as i128)]
    #[test_case(json!(i64::MIN), i64::MIN as i128)]
    fn from_json_ok(input: serde_json::Value, want: i128) -> Result {
        assert_eq!(from_json(&input)?, want);
        Ok(())
    }

    #[test]
    fn from_json_errors() {
        let err = from_json(&json!(2.5)).unwrap_err();
        assert!(err.is_malformed_wire_integer(), "{err:?}");
        let err = from_json(&json!("2.5")).unwrap_err();
        assert!(err.is_malformed_wire_integer(), "{err:?}");
        let err = from_json(&json!(true)).unwrap_err();
        assert!(err.is_unexpected_type(), "{err:?}");
        let err = from_json(&json!({})).unwrap_err();
        assert!(err.is_unexpected_type(), "{err:?}");
    }
}
