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

//! Transcode points in time.
//!
//! In JSON, timestamps are encoded as [RFC 3339] strings, such as
//! `"2014-10-02T15:01:23.045Z"`. The services accept and return any offset,
//! but always send UTC (`Z`). We always send UTC.
//!
//! [RFC 3339]: https://www.ietf.org/rfc/rfc3339.txt

use crate::Error;
use time::format_description::well_known::Rfc3339;

/// A point in time, independent of any time zone or local calendar.
///
/// # Examples
/// ```
/// # use google_rest_wire::Timestamp;
/// let ts = Timestamp::try_from("2025-05-16T09:46:12.500Z")?;
/// assert_eq!(ts.seconds(), 1747388772);
/// assert_eq!(ts.nanos(), 500_000_000);
///
/// assert_eq!(ts, Timestamp::new(1747388772, 500_000_000)?);
/// assert_eq!(ts, Timestamp::clamp(1747388772, 500_000_000));
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// Encoded as a count of seconds and fractions of seconds at nanosecond
/// resolution, relative to the Unix epoch. The range is from
/// 0001-01-01T00:00:00Z to 9999-12-31T23:59:59.999999999Z, all the values in
/// this range can be formatted as RFC 3339 strings.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp {
    // Seconds since the Unix epoch, in
    // [Self::MIN_SECONDS, Self::MAX_SECONDS].
    seconds: i64,

    // Non-negative fractions of a second, in [0, 999_999_999]. Negative
    // seconds with fractions still count forward in time.
    nanos: i32,
}

/// Represent failures creating [Timestamp] instances.
///
/// # Example
/// ```
/// # use google_rest_wire::{Timestamp, TimestampError};
/// let ts = Timestamp::new(Timestamp::MAX_SECONDS + 2, 0);
/// assert!(matches!(ts, Err(TimestampError::OutOfRange)));
/// ```
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum TimestampError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,
}

impl Timestamp {
    const NS: i32 = 1_000_000_000;

    // Obtained via: `date +%s --date='0001-01-01T00:00:00Z'`
    /// The minimum value for the `seconds` component. Corresponds to '0001-01-01T00:00:00Z'.
    pub const MIN_SECONDS: i64 = -62135596800;

    // Obtained via: `date +%s --date='9999-12-31T23:59:59Z'`
    /// The maximum value for the `seconds` component. Corresponds to '9999-12-31T23:59:59Z'.
    pub const MAX_SECONDS: i64 = 253402300799;

    /// The minimum value for the `nanos` component.
    pub const MIN_NANOS: i32 = 0;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = Self::NS - 1;

    /// Creates a new [Timestamp] from the seconds and nanoseconds.
    ///
    /// If either value is out of range it returns an error.
    ///
    /// # Example
    /// ```
    /// # use google_rest_wire::{Timestamp, TimestampError};
    /// let ts = Timestamp::new(1747388772, 0)?;
    /// assert_eq!(String::from(ts), "2025-05-16T09:46:12Z");
    ///
    /// let ts = Timestamp::new(1747388772, 2_000_000_000);
    /// assert!(matches!(ts, Err(TimestampError::OutOfRange)));
    /// # Ok::<(), TimestampError>(())
    /// ```
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, TimestampError> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(TimestampError::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(TimestampError::OutOfRange);
        }
        Ok(Self { seconds, nanos })
    }

    /// Create a normalized, clamped [Timestamp].
    ///
    /// The function adds the nanoseconds part (with carry) to the seconds
    /// part, with saturation at the range limits.
    ///
    /// # Example
    /// ```
    /// # use google_rest_wire::Timestamp;
    /// let ts = Timestamp::clamp(1747388772, 2_000_000_000);
    /// // extra nanoseconds are carried as seconds
    /// assert_eq!(String::from(ts), "2025-05-16T09:46:14Z");
    /// ```
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let (seconds, nanos) = match nanos.cmp(&0_i32) {
            std::cmp::Ordering::Equal => (seconds, nanos),
            std::cmp::Ordering::Greater => (
                seconds.saturating_add((nanos / Self::NS) as i64),
                nanos % Self::NS,
            ),
            std::cmp::Ordering::Less => (
                seconds.saturating_sub(1 - (nanos / Self::NS) as i64),
                Self::NS + nanos % Self::NS,
            ),
        };
        if seconds < Self::MIN_SECONDS {
            return Self {
                seconds: Self::MIN_SECONDS,
                nanos: 0,
            };
        } else if seconds > Self::MAX_SECONDS {
            return Self {
                seconds: Self::MAX_SECONDS,
                nanos: 0,
            };
        }
        Self { seconds, nanos }
    }

    /// Seconds of UTC time since the Unix epoch (1970-01-01T00:00:00Z).
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Non-negative fractions of a second at nanosecond resolution.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

const NS: i128 = 1_000_000_000;

/// Formats a timestamp as a wire timestamp.
///
/// # Example
/// ```
/// # use google_rest_wire::{timestamp, Timestamp};
/// let ts = Timestamp::new(1412262083, 45_000_000)?;
/// assert_eq!(timestamp::to_wire(&ts), "2014-10-02T15:01:23.045Z");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn to_wire(value: &Timestamp) -> String {
    String::from(*value)
}

/// Parses a wire timestamp.
///
/// Accepts any RFC 3339 offset and normalizes to UTC.
///
/// # Example
/// ```
/// # use google_rest_wire::{timestamp, Timestamp};
/// let ts = timestamp::from_wire("2014-10-02T15:01:23.045Z")?;
/// assert_eq!(ts, Timestamp::new(1412262083, 45_000_000)?);
/// assert!(timestamp::from_wire("yesterday").is_err());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn from_wire(value: &str) -> Result<Timestamp, Error> {
    Timestamp::try_from(value)
}

const EXPECT_OFFSET_DATE_TIME_CONVERTS: &str = concat!(
    "converting Timestamp to time::OffsetDateTime should always succeed. ",
    "The Timestamp values are always in range."
);
const EXPECT_TIMESTAMP_FORMAT_SUCCEEDS: &str = concat!(
    "formatting a Timestamp using RFC-3339 should always succeed. ",
    "The Timestamp values are always in range, and we use a well-known constant for the format specifier."
);

/// Converts a [Timestamp] to its wire representation.
impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        let ts = time::OffsetDateTime::from_unix_timestamp_nanos(
            timestamp.seconds as i128 * NS + timestamp.nanos as i128,
        )
        .expect(EXPECT_OFFSET_DATE_TIME_CONVERTS);
        ts.format(&Rfc3339).expect(EXPECT_TIMESTAMP_FORMAT_SUCCEEDS)
    }
}

/// Converts the wire representation of a timestamp to [Timestamp].
impl TryFrom<&str> for Timestamp {
    type Error = Error;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let odt = time::OffsetDateTime::parse(value, &Rfc3339)
            .map_err(Error::malformed_wire_timestamp)?;
        let nanos_since_epoch = odt.unix_timestamp_nanos();
        let seconds = (nanos_since_epoch / NS) as i64;
        let nanos = (nanos_since_epoch % NS) as i32;
        let ts = if nanos < 0 {
            Timestamp::new(seconds - 1, Self::NS + nanos)
        } else {
            Timestamp::new(seconds, nanos)
        };
        ts.map_err(Error::malformed_wire_timestamp)
    }
}

impl TryFrom<&String> for Timestamp {
    type Error = Error;
    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Timestamp::try_from(value.as_str())
    }
}

/// Convert from [time::OffsetDateTime] to [Timestamp].
///
/// This conversion may fail if the [time::OffsetDateTime] value is out of range.
///
/// # Example
/// ```
/// # use google_rest_wire::Timestamp;
/// use time::macros::datetime;
/// let ts = Timestamp::try_from(datetime!(2025-05-16 09:46:12 UTC))?;
/// assert_eq!(String::from(ts), "2025-05-16T09:46:12Z");
/// # Ok::<(), anyhow::Error>(())
/// ```
impl TryFrom<time::OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: time::OffsetDateTime) -> Result<Self, Self::Error> {
        let seconds = value.unix_timestamp();
        let nanos = (value.unix_timestamp_nanos() - seconds as i128 * NS) as i32;
        Self::new(seconds, nanos)
    }
}

/// Convert from [Timestamp] to [OffsetDateTime][time::OffsetDateTime].
impl From<Timestamp> for time::OffsetDateTime {
    fn from(value: Timestamp) -> Self {
        time::OffsetDateTime::from_unix_timestamp_nanos(
            value.seconds as i128 * NS + value.nanos as i128,
        )
        .expect(EXPECT_OFFSET_DATE_TIME_CONVERTS)
    }
}

/// Converts from [chrono::DateTime] to [Timestamp].
///
/// This conversion may fail if the [chrono::DateTime] value is out of range.
#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
impl TryFrom<chrono::DateTime<chrono::Utc>> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: chrono::DateTime<chrono::Utc>) -> Result<Self, Self::Error> {
        // chrono uses nanos >= 1e9 to represent leap seconds.
        let nanos = i32::try_from(value.timestamp_subsec_nanos())
            .map_err(|_| TimestampError::OutOfRange)?;
        Timestamp::new(value.timestamp(), nanos)
    }
}

/// Converts from [Timestamp] to [chrono::DateTime].
#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
impl TryFrom<Timestamp> for chrono::DateTime<chrono::Utc> {
    type Error = TimestampError;
    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        chrono::DateTime::from_timestamp(value.seconds, value.nanos as u32)
            .ok_or(TimestampError::OutOfRange)
    }
}
