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

//! Handling of missing and malformed path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required, and must match the resource name format expected by the method.
//! The clients return an error, without sending the request, when a
//! parameter is missing or does not match.

use crate::Result;

/// A segment in a resource name template.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Matches the literal text.
    Literal(&'static str),
    /// Matches one or more characters, excluding `/`.
    SingleWildcard,
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
    #[error("parameter {name} should match {template}, found {value:?}")]
    MismatchedParameter {
        name: String,
        value: String,
        template: String,
    },
}

/// Returns the error for a missing parameter.
pub fn missing(name: &str) -> crate::error::Error {
    crate::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Converts an optional parameter into a required one.
///
/// # Example
/// ```
/// # use google_rest_gax::path_parameter::required;
/// let session = Some("projects/p/instances/i/databases/d/sessions/s");
/// assert!(required(session, "session").is_ok());
/// let err = required(None::<&str>, "session").unwrap_err();
/// assert!(err.is_binding());
/// ```
pub fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| missing(name))
}

/// Verifies `value` matches `template`, and returns it.
///
/// # Example
/// ```
/// # use google_rest_gax::path_parameter::{Segment, matching};
/// const DATABASE: &[Segment] = &[
///     Segment::Literal("projects/"),
///     Segment::SingleWildcard,
///     Segment::Literal("/instances/"),
///     Segment::SingleWildcard,
///     Segment::Literal("/databases/"),
///     Segment::SingleWildcard,
/// ];
/// let got = matching("projects/p/instances/i/databases/d", "database", DATABASE)?;
/// assert_eq!(got, "projects/p/instances/i/databases/d");
/// let err = matching("projects/p/databases/d", "database", DATABASE).unwrap_err();
/// assert!(err.is_binding());
/// # Ok::<(), google_rest_gax::error::Error>(())
/// ```
pub fn matching<'a>(value: &'a str, name: &str, template: &[Segment]) -> Result<&'a str> {
    if value.is_empty() {
        return Err(missing(name));
    }
    try_match(value, template).ok_or_else(|| {
        crate::error::Error::binding(Error::MismatchedParameter {
            name: name.to_string(),
            value: value.to_string(),
            template: format_template(template),
        })
    })
}

/// Returns `value` if it matches `template`.
pub fn try_match<'a>(value: &'a str, template: &[Segment]) -> Option<&'a str> {
    let mut rest = value;
    for segment in template {
        rest = match segment {
            Segment::Literal(lit) => rest.strip_prefix(lit)?,
            Segment::SingleWildcard => {
                let end = rest.find('/').unwrap_or(rest.len());
                if end == 0 {
                    return None;
                }
                &rest[end..]
            }
        };
    }
    rest.is_empty().then_some(value)
}

fn format_template(template: &[Segment]) -> String {
    template
        .iter()
        .map(|s| match s {
            Segment::Literal(lit) => *lit,
            Segment::SingleWildcard => "*",
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    const PROJECT: &[Segment] = &[Segment::Literal("projects/"), Segment::SingleWildcard];
    const SESSION: &[Segment] = &[
        Segment::Literal("projects/"),
        Segment::SingleWildcard,
        Segment::Literal("/instances/"),
        Segment::SingleWildcard,
        Segment::Literal("/databases/"),
        Segment::SingleWildcard,
        Segment::Literal("/sessions/"),
        Segment::SingleWildcard,
    ];

    #[test_case("projects/my-project", Some("projects/my-project"))]
    #[test_case("", None)]
    #[test_case("projects/", None)]
    #[test_case("projects/my-project/", None)]
    #[test_case("projects/my-project/locations/my-location", None)]
    fn try_match_project(input: &str, expected: Option<&str>) {
        assert_eq!(try_match(input, PROJECT), expected);
    }

    #[test_case("projects/p/instances/i/databases/d/sessions/s", true)]
    #[test_case("projects/p/instances/i/databases/d/sessions/", false)]
    #[test_case("projects/p/instances/i/databases/d", false)]
    #[test_case("projects/p/instances//databases/d/sessions/s", false)]
    fn try_match_session(input: &str, want: bool) {
        assert_eq!(try_match(input, SESSION).is_some(), want, "{input}");
    }

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }

    #[test]
    fn required() {
        assert_eq!(super::required(Some(42), "answer").ok(), Some(42));
        let e = super::required(None::<i32>, "answer").unwrap_err();
        assert!(e.is_binding(), "{e:?}");
    }

    #[test]
    fn matching_empty_is_missing() {
        let e = matching("", "session", SESSION).unwrap_err();
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "session"),
            "{e:?}"
        );
    }

    #[test]
    fn matching_mismatch() {
        let e = matching("projects/p", "session", SESSION).unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(
            fmt.contains("projects/*/instances/*/databases/*/sessions/*"),
            "{fmt}"
        );
        assert!(fmt.contains("projects/p"), "{fmt}");
    }
}
