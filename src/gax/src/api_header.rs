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

//! Telemetry header helpers.

/// The name of the telemetry header.
pub const X_GOOG_API_CLIENT: &str = "x-goog-api-client";

/// Describes the client library making a request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XGoogApiClient {
    /// The name of the client library, e.g. `google-rest-apis`.
    pub name: &'static str,
    /// The library type, one of [GAPIC] or [GCCL].
    pub library_type: &'static str,
    /// The version of the client library.
    pub version: &'static str,
}

/// Generated client libraries.
pub const GAPIC: &str = "gapic";
/// Hand-crafted client libraries.
pub const GCCL: &str = "gccl";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// The value for the `x-goog-api-client` header.
    pub fn header_value(&self) -> String {
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(build_info::RUSTC_VERSION);
        let gax_version = build_info::PKG_VERSION;

        format!(
            "gl-rust/{rustc_version} gax/{gax_version} rest/{gax_version}-reqwest {}/{}",
            self.library_type, self.version
        )
    }

    /// The default value for the `user-agent` header.
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(" ")
            .filter_map(|v| v.find('/').map(|i| v.split_at(i)))
            .map(|(k, v)| (k, &v[1..]))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn format() {
        let header = XGoogApiClient {
            name: "unused",
            version: "1.2.3",
            library_type: GAPIC,
        };
        let fields = breakdown(header.header_value().as_str());

        let got = fields.get(GAPIC).map(String::to_owned);
        assert_eq!(got.as_deref(), Some("1.2.3"));

        let got = fields.get("gax").map(String::to_owned);
        assert_eq!(got.as_deref(), Some(build_info::PKG_VERSION));

        let got = fields.get("rest");
        assert!(got.is_some(), "{fields:?}");

        let got = fields.get("gl-rust").map(String::to_owned);
        let want = build_info::RUSTC_VERSION;
        assert!(
            got.as_ref()
                .map(|s| want.contains(s) && !s.is_empty())
                .unwrap_or(false),
            "mismatched rustc version {want} and {got:?}"
        );
    }

    #[test]
    fn user_agent() {
        let header = XGoogApiClient {
            name: "google-rest-apis",
            version: "1.2.3",
            library_type: GAPIC,
        };
        assert_eq!(header.user_agent(), "google-rest-apis/1.2.3");
    }
}
