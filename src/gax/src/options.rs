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

//! Client configuration shared by all the transports.

use crate::credentials::Credentials;

/// The client configuration for [crate::http::ReqwestRequester].
pub type ClientConfig = crate::client_builder::internal::ClientConfig<Credentials>;

/// Setting this environment variable to `true` enables tracing in all the
/// clients, even if they were not configured with
/// [with_tracing()][crate::client_builder::ClientBuilder::with_tracing].
pub const LOGGING_VAR: &str = "GOOGLE_REST_RUST_LOGGING";

/// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}
