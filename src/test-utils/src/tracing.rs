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

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// The environment variable used to override the default filter.
pub const FILTER_VAR: &str = "GOOGLE_REST_TEST_LOG";

/// Installs a `fmt` subscriber for the current thread.
///
/// The subscriber prints the pipeline spans (`http_request`) when they open
/// and close. Set `GOOGLE_REST_TEST_LOG` to a filter directive, such as
/// `google_rest_gax=debug`, to see the transcoding events.
pub fn enable_tracing() -> ::tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_env_filter(filter())
        .finish();

    ::tracing::subscriber::set_default(subscriber)
}

fn filter() -> EnvFilter {
    #[cfg(feature = "log-integration-tests")]
    let default = ::tracing::Level::INFO;
    #[cfg(not(feature = "log-integration-tests"))]
    let default = ::tracing::Level::WARN;
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(FILTER_VAR)
        .from_env_lossy()
}
