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

//! Google REST Client Libraries for Rust - Spanner, Classroom, and AdSense
//!
//! This crate contains thin clients for a representative slice of three
//! Google REST APIs:
//! - [Cloud Spanner] (`v1`), in the [spanner] module.
//! - [Google Classroom] (`v1`), in the [classroom] module.
//! - [AdSense Management] (`v2`), in the [adsense] module.
//!
//! The clients accept and return [Record] values in native form: bytes
//! fields hold [bytes::Bytes], 64-bit integer fields hold `i128`, and
//! timestamp fields hold [Timestamp]. The conversion to and from the JSON
//! wire form happens inside the clients, exactly once per request and
//! response.
//!
//! # Example
//! ```no_run
//! # use google_rest_apis::spanner::client::Spanner;
//! # use google_rest_apis::Value;
//! # tokio_test::block_on(async {
//! let client = Spanner::builder().build().await?;
//! let session = "projects/p/instances/i/databases/d/sessions/s";
//! let transaction = client.begin_transaction(session).send().await?;
//! let id = transaction.get("id").and_then(Value::as_bytes);
//! println!("transaction id = {id:?}");
//! # anyhow::Result::<()>::Ok(()) });
//! ```
//!
//! [Cloud Spanner]: https://cloud.google.com/spanner
//! [Google Classroom]: https://developers.google.com/classroom
//! [AdSense Management]: https://developers.google.com/adsense/management

pub use gax::Result;
pub use gax::error::Error;
pub use wire::{Record, Timestamp, Value};

pub mod adsense;
pub mod classroom;
pub mod spanner;

mod info {
    use gax::api_header::{GAPIC, XGoogApiClient};

    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub(crate) const X_GOOG_API_CLIENT: XGoogApiClient = XGoogApiClient {
        name: NAME,
        version: VERSION,
        library_type: GAPIC,
    };
}
