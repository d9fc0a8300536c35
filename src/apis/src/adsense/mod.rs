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

//! AdSense Management API (`v2`).
//!
//! The AdSense Management API allows publishers to access their inventory
//! and run earnings and performance reports. This module implements reading
//! accounts, generating reports, and listing payments.
//!
//! Report row counts are 64-bit integers, sent as strings on the wire.

pub mod builder;
pub mod client;
pub mod model;

const DEFAULT_HOST: &str = "https://adsense.googleapis.com";
