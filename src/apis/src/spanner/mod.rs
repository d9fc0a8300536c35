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

//! Cloud Spanner API (`v1`).
//!
//! Cloud Spanner is a managed, mission-critical, globally consistent and
//! scalable relational database service. This module implements the session,
//! transaction, and query methods of the data plane, and reading backups.
//!
//! Transaction ids, resume tokens, and other opaque tokens are bytes fields.
//! Commit timestamps and read timestamps are timestamp fields. Row counts and
//! sequence numbers are 64-bit integer fields.

pub mod builder;
pub mod client;
pub mod model;

const DEFAULT_HOST: &str = "https://spanner.googleapis.com";
