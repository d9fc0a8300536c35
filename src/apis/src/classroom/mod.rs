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

//! Google Classroom API (`v1`).
//!
//! Manages classes, rosters, and invitations in Google Classroom. This module
//! implements reading and creating courses, reading course work, and listing
//! student submissions.
//!
//! The Classroom API has no bytes or 64-bit integer fields in these
//! resources. The creation, update, and scheduling times are timestamps.

pub mod builder;
pub mod client;
pub mod model;

const DEFAULT_HOST: &str = "https://classroom.googleapis.com";
