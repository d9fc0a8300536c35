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

//! Google REST APIs helpers.
//!
//! This crate implements the request pipeline shared by the Google REST
//! client libraries in this workspace. The clients describe each call, and
//! [Client][client::Client] converts the request body to its wire form,
//! sends the request through a [Requester], and converts the response to its
//! native form.
//!
//! The crate also defines the types to configure the clients, the
//! authentication capability, and the error types returned by the clients.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Implements helpers to create telemetry headers.
pub mod api_header;

pub mod client;
pub mod client_builder;

/// Types and functions to authenticate requests.
///
/// The clients in this workspace do not implement any authentication flows.
/// Applications provide the authentication headers via [Credentials].
///
/// [Credentials]: crate::credentials::Credentials
pub mod credentials;

/// The core error types used by the clients.
pub mod error;

/// The default [Requester] implementation.
pub mod http;

pub mod options;

/// Defines helpers to validate path parameters.
///
/// Path parameters in the Google APIs are always required, and must match
/// the format of the resource names expected by the service.
pub mod path_parameter;

pub mod query_parameter;
pub mod request;

pub use request::{HttpRequest, Requester};
