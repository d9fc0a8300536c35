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

//! The requester capability.
//!
//! The client libraries never construct HTTP requests in the service code.
//! Each call is described by an [HttpRequest], and an injected [Requester]
//! performs the exchange and returns the parsed JSON response.
//!
//! Production code uses [ReqwestRequester][crate::http::ReqwestRequester].
//! Tests can provide their own implementation to examine the requests and
//! return canned responses.

use crate::Result;
use crate::query_parameter::QueryParameters;

/// A request in wire form.
///
/// The body, if present, is already in wire form. Requesters must send it
/// unchanged.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct HttpRequest {
    method: http::Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a request without query parameters or body.
    ///
    /// The `path` is relative to the service endpoint, for example
    /// `/v1/projects/p/instances/i/databases/d/sessions`.
    pub fn new<P: Into<String>>(method: http::Method, path: P) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Sets the query parameters.
    pub fn set_query(mut self, v: QueryParameters) -> Self {
        self.query = v.into_pairs();
        self
    }

    /// Sets the body, which must be in wire form.
    pub fn set_body<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }

    pub fn method(&self) -> &http::Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters, in the order they were added.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

/// Performs a request and returns the parsed JSON response.
///
/// Implementations are responsible for the transport: the endpoint, the
/// authentication headers, the HTTP status codes, and parsing the response.
/// Responses without content are returned as an empty JSON object.
///
/// # Example
/// ```
/// # use google_rest_gax::Result;
/// # use google_rest_gax::request::{HttpRequest, Requester};
/// #[derive(Debug)]
/// struct Canned(serde_json::Value);
/// impl Requester for Canned {
///     async fn execute(&self, _request: HttpRequest) -> Result<serde_json::Value> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait Requester: std::fmt::Debug + Send + Sync {
    /// Sends `request` and returns the response body.
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<serde_json::Value>> + Send;
}

impl<T: Requester> Requester for std::sync::Arc<T> {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<serde_json::Value>> + Send {
        T::execute(self, request)
    }
}
