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

//! The request/response pipeline.
//!
//! Service methods describe each call with a method, a path, the query
//! parameters, and an optional body. [Client::call] converts the body to its
//! wire form, sends the request using a [Requester], and converts the
//! response to its native form. Each conversion happens exactly once, the
//! application only ever sees native records.

use crate::Result;
use crate::query_parameter::QueryParameters;
use crate::request::{HttpRequest, Requester};
use tracing::Instrument;
use wire::{Record, Shape};

/// Applies the transcoding convention around a [Requester].
///
/// # Example
/// ```
/// # use google_rest_gax::Result;
/// # use google_rest_gax::client::Client;
/// # use google_rest_gax::query_parameter::QueryParameters;
/// # use google_rest_gax::request::{HttpRequest, Requester};
/// # use serde_json::json;
/// # use wire::{Field, Record, Shape, Value};
/// # #[derive(Debug)]
/// # struct Canned;
/// # impl Requester for Canned {
/// #     async fn execute(&self, _: HttpRequest) -> Result<serde_json::Value> {
/// #         Ok(json!({"id": "AQID"}))
/// #     }
/// # }
/// static TRANSACTION: Shape = Shape::new("Transaction", &[Field::bytes("id")]);
/// static REQUEST: Shape = Shape::new("BeginTransactionRequest", &[]);
/// # tokio_test::block_on(async {
/// let client = Client::new(Canned, "spanner");
/// let response = client
///     .call(
///         http::Method::POST,
///         "/v1/projects/p/instances/i/databases/d/sessions/s:beginTransaction",
///         QueryParameters::new(),
///         Some((&Record::new(), &REQUEST)),
///         &TRANSACTION,
///     )
///     .await?;
/// assert_eq!(
///     response.get("id").and_then(Value::as_bytes).map(|b| b.to_vec()),
///     Some(vec![1, 2, 3])
/// );
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct Client<R> {
    requester: R,
    service: &'static str,
    tracing: bool,
}

impl<R> Client<R>
where
    R: Requester,
{
    /// Creates a pipeline for `service` over `requester`.
    pub fn new(requester: R, service: &'static str) -> Self {
        Self {
            requester,
            service,
            tracing: false,
        }
    }

    /// Opens a span for each call when `v` is true.
    pub fn with_tracing(mut self, v: bool) -> Self {
        self.tracing = v;
        self
    }

    /// The requester used by this client.
    pub fn requester(&self) -> &R {
        &self.requester
    }

    /// Sends a request and returns the response in native form.
    ///
    /// The `body` is a native record and the shape describing it. The
    /// `response` shape describes the response body.
    pub async fn call<P>(
        &self,
        method: http::Method,
        path: P,
        query: QueryParameters,
        body: Option<(&Record, &Shape)>,
        response: &Shape,
    ) -> Result<Record>
    where
        P: Into<String>,
    {
        let path = path.into();
        if !self.tracing {
            return self.call_inner(method, path, query, body, response).await;
        }
        let span = tracing::info_span!(
            "http_request",
            method = %method,
            path = %path,
            service = self.service,
        );
        self.call_inner(method, path, query, body, response)
            .instrument(span)
            .await
    }

    async fn call_inner(
        &self,
        method: http::Method,
        path: String,
        query: QueryParameters,
        body: Option<(&Record, &Shape)>,
        response: &Shape,
    ) -> Result<Record> {
        let mut request = HttpRequest::new(method, path).set_query(query);
        if let Some((record, shape)) = body {
            tracing::debug!(shape = shape.name(), "encoding request body");
            request = request.set_body(wire::to_wire_value(record, shape)?);
        }
        let json = self.requester.execute(request).await?;
        tracing::debug!(shape = response.name(), "decoding response body");
        Ok(wire::to_native_value(json, response)?)
    }
}
