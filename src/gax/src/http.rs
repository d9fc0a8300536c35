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

//! The [Requester] implementation based on [reqwest].

use crate::Result;
use crate::api_header::{X_GOOG_API_CLIENT, XGoogApiClient};
use crate::client_builder::Error as BuilderError;
use crate::credentials::{Credentials, anonymous};
use crate::error::Error;
use crate::request::{HttpRequest, Requester};
use http::HeaderValue;

/// Sends requests over HTTP using [reqwest].
///
/// Each request gets the telemetry headers, the `user-agent` header, and the
/// headers returned by the configured credentials.
#[derive(Clone, Debug)]
pub struct ReqwestRequester {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    api_client: HeaderValue,
    user_agent: HeaderValue,
}

impl ReqwestRequester {
    /// Creates a new requester.
    ///
    /// Uses `default_endpoint` unless the configuration overrides it. Without
    /// configured credentials the requests are not authenticated.
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
        info: XGoogApiClient,
    ) -> crate::client_builder::Result<Self> {
        let user_agent = match &config.user_agent {
            Some(prefix) => format!("{prefix} {}", info.user_agent()),
            None => info.user_agent(),
        };
        let user_agent = HeaderValue::from_str(&user_agent).map_err(BuilderError::config)?;
        let api_client =
            HeaderValue::from_str(&info.header_value()).map_err(BuilderError::config)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Ok(Self {
            inner,
            cred: config.cred.unwrap_or_else(anonymous),
            endpoint,
            api_client,
            user_agent,
        })
    }

    /// The endpoint used by this requester.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn builder(&self, request: &HttpRequest) -> reqwest::RequestBuilder {
        let builder = self.inner.request(
            request.method().clone(),
            format!("{}{}", &self.endpoint, request.path()),
        );
        let builder = match request.query() {
            [] => builder,
            query => builder.query(query),
        };
        builder
            .header(X_GOOG_API_CLIENT, self.api_client.clone())
            .header(http::header::USER_AGENT, self.user_agent.clone())
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

impl Requester for ReqwestRequester {
    async fn execute(&self, request: HttpRequest) -> Result<serde_json::Value> {
        let mut builder = self.builder(&request);
        let auth_headers = self
            .cred
            .headers()
            .await
            .map_err(Error::authentication)?;
        builder = builder.headers(auth_headers);
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        let response = builder.send().await.map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            tracing::warn!(
                status = response.status().as_u16(),
                path = request.path(),
                "request failed"
            );
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }
}

/// Converts an unsuccessful response into an error.
///
/// Responses with a Google error envelope become service errors, with the
/// HTTP status code and headers attached. Any other payload is preserved in
/// an HTTP error.
pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match crate::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response(response: reqwest::Response) -> Result<serde_json::Value> {
    let response = http::Response::from(response);
    let (_, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    // 204 No Content, and some successful deletes, have no body.
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(&body).map_err(Error::deser)
}
