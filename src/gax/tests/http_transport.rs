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

//! Verify the reqwest-based requester sends the expected HTTP requests and
//! converts the HTTP responses as expected.
//!
//! The tests use a local HTTP server with one expectation per test.

#[cfg(test)]
mod tests {
    use google_rest_gax::api_header::{GAPIC, XGoogApiClient};
    use google_rest_gax::credentials::{AccessToken, ApiKey, Credentials, CredentialsProvider};
    use google_rest_gax::error::CredentialsError;
    use google_rest_gax::error::rpc::Code;
    use google_rest_gax::http::ReqwestRequester;
    use google_rest_gax::options::ClientConfig;
    use google_rest_gax::query_parameter::QueryParameters;
    use google_rest_gax::request::{HttpRequest, Requester};
    use http::HeaderMap;
    use http::header::{HeaderName, HeaderValue};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::error::Error as _;

    type Result<T> = anyhow::Result<T>;
    type AuthResult<T> = std::result::Result<T, CredentialsError>;

    mockall::mock! {
        #[derive(Debug)]
        Credentials {}

        impl CredentialsProvider for Credentials {
            async fn headers(&self) -> AuthResult<HeaderMap>;
        }
    }

    const INFO: XGoogApiClient = XGoogApiClient {
        name: "google-rest-gax-tests",
        version: "1.2.3",
        library_type: GAPIC,
    };

    async fn requester(server: &Server, config: ClientConfig) -> Result<ReqwestRequester> {
        let endpoint = format!("http://{}", server.addr());
        let requester = ReqwestRequester::new(config, &endpoint, INFO).await?;
        Ok(requester)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn success() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/sessions/s:commit"),
                request::query(url_decoded(contains(("pageSize", "10")))),
                request::query(url_decoded(contains(("readOptions.strong", "true")))),
                request::body(json_decoded(eq(json!({"transactionId": "AQID"})))),
            ])
            .respond_with(json_encoded(json!({
                "commitTimestamp": "2014-10-02T15:01:23.045Z"
            }))),
        );

        let requester = requester(&server, ClientConfig::default()).await?;
        let query = QueryParameters::new()
            .add("pageSize", &10_i32)
            .add("readOptions", &json!({"strong": true}));
        let request = HttpRequest::new(http::Method::POST, "/v1/sessions/s:commit")
            .set_query(query)
            .set_body(json!({"transactionId": "AQID"}));
        let response = requester.execute(request).await?;
        assert_eq!(
            response,
            json!({"commitTimestamp": "2014-10-02T15:01:23.045Z"})
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_content() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/v1/projects/p/instances/i/databases/d/sessions/s",
            ))
            .respond_with(status_code(204)),
        );

        let requester = requester(&server, ClientConfig::default()).await?;
        let request = HttpRequest::new(
            http::Method::DELETE,
            "/v1/projects/p/instances/i/databases/d/sessions/s",
        );
        let response = requester.execute(request).await?;
        assert_eq!(response, json!({}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn http_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/courses/c"))
                .respond_with(
                    status_code(503)
                        .insert_header("content-type", "text/plain")
                        .insert_header("x-test-only", "abc")
                        .body("try again later"),
                ),
        );

        let requester = requester(&server, ClientConfig::default()).await?;
        let request = HttpRequest::new(http::Method::GET, "/v1/courses/c");
        let err = requester.execute(request).await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        let headers = err.http_headers().expect("HTTP errors have headers");
        assert_eq!(
            headers.get("x-test-only"),
            Some(&HeaderValue::from_static("abc"))
        );
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"try again later"))
        );
        assert!(err.status().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v2/accounts/a"))
                .respond_with(
                    status_code(403)
                        .insert_header("content-type", "application/json")
                        .body(
                            json!({"error": {
                                "code": 403,
                                "message": "The caller does not have permission",
                                "status": "PERMISSION_DENIED",
                            }})
                            .to_string(),
                        ),
                ),
        );

        let requester = requester(&server, ClientConfig::default()).await?;
        let request = HttpRequest::new(http::Method::GET, "/v2/accounts/a");
        let err = requester.execute(request).await.unwrap_err();
        let status = err.status().expect("error envelopes become a status");
        assert_eq!(status.code, Code::PermissionDenied);
        assert_eq!(status.message, "The caller does not have permission");
        assert_eq!(err.http_status_code(), Some(403), "{err:?}");
        assert!(err.http_headers().is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error_without_status() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/courses/c"))
                .respond_with(
                    status_code(503)
                        .insert_header("content-type", "application/json")
                        .body(json!({"error": {"code": 503, "message": "backend unavailable"}}).to_string()),
                ),
        );

        let requester = requester(&server, ClientConfig::default()).await?;
        let request = HttpRequest::new(http::Method::GET, "/v1/courses/c");
        let err = requester.execute(request).await.unwrap_err();
        let status = err.status().expect("error envelopes become a status");
        assert_eq!(status.code, Code::Unavailable);
        assert_eq!(status.message, "backend unavailable");
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn auth_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/courses"),
                request::headers(contains(("auth-key-1", "auth-value-1"))),
                request::headers(contains(("auth-key-2", "auth-value-2"))),
            ])
            .respond_with(json_encoded(json!({"courses": []}))),
        );

        // Use a mock to verify multiple headers are included, and that the
        // credentials are called exactly once.
        let mut mock = MockCredentials::new();
        let header = HeaderMap::from_iter([
            (
                HeaderName::from_static("auth-key-1"),
                HeaderValue::from_static("auth-value-1"),
            ),
            (
                HeaderName::from_static("auth-key-2"),
                HeaderValue::from_static("auth-value-2"),
            ),
        ]);
        mock.expect_headers().times(1).return_once(|| Ok(header));

        let config = ClientConfig {
            cred: Some(Credentials::from(mock)),
            ..Default::default()
        };
        let requester = requester(&server, config).await?;
        let request = HttpRequest::new(http::Method::GET, "/v1/courses");
        let response = requester.execute(request).await?;
        assert_eq!(response, json!({"courses": []}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn auth_error() -> Result<()> {
        // The request is never sent, the server does not expect any calls.
        let server = Server::run();

        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .times(1)
            .return_once(|| Err(CredentialsError::from_msg("mock error")));

        let config = ClientConfig {
            cred: Some(Credentials::from(mock)),
            ..Default::default()
        };
        let requester = requester(&server, config).await?;
        let request = HttpRequest::new(http::Method::GET, "/v1/courses");
        let err = requester.execute(request).await.unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(source.is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn access_token() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/courses"),
                request::headers(contains(("authorization", "Bearer test-only-token"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let config = ClientConfig {
            cred: Some(AccessToken::new("test-only-token").into()),
            ..Default::default()
        };
        let requester = requester(&server, config).await?;
        let request = HttpRequest::new(http::Method::GET, "/v1/courses");
        requester.execute(request).await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn api_key() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/accounts"),
                request::headers(contains(("x-goog-api-key", "test-only-key"))),
                request::headers(not(contains(key("authorization")))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let config = ClientConfig {
            cred: Some(ApiKey::new("test-only-key").into()),
            ..Default::default()
        };
        let requester = requester(&server, config).await?;
        let request = HttpRequest::new(http::Method::GET, "/v2/accounts");
        requester.execute(request).await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn telemetry_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/courses"),
                request::headers(contains((
                    "user-agent",
                    "my-app/0.1 google-rest-gax-tests/1.2.3"
                ))),
                request::headers(contains(("x-goog-api-client", matches(" gapic/1.2.3$")))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let config = ClientConfig {
            user_agent: Some("my-app/0.1".to_string()),
            ..Default::default()
        };
        let requester = requester(&server, config).await?;
        let request = HttpRequest::new(http::Method::GET, "/v1/courses");
        requester.execute(request).await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn io_error() -> Result<()> {
        // Nothing listens on this port.
        let requester =
            ReqwestRequester::new(ClientConfig::default(), "http://127.0.0.1:1", INFO).await?;
        let request = HttpRequest::new(http::Method::GET, "/v1/courses");
        let err = requester.execute(request).await.unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert!(err.http_status_code().is_none(), "{err:?}");
        Ok(())
    }
}
