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

//! Credentials used to authenticate requests.
//!
//! The client libraries do not implement any authentication flows. Instead,
//! applications inject a [Credentials] object when they create a client. The
//! transport asks the credentials for a set of headers before each request,
//! and includes those headers in the request.
//!
//! Applications with more complex needs (e.g. refreshing OAuth tokens)
//! implement [CredentialsProvider] and convert the implementation to
//! [Credentials] using `From`.
//!
//! # Example
//! ```
//! # use google_rest_gax::credentials::{AccessToken, Credentials};
//! # tokio_test::block_on(async {
//! let credentials = Credentials::from(AccessToken::new("ya29.test-only"));
//! let headers = credentials.headers().await?;
//! assert_eq!(
//!     headers.get(http::header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
//!     Some("Bearer ya29.test-only")
//! );
//! # Ok::<(), google_rest_gax::error::CredentialsError>(()) });
//! ```

use crate::error::CredentialsError;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};
use http::HeaderMap;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, CredentialsError>;

/// The header used to send API keys.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// An implementation of [CredentialsProvider].
///
/// Represents the source of authentication headers for each request.
#[derive(Clone, Debug)]
pub struct Credentials {
    // Credentials are shared across threads and cloned with the clients that
    // hold them.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to include in the next request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// Provides the headers needed to authenticate a request.
///
/// Implement this trait to inject custom authentication, then convert the
/// implementation to [Credentials].
///
/// # Example
/// ```
/// # use google_rest_gax::credentials::{Credentials, CredentialsProvider, Result};
/// # use http::HeaderMap;
/// #[derive(Debug)]
/// struct MyCredentials;
/// impl CredentialsProvider for MyCredentials {
///     async fn headers(&self) -> Result<HeaderMap> {
///         // ... details omitted ...
///         # Ok(HeaderMap::new())
///     }
/// }
/// let credentials = Credentials::from(MyCredentials);
/// ```
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the authentication headers.
    ///
    /// The transport calls this function before each request. Implementations
    /// should cache any expensive tokens.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// Credentials that do not add any headers.
///
/// Useful for local emulators and for tests.
pub fn anonymous() -> Credentials {
    Credentials::from(AnonymousCredentials)
}

#[derive(Debug)]
struct AnonymousCredentials;

impl CredentialsProvider for AnonymousCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}

/// Credentials using a pre-obtained OAuth2 access token.
///
/// The token is sent as a `Bearer` token in the `authorization` header. The
/// token is never refreshed, once it expires the service rejects the
/// requests.
#[derive(Clone)]
pub struct AccessToken {
    token: String,
}

impl AccessToken {
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"[censored]")
            .finish()
    }
}

impl CredentialsProvider for AccessToken {
    async fn headers(&self) -> Result<HeaderMap> {
        let value = sensitive_value(format!("Bearer {}", self.token))?;
        Ok(HeaderMap::from_iter([(AUTHORIZATION, value)]))
    }
}

/// Credentials using an API key.
///
/// The key is sent in the `x-goog-api-key` header. Only some services and
/// methods accept API keys.
#[derive(Clone)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    pub fn new<T: Into<String>>(key: T) -> Self {
        Self { key: key.into() }
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey").field("key", &"[censored]").finish()
    }
}

impl CredentialsProvider for ApiKey {
    async fn headers(&self) -> Result<HeaderMap> {
        let value = sensitive_value(self.key.clone())?;
        Ok(HeaderMap::from_iter([(
            HeaderName::from_static(API_KEY_HEADER),
            value,
        )]))
    }
}

fn sensitive_value(value: String) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&value).map_err(CredentialsError::new)?;
    value.set_sensitive(true);
    Ok(value)
}
