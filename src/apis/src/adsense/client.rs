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

use super::builder;
use gax::client::Client;
use gax::http::ReqwestRequester;
use gax::request::Requester;
use std::sync::Arc;

/// Implements a client for the AdSense Management API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_rest_apis::adsense::client::AdSense;
/// let client = AdSense::builder().build().await?;
/// // use `client` to make requests to the AdSense Management API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Pooling and Cloning
///
/// `AdSense` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `AdSense` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Debug)]
pub struct AdSense<R = ReqwestRequester> {
    inner: Arc<Client<R>>,
}

impl<R> Clone for AdSense<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// A builder for [AdSense].
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<Factory, gax::credentials::Credentials>;

#[doc(hidden)]
pub struct Factory;
impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = AdSense;
    type Credentials = gax::credentials::Credentials;
    async fn build(
        self,
        config: gax::options::ClientConfig,
    ) -> gax::client_builder::Result<Self::Client> {
        Self::Client::new(config).await
    }
}

impl AdSense {
    /// Returns a builder for [AdSense].
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(Factory)
    }

    async fn new(config: gax::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let tracing = gax::options::tracing_enabled(&config);
        let requester = ReqwestRequester::new(
            config,
            super::DEFAULT_HOST,
            crate::info::X_GOOG_API_CLIENT,
        )
        .await?;
        let inner = Client::new(requester, "adsense").with_tracing(tracing);
        Ok(Self {
            inner: Arc::new(inner),
        })
    }
}

impl<R> AdSense<R>
where
    R: Requester,
{
    /// Creates a new client from the provided requester.
    pub fn from_requester(requester: R) -> Self {
        Self {
            inner: Arc::new(Client::new(requester, "adsense")),
        }
    }

    /// Gets information about the selected AdSense account.
    pub fn get_account<T: Into<String>>(&self, name: T) -> builder::GetAccount<R> {
        builder::GetAccount::new(self.inner.clone()).set_name(name)
    }

    /// Lists all accounts available to this user.
    pub fn list_accounts(&self) -> builder::ListAccounts<R> {
        builder::ListAccounts::new(self.inner.clone())
    }

    /// Generates an ad hoc report.
    pub fn generate_report<T: Into<String>>(&self, account: T) -> builder::GenerateReport<R> {
        builder::GenerateReport::new(self.inner.clone()).set_account(account)
    }

    /// Lists all the payments available for an account.
    pub fn list_payments<T: Into<String>>(&self, parent: T) -> builder::ListPayments<R> {
        builder::ListPayments::new(self.inner.clone()).set_parent(parent)
    }
}
