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

/// Implements a client for the Cloud Spanner API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_rest_apis::spanner::client::Spanner;
/// let client = Spanner::builder().build().await?;
/// // use `client` to make requests to the Cloud Spanner API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Spanner` use the `with_*` methods in the type returned
/// by [builder()][Spanner::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://spanner.googleapis.com`). Applications using regional
///   endpoints, or the Cloud Spanner emulator, may want to override this
///   default.
/// * [with_credentials()]: by default this client sends requests without
///   authentication. Applications provide the authentication headers using
///   this function.
///
/// # Pooling and Cloning
///
/// `Spanner` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Spanner` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [with_endpoint()]: ClientBuilder::with_endpoint
/// [with_credentials()]: ClientBuilder::with_credentials
#[derive(Debug)]
pub struct Spanner<R = ReqwestRequester> {
    inner: Arc<Client<R>>,
}

impl<R> Clone for Spanner<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// A builder for [Spanner].
///
/// ```
/// # tokio_test::block_on(async {
/// # use google_rest_apis::spanner::client::Spanner;
/// let builder = Spanner::builder();
/// let client = builder
///     .with_endpoint("https://spanner.googleapis.com")
///     .build().await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<Factory, gax::credentials::Credentials>;

#[doc(hidden)]
pub struct Factory;
impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = Spanner;
    type Credentials = gax::credentials::Credentials;
    async fn build(
        self,
        config: gax::options::ClientConfig,
    ) -> gax::client_builder::Result<Self::Client> {
        Self::Client::new(config).await
    }
}

impl Spanner {
    /// Returns a builder for [Spanner].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_rest_apis::spanner::client::Spanner;
    /// let client = Spanner::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
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
        let inner = Client::new(requester, "spanner").with_tracing(tracing);
        Ok(Self {
            inner: Arc::new(inner),
        })
    }
}

impl<R> Spanner<R>
where
    R: Requester,
{
    /// Creates a new client from the provided requester.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_requester(requester: R) -> Self {
        Self {
            inner: Arc::new(Client::new(requester, "spanner")),
        }
    }

    /// Creates a new session.
    ///
    /// # Example
    /// ```
    /// # use google_rest_apis::spanner::client::Spanner;
    /// # use google_rest_apis::{Record, Value};
    /// # async fn sample(client: &Spanner) -> anyhow::Result<()> {
    /// let session = client
    ///     .create_session("projects/my-project/instances/my-instance/databases/my-db")
    ///     .set_session(Record::new().set("labels", serde_json::json!({"env": "test"})))
    ///     .send()
    ///     .await?;
    /// println!("created {:?} at {:?}", session.get("name"), session.get("createTime"));
    /// # Ok(()) }
    /// ```
    pub fn create_session<T: Into<String>>(&self, database: T) -> builder::CreateSession<R> {
        builder::CreateSession::new(self.inner.clone()).set_database(database)
    }

    /// Gets a session.
    pub fn get_session<T: Into<String>>(&self, name: T) -> builder::GetSession<R> {
        builder::GetSession::new(self.inner.clone()).set_name(name)
    }

    /// Lists all the sessions in a database.
    pub fn list_sessions<T: Into<String>>(&self, database: T) -> builder::ListSessions<R> {
        builder::ListSessions::new(self.inner.clone()).set_database(database)
    }

    /// Begins a new transaction.
    ///
    /// The response contains the transaction `id`, as bytes.
    pub fn begin_transaction<T: Into<String>>(&self, session: T) -> builder::BeginTransaction<R> {
        builder::BeginTransaction::new(self.inner.clone()).set_session(session)
    }

    /// Commits a transaction.
    ///
    /// # Example
    /// ```
    /// # use google_rest_apis::spanner::client::Spanner;
    /// # use google_rest_apis::Value;
    /// # async fn sample(client: &Spanner, id: bytes::Bytes) -> anyhow::Result<()> {
    /// let response = client
    ///     .commit("projects/p/instances/i/databases/d/sessions/s")
    ///     .set_transaction_id(id)
    ///     .set_return_commit_stats(true)
    ///     .send()
    ///     .await?;
    /// let commit_time = response.get("commitTimestamp").and_then(Value::as_timestamp);
    /// println!("committed at {commit_time:?}");
    /// # Ok(()) }
    /// ```
    pub fn commit<T: Into<String>>(&self, session: T) -> builder::Commit<R> {
        builder::Commit::new(self.inner.clone()).set_session(session)
    }

    /// Rolls back a transaction.
    pub fn rollback<T: Into<String>>(&self, session: T) -> builder::Rollback<R> {
        builder::Rollback::new(self.inner.clone()).set_session(session)
    }

    /// Executes a SQL statement, returning all the results in a single reply.
    pub fn execute_sql<T: Into<String>>(&self, session: T) -> builder::ExecuteSql<R> {
        builder::ExecuteSql::new(self.inner.clone()).set_session(session)
    }

    /// Gets the metadata of a backup.
    pub fn get_backup<T: Into<String>>(&self, name: T) -> builder::GetBackup<R> {
        builder::GetBackup::new(self.inner.clone()).set_name(name)
    }
}
