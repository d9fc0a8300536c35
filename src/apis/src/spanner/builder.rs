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

//! Request builders for [Spanner][super::client::Spanner].
//!
//! Each method in the client returns a builder. Use the `set_*` functions to
//! populate the request, and then call `send()` to make the request.

use super::model;
use gax::Result;
use gax::client::Client;
use gax::path_parameter::{Segment, matching};
use gax::query_parameter::QueryParameters;
use gax::request::Requester;
use std::sync::Arc;
use wire::{Record, Value};

const DATABASE: &[Segment] = &[
    Segment::Literal("projects/"),
    Segment::SingleWildcard,
    Segment::Literal("/instances/"),
    Segment::SingleWildcard,
    Segment::Literal("/databases/"),
    Segment::SingleWildcard,
];

const SESSION: &[Segment] = &[
    Segment::Literal("projects/"),
    Segment::SingleWildcard,
    Segment::Literal("/instances/"),
    Segment::SingleWildcard,
    Segment::Literal("/databases/"),
    Segment::SingleWildcard,
    Segment::Literal("/sessions/"),
    Segment::SingleWildcard,
];

const BACKUP: &[Segment] = &[
    Segment::Literal("projects/"),
    Segment::SingleWildcard,
    Segment::Literal("/instances/"),
    Segment::SingleWildcard,
    Segment::Literal("/backups/"),
    Segment::SingleWildcard,
];

/// The request builder for [Spanner::create_session][super::client::Spanner::create_session].
#[derive(Debug)]
pub struct CreateSession<R> {
    inner: Arc<Client<R>>,
    database: String,
    session: Option<Record>,
}

impl<R: Requester> CreateSession<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            database: String::new(),
            session: None,
        }
    }

    /// Sets the database, in `projects/*/instances/*/databases/*` format.
    pub fn set_database<T: Into<String>>(mut self, v: T) -> Self {
        self.database = v.into();
        self
    }

    /// Sets the initial values for the session, such as its labels.
    pub fn set_session(mut self, v: Record) -> Self {
        self.session = Some(v);
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let database = matching(&self.database, "database", DATABASE)?;
        let path = format!("/v1/{database}/sessions");
        let body = Record::new().set("session", self.session.unwrap_or_default());
        self.inner
            .call(
                http::Method::POST,
                path,
                QueryParameters::new(),
                Some((&body, &model::CREATE_SESSION_REQUEST)),
                &model::SESSION,
            )
            .await
    }
}

/// The request builder for [Spanner::get_session][super::client::Spanner::get_session].
#[derive(Debug)]
pub struct GetSession<R> {
    inner: Arc<Client<R>>,
    name: String,
}

impl<R: Requester> GetSession<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            name: String::new(),
        }
    }

    /// Sets the session name.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let name = matching(&self.name, "name", SESSION)?;
        self.inner
            .call(
                http::Method::GET,
                format!("/v1/{name}"),
                QueryParameters::new(),
                None,
                &model::SESSION,
            )
            .await
    }
}

/// The request builder for [Spanner::list_sessions][super::client::Spanner::list_sessions].
///
/// The service returns the sessions in pages. Use the `nextPageToken` field
/// of the response with [set_page_token][ListSessions::set_page_token] to
/// fetch the next page.
#[derive(Debug)]
pub struct ListSessions<R> {
    inner: Arc<Client<R>>,
    database: String,
    page_size: Option<i32>,
    page_token: Option<String>,
    filter: Option<String>,
}

impl<R: Requester> ListSessions<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            database: String::new(),
            page_size: None,
            page_token: None,
            filter: None,
        }
    }

    /// Sets the database, in `projects/*/instances/*/databases/*` format.
    pub fn set_database<T: Into<String>>(mut self, v: T) -> Self {
        self.database = v.into();
        self
    }

    /// Sets the maximum number of sessions in each page.
    pub fn set_page_size(mut self, v: i32) -> Self {
        self.page_size = Some(v);
        self
    }

    /// Sets the page token, from the `nextPageToken` in a previous response.
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    /// Sets a filter on the session labels, e.g. `labels.env:prod`.
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let database = matching(&self.database, "database", DATABASE)?;
        let query = QueryParameters::new()
            .add("pageSize", &self.page_size)
            .add("pageToken", &self.page_token)
            .add("filter", &self.filter);
        self.inner
            .call(
                http::Method::GET,
                format!("/v1/{database}/sessions"),
                query,
                None,
                &model::LIST_SESSIONS_RESPONSE,
            )
            .await
    }
}

/// The request builder for [Spanner::begin_transaction][super::client::Spanner::begin_transaction].
#[derive(Debug)]
pub struct BeginTransaction<R> {
    inner: Arc<Client<R>>,
    session: String,
    body: Record,
}

impl<R: Requester> BeginTransaction<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            session: String::new(),
            body: Record::new(),
        }
    }

    /// Sets the session name.
    pub fn set_session<T: Into<String>>(mut self, v: T) -> Self {
        self.session = v.into();
        self
    }

    /// Sets the transaction options, in native form.
    ///
    /// # Example
    /// ```
    /// # use google_rest_apis::spanner::client::Spanner;
    /// # use google_rest_apis::{Record, Timestamp};
    /// # async fn sample(client: &Spanner) -> anyhow::Result<()> {
    /// let read_only = Record::new()
    ///     .set("minReadTimestamp", Timestamp::clamp(1412262083, 45_000_000));
    /// let transaction = client
    ///     .begin_transaction("projects/p/instances/i/databases/d/sessions/s")
    ///     .set_options(Record::new().set("readOnly", read_only))
    ///     .send()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn set_options(mut self, v: Record) -> Self {
        self.body.insert("options", v);
        self
    }

    /// Sets the common request options, such as the request tag.
    pub fn set_request_options<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.body.insert("requestOptions", Value::Json(v.into()));
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let session = matching(&self.session, "session", SESSION)?;
        self.inner
            .call(
                http::Method::POST,
                format!("/v1/{session}:beginTransaction"),
                QueryParameters::new(),
                Some((&self.body, &model::BEGIN_TRANSACTION_REQUEST)),
                &model::TRANSACTION,
            )
            .await
    }
}

/// The request builder for [Spanner::commit][super::client::Spanner::commit].
#[derive(Debug)]
pub struct Commit<R> {
    inner: Arc<Client<R>>,
    session: String,
    body: Record,
}

impl<R: Requester> Commit<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            session: String::new(),
            body: Record::new(),
        }
    }

    /// Sets the session name.
    pub fn set_session<T: Into<String>>(mut self, v: T) -> Self {
        self.session = v.into();
        self
    }

    /// Commits the transaction with this id.
    ///
    /// Clears any value set with
    /// [set_single_use_transaction][Commit::set_single_use_transaction].
    pub fn set_transaction_id<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.body.remove("singleUseTransaction");
        self.body.insert("transactionId", Value::Bytes(v.into()));
        self
    }

    /// Executes the mutations in a temporary transaction.
    ///
    /// Clears any value set with
    /// [set_transaction_id][Commit::set_transaction_id].
    pub fn set_single_use_transaction(mut self, v: Record) -> Self {
        self.body.remove("transactionId");
        self.body.insert("singleUseTransaction", v);
        self
    }

    /// Sets the mutations, as JSON values.
    pub fn set_mutations<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.body.insert("mutations", Value::Json(v.into()));
        self
    }

    /// Requests the commit statistics in the response.
    pub fn set_return_commit_stats(mut self, v: bool) -> Self {
        self.body.insert("returnCommitStats", v);
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let session = matching(&self.session, "session", SESSION)?;
        self.inner
            .call(
                http::Method::POST,
                format!("/v1/{session}:commit"),
                QueryParameters::new(),
                Some((&self.body, &model::COMMIT_REQUEST)),
                &model::COMMIT_RESPONSE,
            )
            .await
    }
}

/// The request builder for [Spanner::rollback][super::client::Spanner::rollback].
#[derive(Debug)]
pub struct Rollback<R> {
    inner: Arc<Client<R>>,
    session: String,
    transaction_id: Option<bytes::Bytes>,
}

impl<R: Requester> Rollback<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            session: String::new(),
            transaction_id: None,
        }
    }

    /// Sets the session name.
    pub fn set_session<T: Into<String>>(mut self, v: T) -> Self {
        self.session = v.into();
        self
    }

    /// Sets the id of the transaction to roll back.
    pub fn set_transaction_id<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.transaction_id = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let session = matching(&self.session, "session", SESSION)?;
        let transaction_id = gax::path_parameter::required(self.transaction_id, "transaction_id")?;
        let body = Record::new().set("transactionId", transaction_id);
        self.inner
            .call(
                http::Method::POST,
                format!("/v1/{session}:rollback"),
                QueryParameters::new(),
                Some((&body, &model::ROLLBACK_REQUEST)),
                &model::EMPTY,
            )
            .await
    }
}

/// The request builder for [Spanner::execute_sql][super::client::Spanner::execute_sql].
#[derive(Debug)]
pub struct ExecuteSql<R> {
    inner: Arc<Client<R>>,
    session: String,
    body: Record,
}

impl<R: Requester> ExecuteSql<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            session: String::new(),
            body: Record::new(),
        }
    }

    /// Sets the session name.
    pub fn set_session<T: Into<String>>(mut self, v: T) -> Self {
        self.session = v.into();
        self
    }

    /// Sets the SQL statement.
    pub fn set_sql<T: Into<String>>(mut self, v: T) -> Self {
        self.body.insert("sql", Into::<String>::into(v));
        self
    }

    /// Selects the transaction, in native form.
    ///
    /// Without a transaction the query runs in a temporary read-only
    /// transaction with strong concurrency.
    pub fn set_transaction(mut self, v: Record) -> Self {
        self.body.insert("transaction", v);
        self
    }

    /// Sets the values for the query parameters, as JSON values.
    pub fn set_params<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.body.insert("params", Value::Json(v.into()));
        self
    }

    /// Sets the types of the query parameters, as JSON values.
    pub fn set_param_types<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.body.insert("paramTypes", Value::Json(v.into()));
        self
    }

    /// Resumes a query, using the `resumeToken` from a previous result.
    pub fn set_resume_token<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.body.insert("resumeToken", Value::Bytes(v.into()));
        self
    }

    /// Sets the query mode, e.g. `PROFILE`.
    pub fn set_query_mode<T: Into<String>>(mut self, v: T) -> Self {
        self.body.insert("queryMode", Into::<String>::into(v));
        self
    }

    /// Sets the sequence number, required for DML statements.
    pub fn set_seqno(mut self, v: i64) -> Self {
        self.body.insert("seqno", Value::Integer(v.into()));
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let session = matching(&self.session, "session", SESSION)?;
        self.inner
            .call(
                http::Method::POST,
                format!("/v1/{session}:executeSql"),
                QueryParameters::new(),
                Some((&self.body, &model::EXECUTE_SQL_REQUEST)),
                &model::RESULT_SET,
            )
            .await
    }
}

/// The request builder for [Spanner::get_backup][super::client::Spanner::get_backup].
#[derive(Debug)]
pub struct GetBackup<R> {
    inner: Arc<Client<R>>,
    name: String,
}

impl<R: Requester> GetBackup<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            name: String::new(),
        }
    }

    /// Sets the backup name, in `projects/*/instances/*/backups/*` format.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let name = matching(&self.name, "name", BACKUP)?;
        self.inner
            .call(
                http::Method::GET,
                format!("/v1/{name}"),
                QueryParameters::new(),
                None,
                &model::BACKUP,
            )
            .await
    }
}
