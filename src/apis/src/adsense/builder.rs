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

//! Request builders for [AdSense][super::client::AdSense].

use super::model;
use gax::Result;
use gax::client::Client;
use gax::path_parameter::{Segment, matching};
use gax::query_parameter::QueryParameters;
use gax::request::Requester;
use std::sync::Arc;
use wire::Record;

const ACCOUNT: &[Segment] = &[Segment::Literal("accounts/"), Segment::SingleWildcard];

/// The request builder for [AdSense::get_account][super::client::AdSense::get_account].
#[derive(Debug)]
pub struct GetAccount<R> {
    inner: Arc<Client<R>>,
    name: String,
}

impl<R: Requester> GetAccount<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            name: String::new(),
        }
    }

    /// Sets the account name, in `accounts/{account}` format.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let name = matching(&self.name, "name", ACCOUNT)?;
        self.inner
            .call(
                http::Method::GET,
                format!("/v2/{name}"),
                QueryParameters::new(),
                None,
                &model::ACCOUNT,
            )
            .await
    }
}

/// The request builder for [AdSense::list_accounts][super::client::AdSense::list_accounts].
#[derive(Debug)]
pub struct ListAccounts<R> {
    inner: Arc<Client<R>>,
    page_size: Option<i32>,
    page_token: Option<String>,
}

impl<R: Requester> ListAccounts<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            page_size: None,
            page_token: None,
        }
    }

    /// Sets the maximum number of accounts in each page.
    pub fn set_page_size(mut self, v: i32) -> Self {
        self.page_size = Some(v);
        self
    }

    /// Sets the page token, from the `nextPageToken` in a previous response.
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let query = QueryParameters::new()
            .add("pageSize", &self.page_size)
            .add("pageToken", &self.page_token);
        self.inner
            .call(
                http::Method::GET,
                "/v2/accounts",
                query,
                None,
                &model::LIST_ACCOUNTS_RESPONSE,
            )
            .await
    }
}

/// The request builder for [AdSense::generate_report][super::client::AdSense::generate_report].
///
/// # Example
/// ```
/// # use google_rest_apis::adsense::client::AdSense;
/// # use google_rest_apis::Value;
/// # async fn sample(client: &AdSense) -> anyhow::Result<()> {
/// let report = client
///     .generate_report("accounts/pub-1234567890")
///     .set_date_range("CUSTOM")
///     .set_start_date(2024, 1, 1)
///     .set_end_date(2024, 1, 31)
///     .set_dimensions(["DATE"])
///     .set_metrics(["ESTIMATED_EARNINGS", "PAGE_VIEWS"])
///     .send()
///     .await?;
/// let rows = report.get("totalMatchedRows").and_then(Value::as_integer);
/// println!("rows = {rows:?}");
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct GenerateReport<R> {
    inner: Arc<Client<R>>,
    account: String,
    date_range: Option<String>,
    start_date: Option<serde_json::Value>,
    end_date: Option<serde_json::Value>,
    dimensions: Vec<String>,
    metrics: Vec<String>,
    order_by: Vec<String>,
    filters: Vec<String>,
    limit: Option<i32>,
    currency_code: Option<String>,
    reporting_time_zone: Option<String>,
    language_code: Option<String>,
}

impl<R: Requester> GenerateReport<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            account: String::new(),
            date_range: None,
            start_date: None,
            end_date: None,
            dimensions: Vec::new(),
            metrics: Vec::new(),
            order_by: Vec::new(),
            filters: Vec::new(),
            limit: None,
            currency_code: None,
            reporting_time_zone: None,
            language_code: None,
        }
    }

    /// Sets the account, in `accounts/{account}` format.
    pub fn set_account<T: Into<String>>(mut self, v: T) -> Self {
        self.account = v.into();
        self
    }

    /// Sets the date range, e.g. `LAST_7_DAYS` or `CUSTOM`.
    pub fn set_date_range<T: Into<String>>(mut self, v: T) -> Self {
        self.date_range = Some(v.into());
        self
    }

    /// Sets the start date for `CUSTOM` date ranges.
    pub fn set_start_date(mut self, year: i32, month: i32, day: i32) -> Self {
        self.start_date = Some(date(year, month, day));
        self
    }

    /// Sets the end date for `CUSTOM` date ranges.
    pub fn set_end_date(mut self, year: i32, month: i32, day: i32) -> Self {
        self.end_date = Some(date(year, month, day));
        self
    }

    /// Sets the dimensions used to group the report rows.
    pub fn set_dimensions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.dimensions = v.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the metrics in the report.
    pub fn set_metrics<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.metrics = v.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the sort order, e.g. `+DATE` or `-ESTIMATED_EARNINGS`.
    pub fn set_order_by<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.order_by = v.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the filters, e.g. `COUNTRY_NAME==United States`.
    pub fn set_filters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.filters = v.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the maximum number of rows in the report.
    pub fn set_limit(mut self, v: i32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets the currency for monetary metrics, as an ISO-4217 code.
    pub fn set_currency_code<T: Into<String>>(mut self, v: T) -> Self {
        self.currency_code = Some(v.into());
        self
    }

    /// Sets the time zone for the report, e.g. `ACCOUNT_TIME_ZONE`.
    pub fn set_reporting_time_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.reporting_time_zone = Some(v.into());
        self
    }

    /// Sets the language for the report headers, as an IETF BCP-47 tag.
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let account = matching(&self.account, "account", ACCOUNT)?;
        let query = QueryParameters::new()
            .add("dateRange", &self.date_range)
            .add("startDate", &self.start_date)
            .add("endDate", &self.end_date)
            .add("dimensions", &self.dimensions)
            .add("metrics", &self.metrics)
            .add("orderBy", &self.order_by)
            .add("filters", &self.filters)
            .add("limit", &self.limit)
            .add("currencyCode", &self.currency_code)
            .add("reportingTimeZone", &self.reporting_time_zone)
            .add("languageCode", &self.language_code);
        self.inner
            .call(
                http::Method::GET,
                format!("/v2/{account}/reports:generate"),
                query,
                None,
                &model::REPORT_RESULT,
            )
            .await
    }
}

/// The request builder for [AdSense::list_payments][super::client::AdSense::list_payments].
#[derive(Debug)]
pub struct ListPayments<R> {
    inner: Arc<Client<R>>,
    parent: String,
}

impl<R: Requester> ListPayments<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            parent: String::new(),
        }
    }

    /// Sets the account, in `accounts/{account}` format.
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let parent = matching(&self.parent, "parent", ACCOUNT)?;
        self.inner
            .call(
                http::Method::GET,
                format!("/v2/{parent}/payments"),
                QueryParameters::new(),
                None,
                &model::LIST_PAYMENTS_RESPONSE,
            )
            .await
    }
}

fn date(year: i32, month: i32, day: i32) -> serde_json::Value {
    serde_json::json!({"year": year, "month": month, "day": day})
}
