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

/// Implements a client for the Google Classroom API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_rest_apis::classroom::client::Classroom;
/// let client = Classroom::builder().build().await?;
/// // use `client` to make requests to the Google Classroom API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Classroom` use the `with_*` methods in the type returned
/// by [builder()][Classroom::builder]. Most applications need to provide
/// [credentials][ClientBuilder::with_credentials], the Classroom API
/// requires OAuth 2.0 access tokens for all the methods.
///
/// # Pooling and Cloning
///
/// `Classroom` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Classroom` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Debug)]
pub struct Classroom<R = ReqwestRequester> {
    inner: Arc<Client<R>>,
}

impl<R> Clone for Classroom<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// A builder for [Classroom].
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<Factory, gax::credentials::Credentials>;

#[doc(hidden)]
pub struct Factory;
impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = Classroom;
    type Credentials = gax::credentials::Credentials;
    async fn build(
        self,
        config: gax::options::ClientConfig,
    ) -> gax::client_builder::Result<Self::Client> {
        Self::Client::new(config).await
    }
}

impl Classroom {
    /// Returns a builder for [Classroom].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_rest_apis::classroom::client::Classroom;
    /// use gax::credentials::AccessToken;
    /// let client = Classroom::builder()
    ///     .with_credentials(AccessToken::new("my-access-token"))
    ///     .build()
    ///     .await?;
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
        let inner = Client::new(requester, "classroom").with_tracing(tracing);
        Ok(Self {
            inner: Arc::new(inner),
        })
    }
}

impl<R> Classroom<R>
where
    R: Requester,
{
    /// Creates a new client from the provided requester.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_requester(requester: R) -> Self {
        Self {
            inner: Arc::new(Client::new(requester, "classroom")),
        }
    }

    /// Returns a course.
    pub fn get_course<T: Into<String>>(&self, id: T) -> builder::GetCourse<R> {
        builder::GetCourse::new(self.inner.clone()).set_id(id)
    }

    /// Returns a list of courses that the requesting user is permitted to view.
    ///
    /// # Example
    /// ```
    /// # use google_rest_apis::classroom::client::Classroom;
    /// # use google_rest_apis::Value;
    /// # async fn sample(client: &Classroom) -> anyhow::Result<()> {
    /// let mut page_token = None::<String>;
    /// loop {
    ///     let mut builder = client.list_courses().set_course_states(["ACTIVE"]);
    ///     if let Some(token) = page_token.take() {
    ///         builder = builder.set_page_token(token);
    ///     }
    ///     let page = builder.send().await?;
    ///     println!("courses = {:?}", page.get("courses"));
    ///     match page.get("nextPageToken").and_then(Value::as_str) {
    ///         Some(token) if !token.is_empty() => page_token = Some(token.to_string()),
    ///         _ => break,
    ///     }
    /// }
    /// # Ok(()) }
    /// ```
    pub fn list_courses(&self) -> builder::ListCourses<R> {
        builder::ListCourses::new(self.inner.clone())
    }

    /// Creates a course.
    pub fn create_course(&self, course: wire::Record) -> builder::CreateCourse<R> {
        builder::CreateCourse::new(self.inner.clone()).set_course(course)
    }

    /// Returns course work.
    pub fn get_course_work<C, T>(&self, course_id: C, id: T) -> builder::GetCourseWork<R>
    where
        C: Into<String>,
        T: Into<String>,
    {
        builder::GetCourseWork::new(self.inner.clone())
            .set_course_id(course_id)
            .set_id(id)
    }

    /// Returns a list of student submissions that the requester is permitted
    /// to view.
    pub fn list_student_submissions<C, W>(
        &self,
        course_id: C,
        course_work_id: W,
    ) -> builder::ListStudentSubmissions<R>
    where
        C: Into<String>,
        W: Into<String>,
    {
        builder::ListStudentSubmissions::new(self.inner.clone())
            .set_course_id(course_id)
            .set_course_work_id(course_work_id)
    }
}
