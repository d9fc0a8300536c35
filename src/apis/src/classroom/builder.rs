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

//! Request builders for [Classroom][super::client::Classroom].

use super::model;
use gax::Result;
use gax::client::Client;
use gax::path_parameter::{Segment, matching};
use gax::query_parameter::QueryParameters;
use gax::request::Requester;
use std::sync::Arc;
use wire::Record;

// Courses, course work, and users are identified by a single path segment.
// Courses may also use an alias, such as `d:school_physics`.
const ID: &[Segment] = &[Segment::SingleWildcard];

/// The request builder for [Classroom::get_course][super::client::Classroom::get_course].
#[derive(Debug)]
pub struct GetCourse<R> {
    inner: Arc<Client<R>>,
    id: String,
}

impl<R: Requester> GetCourse<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            id: String::new(),
        }
    }

    /// Sets the course id or alias.
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let id = matching(&self.id, "id", ID)?;
        self.inner
            .call(
                http::Method::GET,
                format!("/v1/courses/{id}"),
                QueryParameters::new(),
                None,
                &model::COURSE,
            )
            .await
    }
}

/// The request builder for [Classroom::list_courses][super::client::Classroom::list_courses].
///
/// The service returns the courses in pages. Use the `nextPageToken` field
/// of the response with [set_page_token][ListCourses::set_page_token] to
/// fetch the next page.
#[derive(Debug)]
pub struct ListCourses<R> {
    inner: Arc<Client<R>>,
    student_id: Option<String>,
    teacher_id: Option<String>,
    course_states: Vec<String>,
    page_size: Option<i32>,
    page_token: Option<String>,
}

impl<R: Requester> ListCourses<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            student_id: None,
            teacher_id: None,
            course_states: Vec::new(),
            page_size: None,
            page_token: None,
        }
    }

    /// Restricts the results to courses with this student.
    ///
    /// The value may be a numeric user id, an email address, or `me`.
    pub fn set_student_id<T: Into<String>>(mut self, v: T) -> Self {
        self.student_id = Some(v.into());
        self
    }

    /// Restricts the results to courses with this teacher.
    pub fn set_teacher_id<T: Into<String>>(mut self, v: T) -> Self {
        self.teacher_id = Some(v.into());
        self
    }

    /// Restricts the results to courses in one of these states, e.g. `ACTIVE`.
    pub fn set_course_states<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.course_states = v.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the maximum number of courses in each page.
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
            .add("studentId", &self.student_id)
            .add("teacherId", &self.teacher_id)
            .add("courseStates", &self.course_states)
            .add("pageSize", &self.page_size)
            .add("pageToken", &self.page_token);
        self.inner
            .call(
                http::Method::GET,
                "/v1/courses",
                query,
                None,
                &model::LIST_COURSES_RESPONSE,
            )
            .await
    }
}

/// The request builder for [Classroom::create_course][super::client::Classroom::create_course].
#[derive(Debug)]
pub struct CreateCourse<R> {
    inner: Arc<Client<R>>,
    course: Record,
}

impl<R: Requester> CreateCourse<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            course: Record::new(),
        }
    }

    /// Sets the course, in native form.
    ///
    /// The service requires at least the `name` and the `ownerId` fields.
    pub fn set_course(mut self, v: Record) -> Self {
        self.course = v;
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        self.inner
            .call(
                http::Method::POST,
                "/v1/courses",
                QueryParameters::new(),
                Some((&self.course, &model::COURSE)),
                &model::COURSE,
            )
            .await
    }
}

/// The request builder for [Classroom::get_course_work][super::client::Classroom::get_course_work].
#[derive(Debug)]
pub struct GetCourseWork<R> {
    inner: Arc<Client<R>>,
    course_id: String,
    id: String,
}

impl<R: Requester> GetCourseWork<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            course_id: String::new(),
            id: String::new(),
        }
    }

    /// Sets the course id or alias.
    pub fn set_course_id<T: Into<String>>(mut self, v: T) -> Self {
        self.course_id = v.into();
        self
    }

    /// Sets the course work id.
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Record> {
        let course_id = matching(&self.course_id, "course_id", ID)?;
        let id = matching(&self.id, "id", ID)?;
        self.inner
            .call(
                http::Method::GET,
                format!("/v1/courses/{course_id}/courseWork/{id}"),
                QueryParameters::new(),
                None,
                &model::COURSE_WORK,
            )
            .await
    }
}

/// The request builder for [Classroom::list_student_submissions][super::client::Classroom::list_student_submissions].
#[derive(Debug)]
pub struct ListStudentSubmissions<R> {
    inner: Arc<Client<R>>,
    course_id: String,
    course_work_id: String,
    user_id: Option<String>,
    states: Vec<String>,
    late: Option<String>,
    page_size: Option<i32>,
    page_token: Option<String>,
}

impl<R: Requester> ListStudentSubmissions<R> {
    pub(crate) fn new(inner: Arc<Client<R>>) -> Self {
        Self {
            inner,
            course_id: String::new(),
            course_work_id: String::new(),
            user_id: None,
            states: Vec::new(),
            late: None,
            page_size: None,
            page_token: None,
        }
    }

    /// Sets the course id or alias.
    pub fn set_course_id<T: Into<String>>(mut self, v: T) -> Self {
        self.course_id = v.into();
        self
    }

    /// Sets the course work id.
    ///
    /// Use `-` to list the submissions for all the course work in the course.
    pub fn set_course_work_id<T: Into<String>>(mut self, v: T) -> Self {
        self.course_work_id = v.into();
        self
    }

    /// Restricts the results to submissions by this student.
    pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_id = Some(v.into());
        self
    }

    /// Restricts the results to submissions in one of these states.
    pub fn set_states<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.states = v.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Restricts the results by lateness, e.g. `LATE_ONLY`.
    pub fn set_late<T: Into<String>>(mut self, v: T) -> Self {
        self.late = Some(v.into());
        self
    }

    /// Sets the maximum number of submissions in each page.
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
        let course_id = matching(&self.course_id, "course_id", ID)?;
        let course_work_id = matching(&self.course_work_id, "course_work_id", ID)?;
        let query = QueryParameters::new()
            .add("userId", &self.user_id)
            .add("states", &self.states)
            .add("late", &self.late)
            .add("pageSize", &self.page_size)
            .add("pageToken", &self.page_token);
        self.inner
            .call(
                http::Method::GET,
                format!("/v1/courses/{course_id}/courseWork/{course_work_id}/studentSubmissions"),
                query,
                None,
                &model::LIST_STUDENT_SUBMISSIONS_RESPONSE,
            )
            .await
    }
}
