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

//! The shapes of the Google Classroom resources.

use wire::{Field, Shape};

/// A Google Classroom course.
pub static COURSE: Shape = Shape::new(
    "classroom.v1.Course",
    &[
        Field::timestamp("creationTime"),
        Field::timestamp("updateTime"),
    ],
);

/// The response for `ListCourses`.
pub static LIST_COURSES_RESPONSE: Shape = Shape::new(
    "classroom.v1.ListCoursesResponse",
    &[Field::message("courses", &COURSE).repeated()],
);

/// Course work created by a teacher for students of the course.
pub static COURSE_WORK: Shape = Shape::new(
    "classroom.v1.CourseWork",
    &[
        Field::timestamp("creationTime"),
        Field::timestamp("updateTime"),
        Field::timestamp("scheduledTime"),
    ],
);

/// A change in the state of a submission.
pub static STATE_HISTORY: Shape = Shape::new(
    "classroom.v1.StateHistory",
    &[Field::timestamp("stateTimestamp")],
);

/// A change in the grade of a submission.
pub static GRADE_HISTORY: Shape = Shape::new(
    "classroom.v1.GradeHistory",
    &[Field::timestamp("gradeTimestamp")],
);

/// An entry in the submission history, either a state or a grade change.
pub static SUBMISSION_HISTORY: Shape = Shape::new(
    "classroom.v1.SubmissionHistory",
    &[
        Field::message("stateHistory", &STATE_HISTORY),
        Field::message("gradeHistory", &GRADE_HISTORY),
    ],
);

/// Student work for an assignment or question.
pub static STUDENT_SUBMISSION: Shape = Shape::new(
    "classroom.v1.StudentSubmission",
    &[
        Field::timestamp("creationTime"),
        Field::timestamp("updateTime"),
        Field::message("submissionHistory", &SUBMISSION_HISTORY).repeated(),
    ],
);

/// The response for `ListStudentSubmissions`.
pub static LIST_STUDENT_SUBMISSIONS_RESPONSE: Shape = Shape::new(
    "classroom.v1.ListStudentSubmissionsResponse",
    &[Field::message("studentSubmissions", &STUDENT_SUBMISSION).repeated()],
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wire::{Timestamp, Value, to_native_value, to_wire_value};

    #[test]
    fn submission_history() -> anyhow::Result<()> {
        let wire = json!({
            "id": "s1",
            "state": "TURNED_IN",
            "creationTime": "2024-09-01T10:00:00Z",
            "submissionHistory": [
                {"stateHistory": {"state": "CREATED", "stateTimestamp": "2024-09-01T10:00:00Z"}},
                {"gradeHistory": {"pointsEarned": 9.5, "gradeTimestamp": "2024-09-03T12:30:00.5Z"}},
            ],
        });
        let got = to_native_value(wire.clone(), &STUDENT_SUBMISSION)?;
        let history = got
            .get("submissionHistory")
            .and_then(Value::as_list)
            .expect("submission history is a list");
        assert_eq!(history.len(), 2);
        let graded = history[1]
            .as_record()
            .and_then(|r| r.get("gradeHistory"))
            .and_then(Value::as_record)
            .and_then(|r| r.get("gradeTimestamp"))
            .and_then(Value::as_timestamp);
        let want = Timestamp::try_from("2024-09-03T12:30:00.5Z")?;
        assert_eq!(graded, Some(&want));
        assert_eq!(to_wire_value(&got, &STUDENT_SUBMISSION)?, wire);
        Ok(())
    }

    #[test]
    fn course_without_times() -> anyhow::Result<()> {
        let wire = json!({"name": "10th Grade Biology", "section": "Period 2"});
        let got = to_native_value(wire.clone(), &COURSE)?;
        assert!(!got.contains("creationTime"), "{got:?}");
        assert_eq!(to_wire_value(&got, &COURSE)?, wire);
        Ok(())
    }
}
