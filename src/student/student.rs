//! Student definition

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{CourseId, StudentId};
use serde::Serialize;
use std::collections::HashSet;

/// Represents a student and the courses they are enrolled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    /// Unique identifier for the student
    pub id: StudentId,
    courses: Vec<CourseId>,
}

impl Student {
    /// Create a new student enrolled in `courses`
    ///
    /// Enrollment order is kept; a course listed twice is rejected.
    pub fn new(id: StudentId, courses: Vec<CourseId>) -> SimulationResult<Self> {
        let mut seen = HashSet::with_capacity(courses.len());
        for &course in &courses {
            if !seen.insert(course) {
                return Err(SimulationError::DuplicateEnrollment { student: id, course });
            }
        }

        Ok(Self { id, courses })
    }

    /// Enrolled courses in enrollment order
    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    /// Check if the student is enrolled in a course
    pub fn is_enrolled(&self, course_id: CourseId) -> bool {
        self.courses.contains(&course_id)
    }

    /// Number of enrolled courses
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// One `student_id,course_id` row per enrollment
    pub fn enrollment_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.courses.iter().map(move |course| format!("{},{}", self.id, course))
    }
}
