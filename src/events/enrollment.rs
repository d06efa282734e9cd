//! Course enrollment lookup
//!
//! Resolving "who is enrolled in this course" by scanning every student is the
//! reference rule. [`EnrollmentIndex`] precomputes the same answer once per run.

use std::collections::HashMap;

use crate::course::Course;
use crate::student::Student;
use crate::types::{CourseId, StudentId};

/// Students enrolled in `course`, in student-collection order
pub fn students_in_course<'a>(all_students: &'a [Student], course: &Course) -> Vec<&'a Student> {
    all_students.iter().filter(|student| student.is_enrolled(course.id)).collect()
}

/// Course to enrolled students map, built once from the student collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentIndex {
    by_course: HashMap<CourseId, Vec<StudentId>>,
}

impl EnrollmentIndex {
    /// Build the index; each course lists its students in collection order
    pub fn build(all_students: &[Student]) -> Self {
        let mut by_course: HashMap<CourseId, Vec<StudentId>> = HashMap::new();
        for student in all_students {
            for &course in student.courses() {
                by_course.entry(course).or_default().push(student.id);
            }
        }
        Self { by_course }
    }

    /// Enrolled students of a course; empty for unknown or unattended courses
    pub fn students(&self, course_id: CourseId) -> &[StudentId] {
        self.by_course.get(&course_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of courses with at least one student
    pub fn course_count(&self) -> usize {
        self.by_course.len()
    }

    /// Total enrollments across all courses
    pub fn enrollment_count(&self) -> usize {
        self.by_course.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomId;

    fn student(id: u32, courses: &[u32]) -> Student {
        Student::new(StudentId::new(id), courses.iter().copied().map(CourseId::new).collect()).unwrap()
    }

    #[test]
    fn test_index_matches_linear_scan() {
        let students = vec![
            student(5, &[10, 11]),
            student(2, &[11]),
            student(9, &[12, 10]),
            student(1, &[]),
        ];
        let index = EnrollmentIndex::build(&students);

        for code in [10, 11, 12, 13] {
            let course = Course::from_code(CourseId::new(code), 1, 9, RoomId::new(101), 0.5).unwrap();
            let scanned: Vec<StudentId> =
                students_in_course(&students, &course).iter().map(|s| s.id).collect();
            assert_eq!(index.students(course.id), scanned.as_slice());
        }

        assert_eq!(index.students(CourseId::new(10)), &[StudentId::new(5), StudentId::new(9)]);
        assert_eq!(index.course_count(), 3);
        assert_eq!(index.enrollment_count(), 5);
    }

    #[test]
    fn test_empty_index() {
        let index = EnrollmentIndex::build(&[]);
        assert!(index.students(CourseId::new(1)).is_empty());
        assert_eq!(index.enrollment_count(), 0);
    }
}
