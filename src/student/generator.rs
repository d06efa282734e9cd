//! Student generation
//!
//! Students are numbered from zero and each enrols in a random number of
//! distinct courses drawn uniformly from the full course list.

use crate::course::Course;
use crate::simulation::{SimulationError, SimulationResult};
use crate::student::Student;
use crate::types::{course_limits, CourseId, SimulationConfig, StudentId};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Generator for the student population
#[derive(Debug)]
pub struct StudentGenerator {
    rng: StdRng,
}

impl Default for StudentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentGenerator {
    /// Create a new student generator seeded from system entropy
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Create a new student generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Generate `config.num_students` students over `courses`
    #[instrument(skip(self, config, courses), fields(students = config.num_students))]
    pub fn generate_students(
        &mut self,
        config: &SimulationConfig,
        courses: &[Course],
    ) -> SimulationResult<Vec<Student>> {
        if config.num_students == 0 {
            return Ok(Vec::new());
        }

        if config.num_students > course_limits::MAX_STUDENTS {
            return Err(SimulationError::generation_error(format!(
                "{} students exceed the student id range (max {})",
                config.num_students,
                course_limits::MAX_STUDENTS
            )));
        }

        if courses.is_empty() {
            return Err(SimulationError::generation_error(
                "Cannot enrol students without any courses",
            ));
        }

        if config.min_courses_per_student > config.max_courses_per_student {
            return Err(SimulationError::generation_error(format!(
                "cannot draw {}..={} courses per student",
                config.min_courses_per_student, config.max_courses_per_student
            )));
        }

        let mut students = Vec::with_capacity(config.num_students);
        for index in 0..config.num_students as u32 {
            let wanted = self
                .rng
                .gen_range(config.min_courses_per_student..=config.max_courses_per_student);
            let count = wanted.min(courses.len());
            if count < wanted {
                debug!("Student {} wanted {} courses, only {} exist", index, wanted, count);
            }

            let enrolled: Vec<CourseId> =
                courses.choose_multiple(&mut self.rng, count).map(|course| course.id).collect();
            students.push(Student::new(StudentId::new(index), enrolled)?);
        }

        let enrollments: usize = students.iter().map(Student::course_count).sum();
        info!("Generated {} students with {} enrollments", students.len(), enrollments);
        Ok(students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomId;
    use std::collections::HashSet;

    fn sample_courses(count: u32) -> Vec<Course> {
        (0..count)
            .map(|i| Course::from_code(CourseId::new(1010 + i), 1 + i % 7, 9, RoomId::new(101), 0.5).unwrap())
            .collect()
    }

    #[test]
    fn test_students_get_distinct_courses_in_range() {
        let config = SimulationConfig { num_students: 200, ..Default::default() };
        let courses = sample_courses(12);
        let students = StudentGenerator::with_seed(42).generate_students(&config, &courses).unwrap();

        assert_eq!(students.len(), 200);
        for (index, student) in students.iter().enumerate() {
            assert_eq!(student.id, StudentId::new(index as u32));
            assert!((2..=4).contains(&student.course_count()));
            let distinct: HashSet<_> = student.courses().iter().collect();
            assert_eq!(distinct.len(), student.course_count());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = SimulationConfig { num_students: 50, ..Default::default() };
        let courses = sample_courses(8);

        let first = StudentGenerator::with_seed(9).generate_students(&config, &courses).unwrap();
        let second = StudentGenerator::with_seed(9).generate_students(&config, &courses).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_enrollment_clamped_to_available_courses() {
        let config = SimulationConfig { num_students: 10, ..Default::default() };
        let courses = sample_courses(1);
        let students = StudentGenerator::with_seed(1).generate_students(&config, &courses).unwrap();
        assert!(students.iter().all(|s| s.courses() == [CourseId::new(1010)]));
    }

    #[test]
    fn test_no_courses_is_an_error() {
        let config = SimulationConfig { num_students: 10, ..Default::default() };
        let result = StudentGenerator::with_seed(1).generate_students(&config, &[]);
        assert!(matches!(result, Err(SimulationError::GenerationError(_))));

        let empty = SimulationConfig { num_students: 0, ..Default::default() };
        assert!(StudentGenerator::with_seed(1).generate_students(&empty, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_student_count_beyond_id_range_is_rejected() {
        let config = SimulationConfig { num_students: course_limits::MAX_STUDENTS + 1, ..Default::default() };
        let result = StudentGenerator::with_seed(1).generate_students(&config, &sample_courses(2));
        assert!(matches!(result, Err(SimulationError::GenerationError(_))));
    }
}
