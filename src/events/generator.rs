//! Daily attendance generation
//!
//! Turns the courses meeting on a calendar date into one attendance event per
//! enrolled student. Events are ordered by start hour, then by the order of the
//! course list, then by the order of the student collection. Every enrolled
//! student attends every meeting.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, instrument};

use crate::course::{active_courses, calendar_weekday, Course};
use crate::events::{students_in_course, AttendanceEvent, EnrollmentIndex};
use crate::student::Student;
use crate::types::StudentId;

/// Hours scanned per day
pub const HOURS_PER_DAY: u32 = 24;

/// Events for one date, resolving enrollment by scanning every student
///
/// Reference implementation for [`DailyAttendanceGenerator::step_day`].
pub fn step_day(
    all_courses: &[Course],
    all_students: &[Student],
    calendar_date: NaiveDate,
) -> Vec<AttendanceEvent> {
    emit_day(all_courses, calendar_date, |course| {
        students_in_course(all_students, course).into_iter().map(|student| student.id).collect()
    })
}

/// Attendance generator backed by a prebuilt enrollment index
#[derive(Debug, Clone)]
pub struct DailyAttendanceGenerator {
    index: EnrollmentIndex,
}

impl DailyAttendanceGenerator {
    /// Create a generator, indexing the enrollments of `all_students`
    pub fn new(all_students: &[Student]) -> Self {
        Self { index: EnrollmentIndex::build(all_students) }
    }

    /// The enrollment index in use
    pub fn index(&self) -> &EnrollmentIndex {
        &self.index
    }

    /// Events for one date
    #[instrument(skip(self, all_courses), fields(courses = all_courses.len()))]
    pub fn step_day(&self, all_courses: &[Course], calendar_date: NaiveDate) -> Vec<AttendanceEvent> {
        let events =
            emit_day(all_courses, calendar_date, |course| self.index.students(course.id).to_vec());
        debug!("Generated {} attendance events for {}", events.len(), calendar_date);
        events
    }
}

/// Midnight of `date` plus `hour` hours
pub fn meeting_time(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(hour))
}

fn emit_day<F>(all_courses: &[Course], calendar_date: NaiveDate, enrolled: F) -> Vec<AttendanceEvent>
where
    F: Fn(&Course) -> Vec<StudentId>,
{
    let active = active_courses(all_courses, calendar_weekday(calendar_date));
    let mut events = Vec::new();

    for hour in 0..HOURS_PER_DAY {
        let timestamp = meeting_time(calendar_date, hour);
        for &course in active.iter().filter(|course| course.start_hour() == hour) {
            events.extend(
                enrolled(course)
                    .into_iter()
                    .map(|student| AttendanceEvent::new(student, course.id, course.room_id(), timestamp)),
            );
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CourseId, RoomId};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, day).unwrap()
    }

    fn student(id: u32, courses: &[u32]) -> Student {
        Student::new(StudentId::new(id), courses.iter().copied().map(CourseId::new).collect()).unwrap()
    }

    fn course(id: u32, code: u32, hour: u32, room: u32) -> Course {
        Course::from_code(CourseId::new(id), code, hour, RoomId::new(room), 0.5).unwrap()
    }

    #[test]
    fn test_events_ordered_by_hour_then_course() {
        let courses = vec![course(1, 1, 15, 101), course(2, 6, 9, 102), course(3, 1, 9, 103)];
        let students = vec![student(0, &[1, 3]), student(1, &[2, 3])];

        let events = step_day(&courses, &students, date(3));
        let rows: Vec<(u32, u32)> =
            events.iter().map(|e| (e.student_id.value(), e.course_id.value())).collect();
        assert_eq!(rows, vec![(1, 2), (0, 3), (1, 3), (0, 1)]);
        assert_eq!(events[0].timestamp, date(3).and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(events[3].timestamp, date(3).and_hms_opt(15, 0, 0).unwrap());
    }

    #[test]
    fn test_indexed_generator_matches_linear_scan() {
        let courses = vec![course(1, 1, 15, 101), course(2, 6, 9, 102), course(3, 3, 9, 103), course(4, 7, 0, 104)];
        let students = vec![student(0, &[1, 3]), student(1, &[2, 3, 4]), student(2, &[])];
        let generator = DailyAttendanceGenerator::new(&students);

        for day in 3..=9 {
            assert_eq!(generator.step_day(&courses, date(day)), step_day(&courses, &students, date(day)));
        }
    }

    #[test]
    fn test_weekend_and_unattended_courses_emit_nothing() {
        let courses = vec![course(1, 1, 9, 101), course(2, 2, 9, 101)];
        let students = vec![student(0, &[1])];

        assert!(step_day(&courses, &students, date(8)).is_empty());
        assert!(step_day(&courses, &students, date(4)).is_empty());
        assert!(step_day(&[], &students, date(3)).is_empty());
    }

    #[test]
    fn test_meeting_time_adds_hours_to_midnight() {
        assert_eq!(meeting_time(date(3), 0), date(3).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(meeting_time(date(3), 23), date(3).and_hms_opt(23, 0, 0).unwrap());
    }
}
