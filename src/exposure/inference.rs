//! Exposure inference
//!
//! A student is exposed to the index case when one of their attendance events
//! shares a room and instant with one of the index case's events. Each exposed
//! (student, course) pair is reported once, in the order it is first seen.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::events::{AttendanceEvent, Fingerprint};
use crate::types::{CourseId, StudentId};

/// A student co-located with the index case, and the course they were in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Contact {
    /// ID of the exposed student
    #[serde(rename = "other_student_id")]
    pub student_id: StudentId,
    /// Course the exposed student was attending
    pub course_id: CourseId,
}

impl Contact {
    /// CSV header matching [`Contact::to_csv_row`]
    pub const CSV_HEADER: &'static str = "other_student_id,course_id";

    /// Create a new contact
    pub fn new(student_id: StudentId, course_id: CourseId) -> Self {
        Self { student_id, course_id }
    }

    /// Comma-separated `other_student_id,course_id` row
    pub fn to_csv_row(&self) -> String {
        format!("{},{}", self.student_id, self.course_id)
    }
}

/// Fingerprints of every event attended by `index_student`
pub fn visited_fingerprints<'a, I>(index_student: StudentId, events: I) -> HashSet<Fingerprint>
where
    I: IntoIterator<Item = &'a AttendanceEvent>,
{
    events
        .into_iter()
        .filter(|event| event.student_id == index_student)
        .map(AttendanceEvent::fingerprint)
        .collect()
}

/// Others who shared a room and instant with `index_student`
///
/// Returns an empty list when the log is empty or the index case never
/// appears in it.
#[instrument(skip(events), fields(events = events.len()))]
pub fn infer_contacts(index_student: StudentId, events: &[AttendanceEvent]) -> Vec<Contact> {
    let visited = visited_fingerprints(index_student, events);
    debug!("Index student {} visited {} room slots", index_student, visited.len());

    let contacts = collect_contacts(index_student, events, &visited);
    info!("Found {} contacts for {}", contacts.len(), index_student.label());
    contacts
}

fn collect_contacts(
    index_student: StudentId,
    events: &[AttendanceEvent],
    visited: &HashSet<Fingerprint>,
) -> Vec<Contact> {
    if visited.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut contacts = Vec::new();

    for event in events {
        if event.student_id == index_student || !visited.contains(&event.fingerprint()) {
            continue;
        }

        let contact = Contact::new(event.student_id, event.course_id);
        if seen.insert(contact) {
            contacts.push(contact);
        }
    }

    contacts
}

/// Summary of an exposure query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureReport {
    /// The index case
    pub index_student: StudentId,
    /// Distinct room slots the index case attended
    pub visited_fingerprint_count: usize,
    /// Exposed (student, course) pairs in first-seen order
    pub contacts: Vec<Contact>,
}

impl ExposureReport {
    /// Run inference for `index_student` and summarise the result
    pub fn compute(index_student: StudentId, events: &[AttendanceEvent]) -> Self {
        let visited = visited_fingerprints(index_student, events);
        let contacts = collect_contacts(index_student, events, &visited);

        Self { index_student, visited_fingerprint_count: visited.len(), contacts }
    }

    /// Number of distinct exposed students
    pub fn distinct_students(&self) -> usize {
        self.contacts.iter().map(|contact| contact.student_id).collect::<HashSet<_>>().len()
    }

    /// Whether anyone was exposed
    pub fn has_contacts(&self) -> bool {
        !self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomId;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 1, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn event(student: u32, course: u32, room: u32, day: u32, hour: u32) -> AttendanceEvent {
        AttendanceEvent::new(StudentId::new(student), CourseId::new(course), RoomId::new(room), at(day, hour))
    }

    #[test]
    fn test_contacts_exclude_index_case() {
        let events = vec![event(1, 10, 101, 3, 9), event(2, 10, 101, 3, 9), event(1, 10, 101, 5, 9)];
        let contacts = infer_contacts(StudentId::new(1), &events);

        assert_eq!(contacts, vec![Contact::new(StudentId::new(2), CourseId::new(10))]);
    }

    #[test]
    fn test_repeated_meetings_reported_once() {
        let events = vec![
            event(1, 10, 101, 3, 9),
            event(2, 10, 101, 3, 9),
            event(1, 10, 101, 5, 9),
            event(2, 10, 101, 5, 9),
        ];
        assert_eq!(infer_contacts(StudentId::new(1), &events).len(), 1);
    }

    #[test]
    fn test_distinct_courses_are_distinct_contacts() {
        let events = vec![
            event(1, 10, 101, 3, 9),
            event(2, 10, 101, 3, 9),
            event(1, 11, 102, 4, 14),
            event(2, 11, 102, 4, 14),
            event(3, 12, 102, 4, 15),
        ];
        let report = ExposureReport::compute(StudentId::new(1), &events);

        assert_eq!(
            report.contacts,
            vec![
                Contact::new(StudentId::new(2), CourseId::new(10)),
                Contact::new(StudentId::new(2), CourseId::new(11)),
            ]
        );
        assert_eq!(report.visited_fingerprint_count, 2);
        assert_eq!(report.distinct_students(), 1);
    }

    #[test]
    fn test_room_and_hour_must_both_match() {
        let events = vec![event(1, 10, 101, 3, 9), event(2, 10, 102, 3, 9), event(3, 10, 101, 3, 10)];
        assert!(infer_contacts(StudentId::new(1), &events).is_empty());
    }

    #[test]
    fn test_empty_log_and_absent_index() {
        assert!(infer_contacts(StudentId::new(1), &[]).is_empty());

        let events = vec![event(2, 10, 101, 3, 9), event(3, 10, 101, 3, 9)];
        let report = ExposureReport::compute(StudentId::new(99), &events);
        assert!(!report.has_contacts());
        assert_eq!(report.visited_fingerprint_count, 0);
    }

    #[test]
    fn test_contact_csv_row() {
        assert_eq!(Contact::new(StudentId::new(4), CourseId::new(1013)).to_csv_row(), "4,1013");
    }
}
