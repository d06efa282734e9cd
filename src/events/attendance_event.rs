//! Attendance events and the event log
//!
//! This module contains the attendance record emitted when a student attends a
//! course meeting, the room/time fingerprint used to match co-located students,
//! and the append-only log accumulating records across simulated days.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::types::{CourseId, RoomId, StudentId};

/// Timestamp layout used in flat-file rows
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A student attending a course meeting in a room at an instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AttendanceEvent {
    /// ID of the attending student
    pub student_id: StudentId,
    /// ID of the course meeting
    pub course_id: CourseId,
    /// ID of the room the course meets in
    pub room_id: RoomId,
    /// Calendar date plus the course start hour
    pub timestamp: NaiveDateTime,
}

impl AttendanceEvent {
    /// CSV header matching [`AttendanceEvent::to_csv_row`]
    pub const CSV_HEADER: &'static str = "student_id,course_id,room_id,timestamp";

    /// Create a new attendance event
    pub fn new(
        student_id: StudentId,
        course_id: CourseId,
        room_id: RoomId,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self { student_id, course_id, room_id, timestamp }
    }

    /// Room and instant of this event
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint { room_id: self.room_id, timestamp: self.timestamp }
    }

    /// Comma-separated row in `student_id,course_id,room_id,timestamp` order
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{}",
            self.student_id,
            self.course_id,
            self.room_id,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}

/// Where and when an event happened
///
/// Two events share a fingerprint exactly when their students were in the same
/// room at the same hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fingerprint {
    /// Room of the event
    pub room_id: RoomId,
    /// Instant of the event
    pub timestamp: NaiveDateTime,
}

/// Ordered accumulation of attendance events across days
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<AttendanceEvent>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one day's events
    pub fn extend(&mut self, events: impl IntoIterator<Item = AttendanceEvent>) {
        self.events.extend(events);
    }

    /// Append a single event
    pub fn push(&mut self, event: AttendanceEvent) {
        self.events.push(event);
    }

    /// All events in emission order
    pub fn events(&self) -> &[AttendanceEvent] {
        &self.events
    }

    /// Iterate over events in emission order
    pub fn iter(&self) -> std::slice::Iter<'_, AttendanceEvent> {
        self.events.iter()
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events attended by one student
    pub fn events_for_student(&self, student_id: StudentId) -> impl Iterator<Item = &AttendanceEvent> {
        self.events.iter().filter(move |event| event.student_id == student_id)
    }
}

impl From<Vec<AttendanceEvent>> for EventLog {
    fn from(events: Vec<AttendanceEvent>) -> Self {
        Self { events }
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a AttendanceEvent;
    type IntoIter = std::slice::Iter<'a, AttendanceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
