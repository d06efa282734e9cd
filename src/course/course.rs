//! Course definition
//!
//! A course meets in one room at a fixed start hour on the weekdays selected by
//! its schedule code. Schedule code, hour, and attendance probability are
//! validated at construction so a built course always fires on its days.

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{CourseId, RoomId, ScheduleCode};
use serde::Serialize;

/// Last valid start hour
pub const MAX_START_HOUR: u32 = 23;

/// Represents a scheduled course
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    /// Unique identifier for the course
    pub id: CourseId,
    schedule: ScheduleCode,
    start_hour: u32,
    room_id: RoomId,
    attendance_probability: f64,
}

impl Course {
    /// Create a new course
    pub fn new(
        id: CourseId,
        schedule: ScheduleCode,
        start_hour: u32,
        room_id: RoomId,
        attendance_probability: f64,
    ) -> SimulationResult<Self> {
        if start_hour > MAX_START_HOUR {
            return Err(SimulationError::InvalidHour(start_hour));
        }
        if !(0.0..=1.0).contains(&attendance_probability) {
            return Err(SimulationError::InvalidProbability(attendance_probability));
        }

        Ok(Self { id, schedule, start_hour, room_id, attendance_probability })
    }

    /// Create a course from a raw integer schedule code
    pub fn from_code(
        id: CourseId,
        schedule_code: u32,
        start_hour: u32,
        room_id: RoomId,
        attendance_probability: f64,
    ) -> SimulationResult<Self> {
        let schedule = ScheduleCode::from_code(schedule_code)
            .ok_or(SimulationError::InvalidScheduleCode(schedule_code))?;
        Self::new(id, schedule, start_hour, room_id, attendance_probability)
    }

    /// Create a course from a packed `schedule_code * 100 + hour` time
    pub fn from_packed(
        id: CourseId,
        packed_time: u32,
        room_id: RoomId,
        attendance_probability: f64,
    ) -> SimulationResult<Self> {
        Self::from_code(id, packed_time / 100, packed_time % 100, room_id, attendance_probability)
    }

    /// Weekdays this course meets on
    pub fn schedule(&self) -> ScheduleCode {
        self.schedule
    }

    /// Hour of day the course starts
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Room the course is held in
    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Attendance probability; carried for future absence modeling, never applied
    pub fn attendance_probability(&self) -> f64 {
        self.attendance_probability
    }

    /// Packed `schedule_code * 100 + hour` representation
    pub fn packed_time(&self) -> u32 {
        self.schedule.code() * 100 + self.start_hour
    }

    /// Move the course to another room
    pub fn set_room(&mut self, room_id: RoomId) {
        self.room_id = room_id;
    }

    /// CSV row in `course_id,room_id,dow_id,hour` order
    pub fn to_csv_row(&self) -> String {
        format!("{},{},{},{}", self.id, self.room_id, self.schedule.code(), self.start_hour)
    }
}
