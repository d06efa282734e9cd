//! Attendance event generation
//!
//! This module turns the active course schedule of each calendar date into
//! timestamped attendance records.
//!
//! # Overview
//!
//! - **AttendanceEvent**: one student in one room for one course meeting
//! - **Fingerprint**: the room and instant of an event
//! - **EventLog**: append-only accumulation of events across days
//! - **EnrollmentIndex**: course to enrolled students lookup built once per run
//! - **DailyAttendanceGenerator**: emits the events of a single date
//!
//! # Usage Example
//!
//! ```rust
//! use campus_contact_sim::course::Course;
//! use campus_contact_sim::events::*;
//! use campus_contact_sim::student::Student;
//! use campus_contact_sim::types::*;
//! use chrono::NaiveDate;
//!
//! let courses = vec![Course::from_code(CourseId::new(1), 1, 9, RoomId::new(101), 0.5).unwrap()];
//! let students = vec![Student::new(StudentId::new(1), vec![CourseId::new(1)]).unwrap()];
//!
//! let generator = DailyAttendanceGenerator::new(&students);
//! let monday = NaiveDate::from_ymd_opt(2022, 1, 3).unwrap();
//! let events = generator.step_day(&courses, monday);
//!
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].to_csv_row(), "1,1,101,2022-01-03 09:00:00");
//! ```

pub mod attendance_event;
pub mod enrollment;
pub mod generator;

// Re-export all public types for convenience
pub use attendance_event::*;
pub use enrollment::*;
pub use generator::*;
