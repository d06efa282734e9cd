//! Courses and schedule resolution
//!
//! This module contains the course entity, the schedule resolver deciding which
//! courses meet on a given weekday, and the course generator.
//!
//! # Usage Example
//!
//! ```rust
//! use campus_contact_sim::course::*;
//! use campus_contact_sim::types::*;
//!
//! let course = Course::from_code(CourseId::new(1010), 6, 14, RoomId::new(101), 0.5).unwrap();
//! assert_eq!(course.schedule(), ScheduleCode::MonWedPair);
//!
//! // Monday and Wednesday only; never on a weekend
//! assert!(schedule::meets_on(6, 1));
//! assert!(!schedule::meets_on(6, 2));
//! assert!(!schedule::meets_on(6, 6));
//!
//! let courses = vec![course];
//! assert_eq!(schedule::active_courses(&courses, 3).len(), 1);
//! ```

#[allow(clippy::module_inception)]
pub mod course;
pub mod generator;
pub mod schedule;

// Re-export all public types for convenience
pub use course::Course;
pub use generator::CourseGenerator;
pub use schedule::{active_courses, calendar_weekday, meets_on};
