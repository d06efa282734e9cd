//! Core types and identifiers for the campus contact simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: integer-backed identifiers for buildings, rooms, courses, students
//! - **Enums**: the tagged [`ScheduleCode`] and output format
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use campus_contact_sim::types::*;
//!
//! let room_id = RoomId::new(101);
//! assert_eq!(room_id.label(), "ROOM_101");
//!
//! // Codes 6 and 7 are weekday pairs, never weekends
//! let schedule = ScheduleCode::from_code(6).unwrap();
//! assert_eq!(schedule, ScheduleCode::MonWedPair);
//! assert!(schedule.meets_on(3));
//!
//! let config = SimulationConfig {
//!     num_students: 100,
//!     days: 5,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
