//! Campus Contact Simulator
//!
//! A contact-tracing simulation of students attending scheduled courses. The
//! library synthesizes buildings, rooms, courses, and students, steps the
//! calendar one day at a time to produce a timestamped "who was where, when"
//! attendance log, and infers which students shared a room with an index case.
//!
//! # Overview
//!
//! ## Key Features
//!
//! - **Schedule Resolution**: single-weekday and Mon/Wed, Tue/Thu paired courses
//! - **Seeded Population Generation**: reproducible buildings, rooms, courses, students
//! - **Daily Attendance Generation**: one event per enrolled student per meeting
//! - **Exposure Inference**: co-location by room and hour against an index student
//! - **Flat-File Export**: entity tables and records as CSV or JSON lines
//!
//! ## Quick Start
//!
//! ```rust
//! use campus_contact_sim::*;
//!
//! let config = SimulationConfig {
//!     rooms_per_building: 10,
//!     num_students: 200,
//!     days: 7,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = SimulationOrchestrator::new(config)?;
//! let log = orchestrator.run();
//!
//! let contacts = infer_contacts(StudentId::new(0), log.events());
//! println!("{} events, {} contacts", log.len(), contacts.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, schedule codes, and configuration
//! - [`facility`]: Buildings, rooms, and their registry
//! - [`course`]: Courses and schedule resolution
//! - [`student`]: Students and enrollment
//! - [`events`]: Attendance events and daily generation
//! - [`exposure`]: Contact-tracing inference
//! - [`simulation`]: Orchestration, statistics, logging, and errors
//! - [`export`]: Flat-file writers
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Facility   │    │   Course    │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Buildings   │◄───┤ Schedule    │
//! │ Enums       │    │ Rooms       │    │ Generator   │
//! │ Config      │    │             │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                                      ▲
//!        │                                      │
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Student    │    │   Events    │    │ Simulation  │
//! │             │    │             │    │             │
//! │ Enrollment  │◄───┤ Daily Gen   │◄───┤ Orchestrator│
//! │ Generator   │    │ Event Log   │    │ Statistics  │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                            ▲                   ▲
//!                            │                   │
//!                    ┌─────────────┐    ┌─────────────┐
//!                    │  Exposure   │    │   Export    │
//!                    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod course;
pub mod events;
pub mod export;
pub mod exposure;
pub mod facility;
pub mod simulation;
pub mod student;

pub mod types;

// Core types and identifiers
pub use types::{
    // Identifiers
    BuildingId,
    // Configuration
    ConfigValidationError,
    CourseId,
    // Enums
    OutputFormat,
    RoomId,
    ScheduleCode,
    SchoolDay,
    SimulationConfig,
    StudentId,
};

// Facility types and functionality
pub use facility::{Building, FacilityGenerator, FacilityRegistry, Room};

// Course types and schedule resolution
pub use course::{active_courses, meets_on, Course, CourseGenerator};

// Student types and functionality
pub use student::{Student, StudentGenerator};

// Event types and functionality
pub use events::{
    step_day, AttendanceEvent, DailyAttendanceGenerator, EnrollmentIndex, EventLog, Fingerprint,
};

// Exposure inference
pub use exposure::{infer_contacts, Contact, ExposureReport};

// Export
pub use export::FlatFileExporter;

// Simulation types and functionality
pub use simulation::{
    LoggingConfig, SimulationError, SimulationOrchestrator, SimulationResult, SimulationStatistics,
};
