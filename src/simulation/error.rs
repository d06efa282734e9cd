//! Error types and handling
//!
//! This module contains the error types raised at the construction boundaries of
//! the simulation. Day stepping and exposure inference never fail once their
//! inputs have been built.

use crate::types::{CourseId, RoomId, StudentId};
use thiserror::Error;

/// Errors that can occur while building or running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Schedule code outside 1..=7
    #[error("Invalid schedule code {0} (expected 1-5 for a weekday, 6 for Mon/Wed, 7 for Tue/Thu)")]
    InvalidScheduleCode(u32),

    /// Start hour outside 0..=23
    #[error("Invalid start hour {0} (expected 0-23)")]
    InvalidHour(u32),

    /// Attendance probability outside 0.0..=1.0
    #[error("Invalid attendance probability {0} (expected 0.0-1.0)")]
    InvalidProbability(f64),

    /// A student was given the same course twice
    #[error("Student {student} is enrolled in course {course} more than once")]
    DuplicateEnrollment {
        /// The student with the repeated enrollment
        student: StudentId,
        /// The repeated course
        course: CourseId,
    },

    /// A reference to a course that is not part of the population
    #[error("Unknown course: {0}")]
    UnknownCourse(CourseId),

    /// A reference to a room that is not part of the facility
    #[error("Unknown room: {0}")]
    UnknownRoom(RoomId),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// Population generation failed
    #[error("Population generation failed: {0}")]
    GenerationError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<crate::types::ConfigValidationError> for SimulationError {
    fn from(error: crate::types::ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a population generation error
    pub fn generation_error(msg: impl Into<String>) -> Self {
        Self::GenerationError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::InvalidScheduleCode(_)
            | SimulationError::InvalidHour(_)
            | SimulationError::InvalidProbability(_) => "Course",
            SimulationError::DuplicateEnrollment { .. } => "Student",
            SimulationError::UnknownCourse(_) | SimulationError::UnknownRoom(_) => "Population",
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::GenerationError(_) => "Generation",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
