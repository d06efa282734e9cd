//! Students and enrollment
//!
//! This module contains the student entity and the generator that enrols a
//! synthetic population into the generated courses.

#[allow(clippy::module_inception)]
pub mod student;
pub mod generator;

// Re-export all public types for convenience
pub use generator::StudentGenerator;
pub use student::Student;
