//! Contact-tracing exposure inference
//!
//! Cross-references an event log against an index student's room visits to
//! find everyone who shared a room with them at the same hour.

pub mod inference;

// Re-export all public types for convenience
pub use inference::{infer_contacts, visited_fingerprints, Contact, ExposureReport};
