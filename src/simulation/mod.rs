//! Simulation orchestration and control
//!
//! This module contains the simulation orchestrator, statistics collection,
//! logging setup, and error handling.
//!
//! # Overview
//!
//! - **SimulationOrchestrator**: generates the population and steps the calendar
//! - **SimulationStatistics**: population and per-day attendance counts
//! - **LoggingConfig**: tracing subscriber setup
//! - **SimulationError**: error taxonomy for construction and generation
//!
//! # Usage Example
//!
//! ```rust
//! use campus_contact_sim::simulation::*;
//! use campus_contact_sim::types::*;
//!
//! let config = SimulationConfig {
//!     rooms_per_building: 5,
//!     num_students: 50,
//!     days: 5,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
//! let log = orchestrator.run();
//! assert_eq!(orchestrator.statistics().total_events, log.len());
//! ```

pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use statistics::*;
