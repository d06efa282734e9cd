//! Campus facility management
//!
//! This module manages buildings and rooms, including facility generation and
//! registry lookup.
//!
//! # Overview
//!
//! - **Building**: owns its rooms exclusively once they are added
//! - **Room**: identified by id, bound to one building
//! - **FacilityRegistry**: lookup over all buildings and rooms of a run
//! - **FacilityGenerator**: lays out buildings and rooms from the configuration
//!
//! # Usage Example
//!
//! ```rust
//! use campus_contact_sim::facility::*;
//! use campus_contact_sim::types::*;
//!
//! let mut building = Building::new(BuildingId::new(1));
//! building.add_room(Room::new(BuildingId::new(1), RoomId::new(101)));
//!
//! let mut registry = FacilityRegistry::new();
//! registry.add_building(building);
//! assert!(registry.contains_room(RoomId::new(101)));
//!
//! let config = SimulationConfig { rooms_per_building: 5, ..Default::default() };
//! let generated = FacilityGenerator::new().generate_facilities(&config).unwrap();
//! assert_eq!(generated.total_room_count(), 5);
//! ```

pub mod building;
pub mod generator;
pub mod registry;
pub mod room;

// Re-export all public types for convenience
pub use building::Building;
pub use generator::FacilityGenerator;
pub use registry::FacilityRegistry;
pub use room::Room;
