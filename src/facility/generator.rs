//! Facility generation system
//!
//! This module contains the generator that lays out the campus: a fixed number
//! of buildings, each with the same number of rooms. Room ids encode their
//! building as `building_id * 100 + index + 1`.

use crate::facility::{building::Building, registry::FacilityRegistry, room::Room};
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{course_limits, BuildingId, RoomId, SimulationConfig};
use tracing::{debug, info};

/// Generator for campus buildings and rooms
#[derive(Debug, Default)]
pub struct FacilityGenerator;

impl FacilityGenerator {
    /// Create a new facility generator
    pub fn new() -> Self {
        Self
    }

    /// Generate all buildings and rooms described by the configuration
    pub fn generate_facilities(
        &mut self,
        config: &SimulationConfig,
    ) -> SimulationResult<FacilityRegistry> {
        if config.rooms_per_building > course_limits::MAX_ROOMS_PER_BUILDING {
            return Err(SimulationError::generation_error(format!(
                "{} rooms per building would overflow the room id scheme (max {})",
                config.rooms_per_building,
                course_limits::MAX_ROOMS_PER_BUILDING
            )));
        }

        if config.num_buildings > course_limits::MAX_BUILDINGS {
            return Err(SimulationError::generation_error(format!(
                "{} buildings would overflow the room id scheme (max {})",
                config.num_buildings,
                course_limits::MAX_BUILDINGS
            )));
        }

        let mut registry = FacilityRegistry::new();

        for building_index in 0..config.num_buildings {
            let building = self.generate_building(building_index as u32, config.rooms_per_building);
            debug!("Generated {} with {} rooms", building.id.label(), building.room_count());
            registry.add_building(building);
        }

        info!(
            "Generated {} buildings with {} total rooms",
            registry.building_count(),
            registry.total_room_count()
        );

        Ok(registry)
    }

    /// Generate one building and its rooms
    pub fn generate_building(&mut self, building_index: u32, room_count: usize) -> Building {
        let building_id = BuildingId::new(building_index);
        let mut building = Building::new(building_id);

        for room_index in 0..room_count as u32 {
            let room_id = RoomId::new(building_index * 100 + room_index + 1);
            building.add_room(Room::new(building_id, room_id));
        }

        building
    }
}
