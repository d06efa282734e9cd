//! Facility registry
//!
//! This module contains the FacilityRegistry, the lookup structure over all
//! buildings and rooms of a simulation run.

use crate::facility::{building::Building, room::Room};
use crate::types::RoomId;
use std::collections::HashMap;

/// Registry of all buildings and their rooms
#[derive(Debug, Clone, Default)]
pub struct FacilityRegistry {
    /// Buildings in insertion order
    buildings: Vec<Building>,
    /// Index from room id to (building position, room position)
    room_index: HashMap<RoomId, (usize, usize)>,
}

impl FacilityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a building and index its rooms
    pub fn add_building(&mut self, building: Building) {
        let building_pos = self.buildings.len();
        for (room_pos, room) in building.rooms.iter().enumerate() {
            self.room_index.insert(room.id, (building_pos, room_pos));
        }
        self.buildings.push(building);
    }

    /// All buildings in insertion order
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Iterate over every room, building by building
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.buildings.iter().flat_map(|b| b.rooms.iter())
    }

    /// Get a room by ID
    pub fn get_room(&self, room_id: RoomId) -> Option<&Room> {
        self.room_index
            .get(&room_id)
            .and_then(|&(b, r)| self.buildings.get(b).and_then(|building| building.rooms.get(r)))
    }

    /// Check if a room exists anywhere in the registry
    pub fn contains_room(&self, room_id: RoomId) -> bool {
        self.room_index.contains_key(&room_id)
    }

    /// Number of buildings
    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    /// Number of rooms across all buildings
    pub fn total_room_count(&self) -> usize {
        self.buildings.iter().map(Building::room_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BuildingId;

    fn building_with_rooms(id: u32, rooms: &[u32]) -> Building {
        let mut building = Building::new(BuildingId::new(id));
        for &room in rooms {
            building.add_room(Room::new(BuildingId::new(id), RoomId::new(room)));
        }
        building
    }

    #[test]
    fn test_registry_counts_and_lookup() {
        let mut registry = FacilityRegistry::new();
        registry.add_building(building_with_rooms(0, &[1, 2]));
        registry.add_building(building_with_rooms(1, &[101, 102, 103]));

        assert_eq!(registry.building_count(), 2);
        assert_eq!(registry.total_room_count(), 5);
        assert!(registry.contains_room(RoomId::new(103)));
        assert!(!registry.contains_room(RoomId::new(3)));
        assert_eq!(
            registry.get_room(RoomId::new(102)).unwrap().building_id,
            BuildingId::new(1)
        );
    }

    #[test]
    fn test_rooms_iterate_in_building_order() {
        let mut registry = FacilityRegistry::new();
        registry.add_building(building_with_rooms(0, &[1, 2]));
        registry.add_building(building_with_rooms(1, &[101]));

        let ids: Vec<u32> = registry.rooms().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 101]);
    }
}
