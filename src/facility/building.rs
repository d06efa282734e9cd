//! Building management and room organization
//!
//! This module contains the Building struct, which exclusively owns the rooms
//! added to it.

use crate::facility::room::Room;
use crate::types::{BuildingId, RoomId};
use serde::{Deserialize, Serialize};

/// Represents a building on campus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// Unique identifier for the building
    pub id: BuildingId,
    /// Collection of rooms within this building
    pub rooms: Vec<Room>,
}

impl Building {
    /// Create a new building with no rooms
    pub fn new(id: BuildingId) -> Self {
        Self { id, rooms: Vec::new() }
    }

    /// Add a room to the building, taking ownership of it
    ///
    /// The room is rebound to this building regardless of the building id it
    /// was constructed with.
    pub fn add_room(&mut self, mut room: Room) {
        room.building_id = self.id;
        self.rooms.push(room);
    }

    /// Get a room by ID
    pub fn get_room(&self, room_id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }

    /// Check if a room exists in this building
    pub fn contains_room(&self, room_id: RoomId) -> bool {
        self.rooms.iter().any(|r| r.id == room_id)
    }

    /// Get the number of rooms in the building
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Validate that every room is bound to this building and room ids are unique
    pub fn validate(&self) -> Result<(), String> {
        for (index, room) in self.rooms.iter().enumerate() {
            if room.building_id != self.id {
                return Err(format!("Room {} does not belong to building {}", room.id, self.id));
            }
            if self.rooms[..index].iter().any(|other| other.id == room.id) {
                return Err(format!("Room {} appears twice in building {}", room.id, self.id));
            }
        }
        Ok(())
    }
}
