//! Room definition
//!
//! A room is identified by its id and belongs to exactly one building. Courses
//! refer to rooms by id; a room does not track the courses held in it.

use crate::types::{BuildingId, RoomId};
use serde::{Deserialize, Serialize};

/// Represents a room within a building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room
    pub id: RoomId,
    /// ID of the building this room belongs to
    pub building_id: BuildingId,
}

impl Room {
    /// Create a new room
    pub fn new(building_id: BuildingId, id: RoomId) -> Self {
        Self { id, building_id }
    }

    /// CSV row in `room_id,building_id` order
    pub fn to_csv_row(&self) -> String {
        format!("{},{}", self.id, self.building_id)
    }
}
