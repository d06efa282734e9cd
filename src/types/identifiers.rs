//! Identifier types for the campus contact simulator
//!
//! This module contains the integer-backed identifier types for buildings, rooms,
//! courses, and students used throughout the simulation system. Identifiers
//! serialize as bare integers so exported rows stay in the flat-table shape
//! consumed by downstream loaders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Create an identifier from its raw value
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Get the raw integer value
            pub const fn value(self) -> u32 {
                self.0
            }

            /// Human-readable label used in log messages
            pub fn label(self) -> String {
                format!("{}_{}", $label, self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                let raw = trimmed
                    .strip_prefix(concat!($label, "_"))
                    .unwrap_or(trimmed);
                raw.parse::<u32>()
                    .map(Self)
                    .map_err(|e| format!("Invalid {} '{}': {}", stringify!($name), s, e))
            }
        }
    };
}

define_id!(
    /// Unique identifier for a building
    BuildingId,
    "BLD"
);

define_id!(
    /// Unique identifier for a room within a building
    RoomId,
    "ROOM"
);

define_id!(
    /// Unique identifier for a course
    CourseId,
    "COURSE"
);

define_id!(
    /// Unique identifier for a student
    StudentId,
    "STUDENT"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_integer() {
        assert_eq!(RoomId::new(101).to_string(), "101");
        assert_eq!(StudentId::new(0).to_string(), "0");
    }

    #[test]
    fn test_label_has_prefix() {
        assert_eq!(RoomId::new(101).label(), "ROOM_101");
        assert_eq!(CourseId::new(1012).label(), "COURSE_1012");
        assert_eq!(BuildingId::new(2).label(), "BLD_2");
        assert_eq!(StudentId::new(7).label(), "STUDENT_7");
    }

    #[test]
    fn test_from_str_accepts_prefixed_and_bare() {
        assert_eq!("42".parse::<StudentId>().unwrap(), StudentId::new(42));
        assert_eq!("STUDENT_42".parse::<StudentId>().unwrap(), StudentId::new(42));
        assert_eq!(" 7 ".parse::<CourseId>().unwrap(), CourseId::new(7));
        assert!("ROOM_x".parse::<RoomId>().is_err());
        assert!("-1".parse::<RoomId>().is_err());
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&CourseId::new(1010)).unwrap();
        assert_eq!(json, "1010");
        let id: CourseId = serde_json::from_str("1010").unwrap();
        assert_eq!(id, CourseId::new(1010));
    }

    #[test]
    fn test_ordering_follows_value() {
        assert!(RoomId::new(101) < RoomId::new(102));
    }
}
