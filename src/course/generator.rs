//! Course generation
//!
//! This module contains the generator that schedules courses into rooms. Every
//! room receives a random number of courses, each with a random packed time
//! (`schedule_code * 100 + hour`). A room never hosts two courses at the same
//! packed time; a drawn duplicate is dropped rather than redrawn, so a room can
//! end up with fewer courses than drawn.

use crate::course::{course::MAX_START_HOUR, Course};
use crate::facility::FacilityRegistry;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{
    course_limits, CourseId, RoomId, SimulationConfig, MON_WED_CODE, TUE_THU_CODE,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Generator for course schedules
#[derive(Debug)]
pub struct CourseGenerator {
    rng: StdRng,
}

impl Default for CourseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseGenerator {
    /// Create a new course generator seeded from system entropy
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Create a new course generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Draw a packed course time
    ///
    /// With probability `composite_schedule_probability` the course meets on one
    /// of the two weekday pairs, otherwise on a single weekday.
    fn random_packed_time(&mut self, config: &SimulationConfig) -> u32 {
        let hour = self.rng.gen_range(config.earliest_start_hour..=config.latest_start_hour);

        let schedule_code = if self.rng.gen_bool(config.composite_schedule_probability) {
            self.rng.gen_range(MON_WED_CODE..=TUE_THU_CODE)
        } else {
            self.rng.gen_range(1..=5)
        };

        schedule_code * 100 + hour
    }

    /// Generate courses for every room in the registry
    #[instrument(skip(self, config, registry), fields(rooms = registry.total_room_count()))]
    pub fn generate_courses(
        &mut self,
        config: &SimulationConfig,
        registry: &FacilityRegistry,
    ) -> SimulationResult<Vec<Course>> {
        let mut courses = Vec::new();

        for room in registry.rooms() {
            let room_courses = self.generate_room_courses(config, room.id)?;
            courses.extend(room_courses);
        }

        info!("Generated {} courses across {} rooms", courses.len(), registry.total_room_count());
        Ok(courses)
    }

    /// Generate the courses held in a single room
    pub fn generate_room_courses(
        &mut self,
        config: &SimulationConfig,
        room_id: RoomId,
    ) -> SimulationResult<Vec<Course>> {
        check_ranges(config)?;

        let num_courses =
            self.rng.gen_range(config.min_courses_per_room..config.max_courses_per_room);
        let mut used_times = HashSet::new();
        let mut courses = Vec::with_capacity(num_courses);

        for index in 0..num_courses as u32 {
            let packed_time = self.random_packed_time(config);

            if !used_times.insert(packed_time) {
                debug!("{} already hosts a course at {}, dropping draw", room_id.label(), packed_time);
                continue;
            }

            let course_id = CourseId::new(index + room_id.value() * 10);
            courses.push(Course::from_packed(
                course_id,
                packed_time,
                room_id,
                config.attendance_probability,
            )?);
        }

        Ok(courses)
    }
}

/// Reject configurations whose ranges cannot be sampled
fn check_ranges(config: &SimulationConfig) -> SimulationResult<()> {
    if config.min_courses_per_room >= config.max_courses_per_room
        || config.max_courses_per_room > course_limits::MAX_COURSES_PER_ROOM
    {
        return Err(SimulationError::generation_error(format!(
            "cannot draw {}..{} courses per room",
            config.min_courses_per_room, config.max_courses_per_room
        )));
    }
    if config.earliest_start_hour > config.latest_start_hour
        || config.latest_start_hour > MAX_START_HOUR
    {
        return Err(SimulationError::InvalidHour(config.latest_start_hour));
    }
    if !(0.0..=1.0).contains(&config.composite_schedule_probability) {
        return Err(SimulationError::InvalidProbability(config.composite_schedule_probability));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::FacilityGenerator;
    use std::collections::HashMap;

    fn small_config() -> SimulationConfig {
        SimulationConfig { rooms_per_building: 10, num_students: 30, ..Default::default() }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = small_config();
        let registry = FacilityGenerator::new().generate_facilities(&config).unwrap();

        let first = CourseGenerator::with_seed(7).generate_courses(&config, &registry).unwrap();
        let second = CourseGenerator::with_seed(7).generate_courses(&config, &registry).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_course_ids_and_times_per_room() {
        let config = SimulationConfig { max_courses_per_room: 10, ..small_config() };
        let registry = FacilityGenerator::new().generate_facilities(&config).unwrap();
        let courses = CourseGenerator::with_seed(11).generate_courses(&config, &registry).unwrap();

        let mut times_by_room: HashMap<RoomId, HashSet<u32>> = HashMap::new();
        for course in &courses {
            let room = course.room_id().value();
            assert!(registry.contains_room(course.room_id()));
            assert!(course.id.value() >= room * 10 && course.id.value() < room * 10 + 10);
            assert!((9..=20).contains(&course.start_hour()));
            assert!(
                times_by_room.entry(course.room_id()).or_default().insert(course.packed_time()),
                "duplicate time in room {room}"
            );
        }

        for ids in times_by_room.values() {
            assert!(ids.len() < config.max_courses_per_room);
        }
    }

    #[test]
    fn test_composite_probability_extremes() {
        let mut config = small_config();
        config.composite_schedule_probability = 1.0;
        let mut generator = CourseGenerator::with_seed(3);
        for _ in 0..50 {
            let code = generator.random_packed_time(&config) / 100;
            assert!(code == 6 || code == 7);
        }

        config.composite_schedule_probability = 0.0;
        for _ in 0..50 {
            let code = generator.random_packed_time(&config) / 100;
            assert!((1..=5).contains(&code));
        }
    }

    #[test]
    fn test_unsampleable_ranges_are_errors() {
        let config = SimulationConfig {
            min_courses_per_room: 3,
            max_courses_per_room: 3,
            ..small_config()
        };
        assert!(CourseGenerator::with_seed(1).generate_room_courses(&config, RoomId::new(1)).is_err());

        let config = SimulationConfig { earliest_start_hour: 21, ..small_config() };
        assert!(matches!(
            CourseGenerator::with_seed(1).generate_room_courses(&config, RoomId::new(1)),
            Err(SimulationError::InvalidHour(20))
        ));
    }

    #[test]
    fn test_fixed_start_hour_range() {
        let config = SimulationConfig {
            earliest_start_hour: 14,
            latest_start_hour: 14,
            ..small_config()
        };
        let mut generator = CourseGenerator::with_seed(5);
        for _ in 0..20 {
            assert_eq!(generator.random_packed_time(&config) % 100, 14);
        }
    }
}
