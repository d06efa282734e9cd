//! Tests for seeded population generation
//!
//! These tests verify the id schemes for rooms and courses, per-room time
//! uniqueness, and per-student enrollment ranges.

use campus_contact_sim::simulation::{SimulationError, SimulationOrchestrator};
use campus_contact_sim::types::SimulationConfig;
use std::collections::{HashMap, HashSet};

fn config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        num_buildings: 3,
        rooms_per_building: 12,
        num_students: 500,
        max_courses_per_room: 8,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn test_room_ids_follow_building_scheme() {
    let orchestrator = SimulationOrchestrator::new(config(1)).unwrap();

    for building in orchestrator.registry().buildings() {
        for (index, room) in building.rooms.iter().enumerate() {
            assert_eq!(room.id.value(), building.id.value() * 100 + index as u32 + 1);
            assert_eq!(room.building_id, building.id);
        }
    }
    assert_eq!(orchestrator.registry().total_room_count(), 36);
}

#[test]
fn test_course_ids_and_times_per_room() {
    let orchestrator = SimulationOrchestrator::new(config(2)).unwrap();
    let mut times: HashMap<u32, HashSet<u32>> = HashMap::new();
    let mut ids = HashSet::new();

    for course in orchestrator.courses() {
        let room = course.room_id().value();
        let index = course.id.value() - room * 10;
        assert!(index < 8, "course {} has draw index {}", course.id, index);
        assert!(ids.insert(course.id), "duplicate course id {}", course.id);
        assert!(times.entry(room).or_default().insert(course.packed_time()));
        assert!((9..=20).contains(&course.start_hour()));
        assert!(orchestrator.registry().contains_room(course.room_id()));
    }
}

#[test]
fn test_students_have_distinct_courses_in_range() {
    let orchestrator = SimulationOrchestrator::new(config(3)).unwrap();
    let course_ids: HashSet<_> = orchestrator.courses().iter().map(|c| c.id).collect();

    assert_eq!(orchestrator.students().len(), 500);
    for (index, student) in orchestrator.students().iter().enumerate() {
        assert_eq!(student.id.value(), index as u32);
        assert!((2..=4).contains(&student.course_count()));

        let distinct: HashSet<_> = student.courses().iter().copied().collect();
        assert_eq!(distinct.len(), student.course_count());
        assert!(distinct.is_subset(&course_ids));
    }
}

#[test]
fn test_identical_seeds_give_identical_populations() {
    let first = SimulationOrchestrator::new(config(4)).unwrap();
    let second = SimulationOrchestrator::new(config(4)).unwrap();
    let other = SimulationOrchestrator::new(config(5)).unwrap();

    assert_eq!(first.courses(), second.courses());
    assert_eq!(first.students(), second.students());
    assert!(first.courses() != other.courses() || first.students() != other.students());
}

#[test]
fn test_composite_share_tracks_probability() {
    let all_pairs = SimulationConfig { composite_schedule_probability: 1.0, ..config(6) };
    let orchestrator = SimulationOrchestrator::new(all_pairs).unwrap();
    assert!(orchestrator.courses().iter().all(|c| c.schedule().is_composite()));

    let no_pairs = SimulationConfig { composite_schedule_probability: 0.0, ..config(6) };
    let orchestrator = SimulationOrchestrator::new(no_pairs).unwrap();
    assert!(orchestrator.courses().iter().all(|c| !c.schedule().is_composite()));
    assert_eq!(orchestrator.statistics().composite_courses, 0);
}

#[test]
fn test_statistics_reflect_population() {
    let orchestrator = SimulationOrchestrator::new(config(7)).unwrap();
    let stats = orchestrator.statistics();

    assert_eq!(stats.total_buildings, 3);
    assert_eq!(stats.total_rooms, 36);
    assert_eq!(stats.total_courses, orchestrator.courses().len());
    assert_eq!(stats.total_students, 500);
    let enrollments: usize = orchestrator.students().iter().map(|s| s.course_count()).sum();
    assert_eq!(stats.total_enrollments, enrollments);
    assert_eq!(orchestrator.enrollment_index().enrollment_count(), enrollments);
}

#[test]
fn test_too_many_rooms_is_a_configuration_error() {
    let config = SimulationConfig { rooms_per_building: 100, ..config(8) };
    let error = SimulationOrchestrator::new(config).unwrap_err();
    assert!(matches!(error, SimulationError::ConfigurationError(_)));
    assert_eq!(error.category(), "Configuration");
}
