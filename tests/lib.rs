// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use campus_contact_sim::*;



// Population, configuration, and output
mod population_generation_tests;

#[test]
fn test_core_id_types() {
    let room_id = RoomId::new(101);
    let course_id: CourseId = 1013.into();

    assert_eq!(room_id.value(), 101);
    assert_eq!(course_id.to_string(), "1013");
    assert_eq!(StudentId::new(7).label(), "STUDENT_7");
    assert_eq!(BuildingId::new(1).label(), "BLD_1");
}

#[test]
fn test_id_parsing_accepts_labels() {
    assert_eq!("ROOM_101".parse::<RoomId>().unwrap(), RoomId::new(101));
    assert_eq!("101".parse::<RoomId>().unwrap(), RoomId::new(101));
    assert!("room".parse::<RoomId>().is_err());
}

#[test]
fn test_ids_serialize_as_bare_integers() {
    assert_eq!(serde_json::to_string(&StudentId::new(12)).unwrap(), "12");
    let parsed: CourseId = serde_json::from_str("1010").unwrap();
    assert_eq!(parsed, CourseId::new(1010));
}

#[test]
fn test_schedule_codes_serialize_as_raw_values() {
    assert_eq!(serde_json::to_string(&ScheduleCode::TueThuPair).unwrap(), "7");
    let parsed: ScheduleCode = serde_json::from_str("3").unwrap();
    assert_eq!(parsed, ScheduleCode::SingleDay(SchoolDay::Wednesday));
    assert!(serde_json::from_str::<ScheduleCode>("9").is_err());
}
