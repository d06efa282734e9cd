//! Schedule resolution
//!
//! Decides which courses meet on a given calendar weekday. Weekdays use the ISO
//! numbering 1 = Monday .. 7 = Sunday. Schedule codes 1-5 name a single weekday;
//! 6 and 7 name the Monday/Wednesday and Tuesday/Thursday pairs.

use crate::course::Course;
use crate::types::{MON_WED_CODE, TUE_THU_CODE};
use chrono::{Datelike, NaiveDate};

/// ISO number of Saturday
pub const SATURDAY: u32 = 6;

/// ISO number of Sunday
pub const SUNDAY: u32 = 7;

/// Whether a course with `schedule_code` meets on `calendar_weekday`
///
/// Weekends never match. Codes 6 and 7 match their weekday pair. Any other code
/// matches only the weekday with the same number, so codes outside 1..=7 never
/// match anything.
pub fn meets_on(schedule_code: u32, calendar_weekday: u32) -> bool {
    if calendar_weekday == SATURDAY || calendar_weekday == SUNDAY {
        return false;
    }

    match schedule_code {
        MON_WED_CODE => calendar_weekday == 1 || calendar_weekday == 3,
        TUE_THU_CODE => calendar_weekday == 2 || calendar_weekday == 4,
        code => code == calendar_weekday,
    }
}

/// ISO weekday number of a date, Monday = 1
pub fn calendar_weekday(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// Courses meeting on `calendar_weekday`, in input order
pub fn active_courses(all_courses: &[Course], calendar_weekday: u32) -> Vec<&Course> {
    all_courses
        .iter()
        .filter(|course| course.schedule().meets_on(calendar_weekday))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CourseId, RoomId, ScheduleCode};

    #[test]
    fn test_single_day_codes_match_only_their_day() {
        for code in 1..=5 {
            for weekday in 1..=7 {
                assert_eq!(meets_on(code, weekday), code == weekday, "code {code} weekday {weekday}");
            }
        }
    }

    #[test]
    fn test_composite_codes() {
        let mon_wed: Vec<u32> = (1..=7).filter(|&d| meets_on(6, d)).collect();
        let tue_thu: Vec<u32> = (1..=7).filter(|&d| meets_on(7, d)).collect();
        assert_eq!(mon_wed, vec![1, 3]);
        assert_eq!(tue_thu, vec![2, 4]);
    }

    #[test]
    fn test_out_of_domain_codes_never_match() {
        for weekday in 1..=7 {
            assert!(!meets_on(0, weekday));
            assert!(!meets_on(8, weekday));
            assert!(!meets_on(u32::MAX, weekday));
        }
    }

    #[test]
    fn test_calendar_weekday() {
        let monday = NaiveDate::from_ymd_opt(2022, 1, 3).unwrap();
        assert_eq!(calendar_weekday(monday), 1);
        assert_eq!(calendar_weekday(monday + chrono::Duration::days(5)), SATURDAY);
        assert_eq!(calendar_weekday(monday + chrono::Duration::days(6)), SUNDAY);
    }

    #[test]
    fn test_active_courses_preserves_order() {
        let courses = vec![
            Course::from_code(CourseId::new(3), 7, 10, RoomId::new(1), 0.5).unwrap(),
            Course::from_code(CourseId::new(1), 2, 9, RoomId::new(1), 0.5).unwrap(),
            Course::from_code(CourseId::new(2), 1, 9, RoomId::new(2), 0.5).unwrap(),
            Course::new(CourseId::new(4), ScheduleCode::TueThuPair, 8, RoomId::new(2), 0.5)
                .unwrap(),
        ];

        let tuesday: Vec<u32> = active_courses(&courses, 2).iter().map(|c| c.id.value()).collect();
        assert_eq!(tuesday, vec![3, 1, 4]);

        assert!(active_courses(&courses, SATURDAY).is_empty());
        assert!(active_courses(&[], 1).is_empty());
    }
}
