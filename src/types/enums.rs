//! Enumeration types for the campus contact simulator
//!
//! This module contains the enumeration types used throughout the simulation system:
//! the teaching weekday, the tagged schedule code that replaces the overloaded
//! integer day encoding, and the output format.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Raw schedule code for the Monday/Wednesday pair
pub const MON_WED_CODE: u32 = 6;

/// Raw schedule code for the Tuesday/Thursday pair
pub const TUE_THU_CODE: u32 = 7;

/// A weekday on which a single-day course can meet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchoolDay {
    /// Monday (code 1)
    Monday,
    /// Tuesday (code 2)
    Tuesday,
    /// Wednesday (code 3)
    Wednesday,
    /// Thursday (code 4)
    Thursday,
    /// Friday (code 5)
    Friday,
}

impl SchoolDay {
    /// All teaching days in calendar order
    pub const ALL: [SchoolDay; 5] = [
        SchoolDay::Monday,
        SchoolDay::Tuesday,
        SchoolDay::Wednesday,
        SchoolDay::Thursday,
        SchoolDay::Friday,
    ];

    /// ISO weekday number, Monday = 1
    pub fn number(self) -> u32 {
        match self {
            SchoolDay::Monday => 1,
            SchoolDay::Tuesday => 2,
            SchoolDay::Wednesday => 3,
            SchoolDay::Thursday => 4,
            SchoolDay::Friday => 5,
        }
    }

    /// Look up a teaching day by its ISO number; weekends and out-of-range values yield `None`
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.number() == number)
    }
}

impl fmt::Display for SchoolDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchoolDay::Monday => write!(f, "Monday"),
            SchoolDay::Tuesday => write!(f, "Tuesday"),
            SchoolDay::Wednesday => write!(f, "Wednesday"),
            SchoolDay::Thursday => write!(f, "Thursday"),
            SchoolDay::Friday => write!(f, "Friday"),
        }
    }
}

/// Which calendar weekdays a course meets on
///
/// The raw integer encoding packs two meanings into one range: 1-5 name a single
/// weekday while 6 and 7 name the Monday/Wednesday and Tuesday/Thursday pairs.
/// This type keeps those apart. It serializes as the raw integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleCode {
    /// Meets on one weekday only
    SingleDay(SchoolDay),
    /// Meets on Monday and Wednesday
    MonWedPair,
    /// Meets on Tuesday and Thursday
    TueThuPair,
}

impl ScheduleCode {
    /// Decode a raw schedule code; returns `None` outside 1..=7
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            MON_WED_CODE => Some(ScheduleCode::MonWedPair),
            TUE_THU_CODE => Some(ScheduleCode::TueThuPair),
            other => SchoolDay::from_number(other).map(ScheduleCode::SingleDay),
        }
    }

    /// Raw integer code used by the flat-file tables
    pub fn code(self) -> u32 {
        match self {
            ScheduleCode::SingleDay(day) => day.number(),
            ScheduleCode::MonWedPair => MON_WED_CODE,
            ScheduleCode::TueThuPair => TUE_THU_CODE,
        }
    }

    /// Whether this schedule meets on the given calendar weekday (1 = Monday .. 7 = Sunday)
    pub fn meets_on(self, calendar_weekday: u32) -> bool {
        crate::course::schedule::meets_on(self.code(), calendar_weekday)
    }

    /// Teaching days this schedule covers, in calendar order
    pub fn days(self) -> Vec<SchoolDay> {
        match self {
            ScheduleCode::SingleDay(day) => vec![day],
            ScheduleCode::MonWedPair => vec![SchoolDay::Monday, SchoolDay::Wednesday],
            ScheduleCode::TueThuPair => vec![SchoolDay::Tuesday, SchoolDay::Thursday],
        }
    }

    /// Whether this is one of the two-day composite codes
    pub fn is_composite(self) -> bool {
        !matches!(self, ScheduleCode::SingleDay(_))
    }
}

impl fmt::Display for ScheduleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleCode::SingleDay(day) => write!(f, "{}", day),
            ScheduleCode::MonWedPair => write!(f, "Mon/Wed"),
            ScheduleCode::TueThuPair => write!(f, "Tue/Thu"),
        }
    }
}

impl Serialize for ScheduleCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.code())
    }
}

impl<'de> Deserialize<'de> for ScheduleCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u32::deserialize(deserializer)?;
        ScheduleCode::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid schedule code {}", code)))
    }
}

/// Output format options for exported rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// JSON lines, one object per row
    Json,
    /// Comma-separated rows with a header line
    Csv,
}

impl OutputFormat {
    /// File extension used for files in this format
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "jsonl" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_day_numbers() {
        assert_eq!(SchoolDay::Monday.number(), 1);
        assert_eq!(SchoolDay::Friday.number(), 5);
        assert_eq!(SchoolDay::from_number(3), Some(SchoolDay::Wednesday));
        assert_eq!(SchoolDay::from_number(6), None);
        assert_eq!(SchoolDay::from_number(0), None);
    }

    #[test]
    fn test_schedule_code_round_trip_over_domain() {
        for code in 1..=7 {
            let schedule = ScheduleCode::from_code(code).unwrap();
            assert_eq!(schedule.code(), code);
        }
        assert_eq!(ScheduleCode::from_code(0), None);
        assert_eq!(ScheduleCode::from_code(8), None);
    }

    #[test]
    fn test_codes_six_and_seven_are_pairs_not_weekends() {
        assert_eq!(ScheduleCode::from_code(6), Some(ScheduleCode::MonWedPair));
        assert_eq!(ScheduleCode::from_code(7), Some(ScheduleCode::TueThuPair));
        assert!(ScheduleCode::MonWedPair.is_composite());
        assert!(!ScheduleCode::SingleDay(SchoolDay::Friday).is_composite());
    }

    #[test]
    fn test_schedule_days() {
        assert_eq!(
            ScheduleCode::MonWedPair.days(),
            vec![SchoolDay::Monday, SchoolDay::Wednesday]
        );
        assert_eq!(
            ScheduleCode::TueThuPair.days(),
            vec![SchoolDay::Tuesday, SchoolDay::Thursday]
        );
        assert_eq!(
            ScheduleCode::SingleDay(SchoolDay::Tuesday).days(),
            vec![SchoolDay::Tuesday]
        );
    }

    #[test]
    fn test_schedule_code_display() {
        assert_eq!(ScheduleCode::SingleDay(SchoolDay::Monday).to_string(), "Monday");
        assert_eq!(ScheduleCode::MonWedPair.to_string(), "Mon/Wed");
        assert_eq!(ScheduleCode::TueThuPair.to_string(), "Tue/Thu");
    }

    #[test]
    fn test_schedule_code_serde_uses_raw_code() {
        assert_eq!(serde_json::to_string(&ScheduleCode::TueThuPair).unwrap(), "7");
        let parsed: ScheduleCode = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, ScheduleCode::SingleDay(SchoolDay::Thursday));
        assert!(serde_json::from_str::<ScheduleCode>("9").is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.extension(), "jsonl");
        assert_eq!(format!("{}", OutputFormat::Csv), "CSV");
    }
}
