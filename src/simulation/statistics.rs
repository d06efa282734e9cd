//! Statistics collection and reporting
//!
//! This module contains the run statistics gathered while stepping days: the
//! population size, per-day course and event counts, and timing.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Counts for a single simulated date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyStatistics {
    /// Simulated calendar date
    pub date: NaiveDate,
    /// ISO weekday number, Monday = 1
    pub weekday: u32,
    /// Courses meeting on this date
    pub active_courses: usize,
    /// Attendance events emitted
    pub events: usize,
}

impl DailyStatistics {
    /// Whether nothing met on this date
    pub fn is_idle(&self) -> bool {
        self.events == 0
    }
}

/// Statistics for one simulation run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationStatistics {
    // Population
    /// Total number of buildings
    pub total_buildings: usize,
    /// Total number of rooms
    pub total_rooms: usize,
    /// Total number of courses
    pub total_courses: usize,
    /// Courses meeting on a Mon/Wed or Tue/Thu pair
    pub composite_courses: usize,
    /// Total number of students
    pub total_students: usize,
    /// Total (student, course) enrollments
    pub total_enrollments: usize,

    // Events
    /// Total attendance events across all days
    pub total_events: usize,
    /// Per-day breakdown in simulation order
    pub daily: Vec<DailyStatistics>,

    /// Wall-clock time spent stepping days
    pub simulation_duration: Duration,
}

impl SimulationStatistics {
    /// Create statistics for a population with no simulated days yet
    pub fn new(
        total_buildings: usize,
        total_rooms: usize,
        total_courses: usize,
        composite_courses: usize,
        total_students: usize,
        total_enrollments: usize,
    ) -> Self {
        Self {
            total_buildings,
            total_rooms,
            total_courses,
            composite_courses,
            total_students,
            total_enrollments,
            total_events: 0,
            daily: Vec::new(),
            simulation_duration: Duration::ZERO,
        }
    }

    /// Record the outcome of one simulated date
    pub fn record_day(&mut self, date: NaiveDate, weekday: u32, active_courses: usize, events: usize) {
        self.total_events += events;
        self.daily.push(DailyStatistics { date, weekday, active_courses, events });
    }

    /// Add to the time spent stepping days
    pub fn add_duration(&mut self, elapsed: Duration) {
        self.simulation_duration += elapsed;
    }

    /// Number of simulated dates
    pub fn days_simulated(&self) -> usize {
        self.daily.len()
    }

    /// Dates on which no course met
    pub fn idle_days(&self) -> usize {
        self.daily.iter().filter(|day| day.is_idle()).count()
    }

    /// Mean events per simulated date
    pub fn average_events_per_day(&self) -> f64 {
        if self.daily.is_empty() {
            0.0
        } else {
            self.total_events as f64 / self.daily.len() as f64
        }
    }

    /// Mean enrollments per student
    pub fn average_courses_per_student(&self) -> f64 {
        if self.total_students == 0 {
            0.0
        } else {
            self.total_enrollments as f64 / self.total_students as f64
        }
    }

    /// Mean courses per room
    pub fn average_courses_per_room(&self) -> f64 {
        if self.total_rooms == 0 {
            0.0
        } else {
            self.total_courses as f64 / self.total_rooms as f64
        }
    }

    /// Percentage of courses on a weekday pair
    pub fn composite_percentage(&self) -> f64 {
        if self.total_courses == 0 {
            0.0
        } else {
            (self.composite_courses as f64 / self.total_courses as f64) * 100.0
        }
    }

    /// The date with the most events; the earliest wins a tie
    pub fn busiest_day(&self) -> Option<&DailyStatistics> {
        self.daily.iter().reduce(|best, day| if day.events > best.events { day } else { best })
    }

    /// One-line summary for log output
    pub fn compact_summary(&self) -> String {
        format!(
            "{} events over {} days ({:.1}/day) | {} students, {} courses, {} rooms",
            self.total_events,
            self.days_simulated(),
            self.average_events_per_day(),
            self.total_students,
            self.total_courses,
            self.total_rooms
        )
    }

    /// Multi-line human-readable report
    pub fn generate_summary_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Simulation Summary Report ===\n\n");
        report.push_str(&format!(
            "Simulation Duration: {:.2} seconds\n",
            self.simulation_duration.as_secs_f64()
        ));
        report.push_str(&format!("Days Simulated: {}\n\n", self.days_simulated()));

        report.push_str("Population:\n");
        report.push_str(&format!("  - Buildings: {}\n", self.total_buildings));
        report.push_str(&format!(
            "  - Rooms: {} (avg {:.1} courses/room)\n",
            self.total_rooms,
            self.average_courses_per_room()
        ));
        report.push_str(&format!(
            "  - Courses: {} ({:.1}% on weekday pairs)\n",
            self.total_courses,
            self.composite_percentage()
        ));
        report.push_str(&format!(
            "  - Students: {} (avg {:.1} courses/student)\n\n",
            self.total_students,
            self.average_courses_per_student()
        ));

        report.push_str("Attendance:\n");
        report.push_str(&format!(
            "  - Total Events: {} (avg {:.1}/day)\n",
            self.total_events,
            self.average_events_per_day()
        ));
        report.push_str(&format!("  - Idle Days: {}\n", self.idle_days()));
        if let Some(busiest) = self.busiest_day() {
            report.push_str(&format!(
                "  - Busiest Day: {} ({} events, {} courses)\n",
                busiest.date, busiest.events, busiest.active_courses
            ));
        }

        report
    }
}

impl fmt::Display for SimulationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generate_summary_report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, day).unwrap()
    }

    #[test]
    fn test_record_day_accumulates() {
        let mut stats = SimulationStatistics::new(1, 50, 120, 80, 3000, 9000);
        stats.record_day(date(3), 1, 40, 900);
        stats.record_day(date(8), 6, 0, 0);
        stats.record_day(date(5), 3, 42, 1100);

        assert_eq!(stats.total_events, 2000);
        assert_eq!(stats.days_simulated(), 3);
        assert_eq!(stats.idle_days(), 1);
        assert_eq!(stats.busiest_day().unwrap().date, date(5));
        assert!((stats.average_events_per_day() - 2000.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_averages_with_empty_population() {
        let stats = SimulationStatistics::new(0, 0, 0, 0, 0, 0);
        assert_eq!(stats.average_events_per_day(), 0.0);
        assert_eq!(stats.average_courses_per_student(), 0.0);
        assert_eq!(stats.average_courses_per_room(), 0.0);
        assert_eq!(stats.composite_percentage(), 0.0);
        assert!(stats.busiest_day().is_none());
    }

    #[test]
    fn test_busiest_day_tie_keeps_earliest() {
        let mut stats = SimulationStatistics::new(1, 1, 1, 0, 1, 1);
        stats.record_day(date(3), 1, 1, 5);
        stats.record_day(date(10), 1, 1, 5);
        assert_eq!(stats.busiest_day().unwrap().date, date(3));
    }

    #[test]
    fn test_summary_report_contents() {
        let mut stats = SimulationStatistics::new(1, 2, 4, 2, 10, 30);
        stats.record_day(date(3), 1, 2, 12);
        let report = stats.generate_summary_report();

        assert!(report.contains("Days Simulated: 1"));
        assert!(report.contains("Courses: 4 (50.0% on weekday pairs)"));
        assert!(report.contains("avg 3.0 courses/student"));
        assert!(report.contains("Busiest Day: 2022-01-03 (12 events, 2 courses)"));
        assert!(stats.compact_summary().starts_with("12 events over 1 days"));
    }
}
