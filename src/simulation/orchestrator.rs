//! Main simulation orchestrator
//!
//! This module contains the SimulationOrchestrator, which owns the generated
//! population, indexes enrollments once, and steps the calendar one day at a
//! time while accumulating the event log and run statistics.

use std::collections::HashSet;
use std::time::Instant;

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::course::{active_courses, calendar_weekday, Course, CourseGenerator};
use crate::events::{AttendanceEvent, DailyAttendanceGenerator, EnrollmentIndex, EventLog};
use crate::facility::{FacilityGenerator, FacilityRegistry};
use crate::sim_event;
use crate::simulation::{SimulationError, SimulationResult, SimulationStatistics};
use crate::student::{Student, StudentGenerator};
use crate::types::SimulationConfig;

/// Offset between the course and student generator seeds
const STUDENT_SEED_OFFSET: u64 = 0x5DEE_CE66;

/// Main simulation orchestrator that coordinates all components
#[derive(Debug)]
pub struct SimulationOrchestrator {
    /// Configuration for the simulation
    config: SimulationConfig,
    /// Seed the population was generated from, if generated here
    seed: Option<u64>,
    /// Registry of all buildings and rooms
    registry: FacilityRegistry,
    /// All courses in generation order
    courses: Vec<Course>,
    /// All students in id order
    students: Vec<Student>,
    /// Day generator holding the enrollment index
    generator: DailyAttendanceGenerator,
    /// Statistics accumulated across stepped days
    statistics: SimulationStatistics,
}

impl SimulationOrchestrator {
    /// Validate `config` and generate a fresh population from it
    ///
    /// When `config.seed` is unset a seed is drawn and logged so the run can be
    /// reproduced with `--seed`.
    #[instrument(skip(config), fields(buildings = config.num_buildings, students = config.num_students))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let seed = match config.seed {
            Some(seed) => {
                info!("Using deterministic seed: {}", seed);
                seed
            }
            None => {
                let seed = rand::thread_rng().gen::<u64>();
                warn!("No seed configured, generated seed {} (pass --seed {} to reproduce)", seed, seed);
                seed
            }
        };

        let registry = FacilityGenerator::new().generate_facilities(&config)?;
        let courses = CourseGenerator::with_seed(seed).generate_courses(&config, &registry)?;
        let students = StudentGenerator::with_seed(seed.wrapping_add(STUDENT_SEED_OFFSET))
            .generate_students(&config, &courses)?;

        let mut orchestrator = Self::assemble(config, registry, courses, students);
        orchestrator.seed = Some(seed);
        Ok(orchestrator)
    }

    /// Build an orchestrator over an existing population
    ///
    /// Every course must occupy a room in `registry` and every enrollment must
    /// name one of `courses`.
    pub fn from_population(
        config: SimulationConfig,
        registry: FacilityRegistry,
        courses: Vec<Course>,
        students: Vec<Student>,
    ) -> SimulationResult<Self> {
        if let Some(course) = courses.iter().find(|course| !registry.contains_room(course.room_id())) {
            return Err(SimulationError::UnknownRoom(course.room_id()));
        }

        let course_ids: HashSet<_> = courses.iter().map(|course| course.id).collect();
        for student in &students {
            if let Some(&missing) = student.courses().iter().find(|id| !course_ids.contains(id)) {
                return Err(SimulationError::UnknownCourse(missing));
            }
        }

        Ok(Self::assemble(config, registry, courses, students))
    }

    fn assemble(
        config: SimulationConfig,
        registry: FacilityRegistry,
        courses: Vec<Course>,
        students: Vec<Student>,
    ) -> Self {
        let generator = DailyAttendanceGenerator::new(&students);
        let composite = courses.iter().filter(|course| course.schedule().is_composite()).count();
        let statistics = SimulationStatistics::new(
            registry.building_count(),
            registry.total_room_count(),
            courses.len(),
            composite,
            students.len(),
            generator.index().enrollment_count(),
        );

        info!(
            "Orchestrator initialized with {} buildings, {} rooms, {} courses, {} students",
            statistics.total_buildings,
            statistics.total_rooms,
            statistics.total_courses,
            statistics.total_students
        );

        Self { config, seed: None, registry, courses, students, generator, statistics }
    }

    /// Simulate a single date and record its statistics
    pub fn step_day(&mut self, date: NaiveDate) -> Vec<AttendanceEvent> {
        let started = Instant::now();
        let weekday = calendar_weekday(date);
        let active = active_courses(&self.courses, weekday).len();

        let events = self.generator.step_day(&self.courses, date);

        self.statistics.record_day(date, weekday, active, events.len());
        self.statistics.add_duration(started.elapsed());
        debug!("{}: {} active courses, {} events", date, active, events.len());
        events
    }

    /// Simulate the configured horizon from the configured start date
    pub fn run(&mut self) -> EventLog {
        self.run_for(self.config.start_date, self.config.days)
    }

    /// Simulate `days` consecutive dates beginning at `start`
    #[instrument(skip(self))]
    pub fn run_for(&mut self, start: NaiveDate, days: usize) -> EventLog {
        let mut log = EventLog::new();

        let mut simulated = 0;
        for date in start.iter_days().take(days) {
            log.extend(self.step_day(date));
            simulated += 1;
        }
        if simulated < days {
            warn!("Calendar ended after {} of {} days", simulated, days);
        }

        sim_event!(info, "Simulation finished", days = simulated, events = log.len());
        log
    }

    /// Configuration in use
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seed the population was generated from
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Buildings and rooms
    pub fn registry(&self) -> &FacilityRegistry {
        &self.registry
    }

    /// All courses
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All students
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Course to enrolled students lookup
    pub fn enrollment_index(&self) -> &EnrollmentIndex {
        self.generator.index()
    }

    /// Statistics accumulated so far
    pub fn statistics(&self) -> &SimulationStatistics {
        &self.statistics
    }
}
