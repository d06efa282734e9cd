//! Configuration structures for the campus contact simulator
//!
//! This module contains the simulation configuration structure and validation logic
//! used to control the population generator, the simulated horizon, and the
//! exported output.

use super::OutputFormat;
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Course generation constants
pub mod course_limits {
    /// Earliest hour a generated course may start
    pub const DEFAULT_EARLIEST_START_HOUR: u32 = 9;

    /// Latest hour a generated course may start
    pub const DEFAULT_LATEST_START_HOUR: u32 = 20;

    /// Upper bound (exclusive) on courses per room; course ids are `index + room_id * 10`
    pub const MAX_COURSES_PER_ROOM: usize = 10;

    /// Upper bound on rooms per building; room ids are `building_id * 100 + index + 1`
    pub const MAX_ROOMS_PER_BUILDING: usize = 99;

    /// Upper bound on buildings, keeping every course id within `u32`
    pub const MAX_BUILDINGS: usize = 10_000;

    /// Upper bound on students; student ids are `u32`
    pub const MAX_STUDENTS: usize = 10_000_000;

    /// Upper bound on the simulated horizon (one hundred years)
    pub const MAX_DAYS: usize = 36_525;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "campus-contact-sim",
    version = "0.1.0",
    about = "Campus Contact Simulator - Generates student attendance logs and traces contacts",
    long_about = "Synthesizes buildings, rooms, courses and students, simulates day-by-day course attendance to produce a timestamped event log, and optionally infers every student who shared a room and hour with an index student.

EXAMPLES:
    # Run with default settings (3000 students, 14 days from 2022-01-03)
    campus-contact-sim

    # Use a configuration file
    campus-contact-sim --config config.json

    # Write flat-file tables and trace contacts of student 17
    campus-contact-sim --seed 42 --output-dir out --index-student 17

    # Generate configuration template
    campus-contact-sim --print-config > my-config.json

    # Validate configuration without running
    campus-contact-sim --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of buildings to create
    #[arg(long, help = "Number of buildings")]
    pub num_buildings: Option<usize>,

    /// Number of rooms in every building
    #[arg(long, help = "Rooms per building (1-99)")]
    pub rooms_per_building: Option<usize>,

    /// Number of students to simulate
    #[arg(
        long,
        help = "Number of students to simulate",
        long_help = "Total number of students in the simulation. Must be greater than 0. Default: 3000"
    )]
    pub num_students: Option<usize>,

    /// Minimum number of courses scheduled in a room
    #[arg(long, help = "Minimum courses per room (inclusive)")]
    pub min_courses_per_room: Option<usize>,

    /// Maximum number of courses scheduled in a room
    #[arg(long, help = "Maximum courses per room (exclusive)")]
    pub max_courses_per_room: Option<usize>,

    /// Minimum number of courses a student enrolls in
    #[arg(long, help = "Minimum courses per student (inclusive)")]
    pub min_courses_per_student: Option<usize>,

    /// Maximum number of courses a student enrolls in
    #[arg(long, help = "Maximum courses per student (inclusive)")]
    pub max_courses_per_student: Option<usize>,

    /// Probability that a generated course uses a two-day schedule (0.0-1.0)
    #[arg(
        long,
        help = "Probability of Mon/Wed or Tue/Thu schedules (0.0-1.0)",
        long_help = "Probability that a generated course meets on the Monday/Wednesday or Tuesday/Thursday pair instead of a single weekday. Range: 0.0-1.0. Default: 0.65"
    )]
    pub composite_schedule_probability: Option<f64>,

    /// Attendance probability carried on every generated course (0.0-1.0)
    #[arg(long, help = "Course attendance probability (0.0-1.0)")]
    pub attendance_probability: Option<f64>,

    /// First simulated calendar date
    #[arg(long, help = "First simulated date (YYYY-MM-DD)")]
    pub start_date: Option<NaiveDate>,

    /// Number of days to simulate
    #[arg(
        long,
        help = "Number of days to simulate",
        long_help = "Number of consecutive calendar days to simulate. Must be greater than 0. Default: 14"
    )]
    pub days: Option<usize>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Directory for flat-file output
    #[arg(
        long,
        help = "Directory for flat-file output",
        long_help = "Directory receiving buildings, rooms, courses, students, student_courses and records tables. When omitted, event rows are written to stdout."
    )]
    pub output_dir: Option<String>,

    /// Output format for event and contact rows
    #[arg(long, help = "Output format (json or csv)")]
    pub output_format: Option<String>,

    /// Student to run exposure inference for after the simulation
    #[arg(long, help = "Index student id for exposure inference")]
    pub index_student: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of buildings to create
    pub num_buildings: Option<usize>,
    /// Number of rooms in every building
    pub rooms_per_building: Option<usize>,
    /// Number of students to simulate
    pub num_students: Option<usize>,
    /// Minimum courses per room (inclusive)
    pub min_courses_per_room: Option<usize>,
    /// Maximum courses per room (exclusive)
    pub max_courses_per_room: Option<usize>,
    /// Minimum courses per student (inclusive)
    pub min_courses_per_student: Option<usize>,
    /// Maximum courses per student (inclusive)
    pub max_courses_per_student: Option<usize>,
    /// Probability of a two-day schedule
    pub composite_schedule_probability: Option<f64>,
    /// Attendance probability carried on courses
    pub attendance_probability: Option<f64>,
    /// Earliest generated start hour
    pub earliest_start_hour: Option<u32>,
    /// Latest generated start hour
    pub latest_start_hour: Option<u32>,
    /// First simulated date
    pub start_date: Option<NaiveDate>,
    /// Number of days to simulate
    pub days: Option<usize>,
    /// Random seed for reproducible results
    pub seed: Option<u64>,
    /// Directory for flat-file output
    pub output_dir: Option<String>,
    /// Output format for event and contact rows
    pub output_format: Option<String>,
    /// Index student for exposure inference
    pub index_student: Option<u32>,
}

/// Configuration for the campus contact simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of buildings to create
    pub num_buildings: usize,

    /// Number of rooms in every building
    pub rooms_per_building: usize,

    /// Number of students to simulate
    pub num_students: usize,

    /// Minimum number of courses per room (inclusive)
    pub min_courses_per_room: usize,

    /// Maximum number of courses per room (exclusive)
    pub max_courses_per_room: usize,

    /// Minimum number of courses per student (inclusive)
    pub min_courses_per_student: usize,

    /// Maximum number of courses per student (inclusive)
    pub max_courses_per_student: usize,

    /// Probability that a generated course meets on a two-day pair (0.0-1.0)
    pub composite_schedule_probability: f64,

    /// Attendance probability carried on every course (0.0-1.0), not applied
    pub attendance_probability: f64,

    /// Earliest generated course start hour
    pub earliest_start_hour: u32,

    /// Latest generated course start hour
    pub latest_start_hour: u32,

    /// First simulated calendar date
    pub start_date: NaiveDate,

    /// Number of days to simulate
    pub days: usize,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Directory for flat-file output
    pub output_dir: Option<String>,

    /// Output format for event and contact rows
    pub output_format: String,

    /// Index student for exposure inference
    pub index_student: Option<u32>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Building count is invalid
    #[error("Building count must be between 1 and {max}, got {value}")]
    InvalidBuildingCount {
        /// The invalid building count
        value: usize,
        /// Largest supported building count
        max: usize,
    },

    /// Room count is invalid
    #[error("Rooms per building must be between 1 and {max}, got {value}")]
    InvalidRoomCount {
        /// The invalid room count
        value: usize,
        /// Largest supported room count
        max: usize,
    },

    /// Student count is invalid
    #[error("Student count must be between 1 and {max}, got {value}")]
    InvalidStudentCount {
        /// The invalid student count
        value: usize,
        /// Largest supported student count
        max: usize,
    },

    /// Days count is invalid
    #[error("Days count must be between 1 and {max}, got {value}")]
    InvalidDaysCount {
        /// The invalid days count
        value: usize,
        /// Longest supported horizon
        max: usize,
    },

    /// Simulated horizon runs past the last representable date
    #[error("Simulating {days} days from {start_date} runs past the supported calendar")]
    DateOutOfRange {
        /// First simulated date
        start_date: NaiveDate,
        /// Requested number of days
        days: usize,
    },

    /// Courses per room range is invalid
    #[error("Invalid courses-per-room range: min ({0}) must be < max ({1}) and max <= 10")]
    InvalidCoursesPerRoomRange(usize, usize),

    /// Courses per student range is invalid
    #[error("Invalid courses-per-student range: min ({0}) must be > 0 and <= max ({1})")]
    InvalidCoursesPerStudentRange(usize, usize),

    /// Start hour range is invalid
    #[error("Invalid start hour range: {0}..={1} (hours must be 0-23, earliest <= latest)")]
    InvalidStartHourRange(u32, u32),

    /// Percentage value is out of range
    #[error("Invalid percentage for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidPercentage {
        /// Name of the field with invalid percentage
        field: String,
        /// The invalid percentage value
        value: f64,
    },

    /// Output format is not recognised
    #[error("Unknown output format: {0} (supported: json, csv)")]
    InvalidOutputFormat(String),

    /// Index student is outside the generated population
    #[error("Index student {index} does not exist in a population of {num_students}")]
    InvalidIndexStudent {
        /// The requested index student
        index: u32,
        /// Number of generated students
        num_students: usize,
    },
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_buildings: 1,
            rooms_per_building: 50,
            num_students: 3000,
            min_courses_per_room: 1,
            max_courses_per_room: 4,
            min_courses_per_student: 2,
            max_courses_per_student: 4,
            composite_schedule_probability: 0.65,
            attendance_probability: 0.5,
            earliest_start_hour: course_limits::DEFAULT_EARLIEST_START_HOUR,
            latest_start_hour: course_limits::DEFAULT_LATEST_START_HOUR,
            start_date: default_start_date(),
            days: 14,
            seed: None,
            output_dir: None,
            output_format: "csv".to_string(),
            index_student: None,
        }
    }
}

/// Monday 2022-01-03, the first simulated day unless configured otherwise
fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 3).unwrap_or(NaiveDate::MIN)
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(config_path) => Self::from_file(config_path)?,
            None => Self::default(),
        };

        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            num_buildings: file.num_buildings.unwrap_or(defaults.num_buildings),
            rooms_per_building: file.rooms_per_building.unwrap_or(defaults.rooms_per_building),
            num_students: file.num_students.unwrap_or(defaults.num_students),
            min_courses_per_room: file
                .min_courses_per_room
                .unwrap_or(defaults.min_courses_per_room),
            max_courses_per_room: file
                .max_courses_per_room
                .unwrap_or(defaults.max_courses_per_room),
            min_courses_per_student: file
                .min_courses_per_student
                .unwrap_or(defaults.min_courses_per_student),
            max_courses_per_student: file
                .max_courses_per_student
                .unwrap_or(defaults.max_courses_per_student),
            composite_schedule_probability: file
                .composite_schedule_probability
                .unwrap_or(defaults.composite_schedule_probability),
            attendance_probability: file
                .attendance_probability
                .unwrap_or(defaults.attendance_probability),
            earliest_start_hour: file.earliest_start_hour.unwrap_or(defaults.earliest_start_hour),
            latest_start_hour: file.latest_start_hour.unwrap_or(defaults.latest_start_hour),
            start_date: file.start_date.unwrap_or(defaults.start_date),
            days: file.days.unwrap_or(defaults.days),
            seed: file.seed.or(defaults.seed),
            output_dir: file.output_dir.or(defaults.output_dir),
            output_format: file.output_format.unwrap_or(defaults.output_format),
            index_student: file.index_student.or(defaults.index_student),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.num_buildings {
            config.num_buildings = value;
        }
        if let Some(value) = args.rooms_per_building {
            config.rooms_per_building = value;
        }
        if let Some(value) = args.num_students {
            config.num_students = value;
        }
        if let Some(value) = args.min_courses_per_room {
            config.min_courses_per_room = value;
        }
        if let Some(value) = args.max_courses_per_room {
            config.max_courses_per_room = value;
        }
        if let Some(value) = args.min_courses_per_student {
            config.min_courses_per_student = value;
        }
        if let Some(value) = args.max_courses_per_student {
            config.max_courses_per_student = value;
        }
        if let Some(value) = args.composite_schedule_probability {
            config.composite_schedule_probability = value;
        }
        if let Some(value) = args.attendance_probability {
            config.attendance_probability = value;
        }
        if let Some(value) = args.start_date {
            config.start_date = value;
        }
        if let Some(value) = args.days {
            config.days = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_dir {
            config.output_dir = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.index_student {
            config.index_student = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.num_buildings == 0 || self.num_buildings > course_limits::MAX_BUILDINGS {
            return Err(ConfigValidationError::InvalidBuildingCount {
                value: self.num_buildings,
                max: course_limits::MAX_BUILDINGS,
            });
        }

        if self.rooms_per_building == 0
            || self.rooms_per_building > course_limits::MAX_ROOMS_PER_BUILDING
        {
            return Err(ConfigValidationError::InvalidRoomCount {
                value: self.rooms_per_building,
                max: course_limits::MAX_ROOMS_PER_BUILDING,
            });
        }

        if self.num_students == 0 || self.num_students > course_limits::MAX_STUDENTS {
            return Err(ConfigValidationError::InvalidStudentCount {
                value: self.num_students,
                max: course_limits::MAX_STUDENTS,
            });
        }

        if self.days == 0 || self.days > course_limits::MAX_DAYS {
            return Err(ConfigValidationError::InvalidDaysCount {
                value: self.days,
                max: course_limits::MAX_DAYS,
            });
        }

        if self.end_date().is_none() {
            return Err(ConfigValidationError::DateOutOfRange {
                start_date: self.start_date,
                days: self.days,
            });
        }

        if self.min_courses_per_room >= self.max_courses_per_room
            || self.max_courses_per_room > course_limits::MAX_COURSES_PER_ROOM
        {
            return Err(ConfigValidationError::InvalidCoursesPerRoomRange(
                self.min_courses_per_room,
                self.max_courses_per_room,
            ));
        }

        if self.min_courses_per_student == 0
            || self.min_courses_per_student > self.max_courses_per_student
        {
            return Err(ConfigValidationError::InvalidCoursesPerStudentRange(
                self.min_courses_per_student,
                self.max_courses_per_student,
            ));
        }

        if self.earliest_start_hour > self.latest_start_hour || self.latest_start_hour > 23 {
            return Err(ConfigValidationError::InvalidStartHourRange(
                self.earliest_start_hour,
                self.latest_start_hour,
            ));
        }

        self.validate_percentage(
            "composite_schedule_probability",
            self.composite_schedule_probability,
        )?;
        self.validate_percentage("attendance_probability", self.attendance_probability)?;

        self.get_output_format()?;

        if let Some(index) = self.index_student {
            if index as usize >= self.num_students {
                return Err(ConfigValidationError::InvalidIndexStudent {
                    index,
                    num_students: self.num_students,
                });
            }
        }

        Ok(())
    }

    /// Helper method to validate percentage values
    fn validate_percentage(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigValidationError::InvalidPercentage {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))
    }

    /// Total number of rooms the facility generator will create
    pub fn total_rooms(&self) -> usize {
        self.num_buildings * self.rooms_per_building
    }

    /// Last simulated calendar date (inclusive), `None` past the end of the calendar
    pub fn end_date(&self) -> Option<NaiveDate> {
        let span = i64::try_from(self.days.saturating_sub(1)).ok()?;
        self.start_date.checked_add_signed(chrono::Duration::try_days(span)?)
    }
}
