//! Flat-file export
//!
//! Writes the generated population as one CSV table per entity, and the event
//! log and exposure contacts as CSV or JSON lines. Every writer has a generic
//! `W: Write` form so rows can go to a file or straight to stdout.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::course::Course;
use crate::events::AttendanceEvent;
use crate::exposure::{Contact, ExposureReport};
use crate::facility::FacilityRegistry;
use crate::simulation::SimulationResult;
use crate::student::Student;
use crate::types::OutputFormat;

/// Building table file name
pub const BUILDINGS_FILE: &str = "buildings.csv";
/// Room table file name
pub const ROOMS_FILE: &str = "rooms.csv";
/// Course table file name
pub const COURSES_FILE: &str = "courses.csv";
/// Student table file name
pub const STUDENTS_FILE: &str = "students.csv";
/// Enrollment table file name
pub const STUDENT_COURSES_FILE: &str = "student_courses.csv";
/// Event log file stem; the extension follows the output format
pub const RECORDS_STEM: &str = "records";

/// Write `building_id` rows
pub fn write_buildings<W: Write>(writer: &mut W, registry: &FacilityRegistry) -> SimulationResult<()> {
    writeln!(writer, "building_id")?;
    for building in registry.buildings() {
        writeln!(writer, "{}", building.id)?;
    }
    Ok(())
}

/// Write `room_id,building_id` rows
pub fn write_rooms<W: Write>(writer: &mut W, registry: &FacilityRegistry) -> SimulationResult<()> {
    writeln!(writer, "room_id,building_id")?;
    for room in registry.rooms() {
        writeln!(writer, "{}", room.to_csv_row())?;
    }
    Ok(())
}

/// Write `course_id,room_id,dow_id,hour` rows
pub fn write_courses<W: Write>(writer: &mut W, courses: &[Course]) -> SimulationResult<()> {
    writeln!(writer, "course_id,room_id,dow_id,hour")?;
    for course in courses {
        writeln!(writer, "{}", course.to_csv_row())?;
    }
    Ok(())
}

/// Write `student_id` rows
pub fn write_students<W: Write>(writer: &mut W, students: &[Student]) -> SimulationResult<()> {
    writeln!(writer, "student_id")?;
    for student in students {
        writeln!(writer, "{}", student.id)?;
    }
    Ok(())
}

/// Write one `student_id,course_id` row per enrollment
pub fn write_enrollments<W: Write>(writer: &mut W, students: &[Student]) -> SimulationResult<()> {
    writeln!(writer, "student_id,course_id")?;
    for student in students {
        for row in student.enrollment_rows() {
            writeln!(writer, "{}", row)?;
        }
    }
    Ok(())
}

/// Write attendance events in `format`
pub fn write_records<W: Write>(
    writer: &mut W,
    events: &[AttendanceEvent],
    format: OutputFormat,
) -> SimulationResult<()> {
    match format {
        OutputFormat::Csv => {
            writeln!(writer, "{}", AttendanceEvent::CSV_HEADER)?;
            for event in events {
                writeln!(writer, "{}", event.to_csv_row())?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json_lines(writer, events),
    }
}

/// Write exposure contacts in `format`
pub fn write_contacts<W: Write>(
    writer: &mut W,
    contacts: &[Contact],
    format: OutputFormat,
) -> SimulationResult<()> {
    match format {
        OutputFormat::Csv => {
            writeln!(writer, "{}", Contact::CSV_HEADER)?;
            for contact in contacts {
                writeln!(writer, "{}", contact.to_csv_row())?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json_lines(writer, contacts),
    }
}

fn write_json_lines<W: Write, T: Serialize>(writer: &mut W, rows: &[T]) -> SimulationResult<()> {
    for row in rows {
        let json_line = serde_json::to_string(row)?;
        writeln!(writer, "{}", json_line)?;
    }
    Ok(())
}

/// Writes simulation output into a directory
#[derive(Debug, Clone)]
pub struct FlatFileExporter {
    output_dir: PathBuf,
    format: OutputFormat,
}

impl FlatFileExporter {
    /// Create an exporter writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self { output_dir: output_dir.into(), format }
    }

    /// Directory files are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Format used for records and contacts
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Path of the event log file
    pub fn records_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.{}", RECORDS_STEM, self.format.extension()))
    }

    /// Path of the contact file for an exposure report
    pub fn contacts_path(&self, report: &ExposureReport) -> PathBuf {
        self.output_dir.join(format!(
            "contacts_{}.{}",
            report.index_student,
            self.format.extension()
        ))
    }

    /// Write the five entity tables, returning the written paths
    pub fn export_population(
        &self,
        registry: &FacilityRegistry,
        courses: &[Course],
        students: &[Student],
    ) -> SimulationResult<Vec<PathBuf>> {
        let paths = vec![
            self.write_file(BUILDINGS_FILE, |w| write_buildings(w, registry))?,
            self.write_file(ROOMS_FILE, |w| write_rooms(w, registry))?,
            self.write_file(COURSES_FILE, |w| write_courses(w, courses))?,
            self.write_file(STUDENTS_FILE, |w| write_students(w, students))?,
            self.write_file(STUDENT_COURSES_FILE, |w| write_enrollments(w, students))?,
        ];

        info!("Wrote population tables to {}", self.output_dir.display());
        Ok(paths)
    }

    /// Write the event log
    pub fn export_records(&self, events: &[AttendanceEvent]) -> SimulationResult<PathBuf> {
        let path = self.records_path();
        self.write_path(&path, |w| write_records(w, events, self.format))?;
        info!("Wrote {} records to {}", events.len(), path.display());
        Ok(path)
    }

    /// Write the contacts of an exposure report
    pub fn export_contacts(&self, report: &ExposureReport) -> SimulationResult<PathBuf> {
        let path = self.contacts_path(report);
        self.write_path(&path, |w| write_contacts(w, &report.contacts, self.format))?;
        info!("Wrote {} contacts to {}", report.contacts.len(), path.display());
        Ok(path)
    }

    fn write_file<F>(&self, name: &str, body: F) -> SimulationResult<PathBuf>
    where
        F: FnOnce(&mut BufWriter<File>) -> SimulationResult<()>,
    {
        let path = self.output_dir.join(name);
        self.write_path(&path, body)?;
        Ok(path)
    }

    fn write_path<F>(&self, path: &Path, body: F) -> SimulationResult<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> SimulationResult<()>,
    {
        fs::create_dir_all(&self.output_dir)?;
        let mut writer = BufWriter::new(File::create(path)?);
        body(&mut writer)?;
        writer.flush()?;
        debug!("Flushed {}", path.display());
        Ok(())
    }
}
