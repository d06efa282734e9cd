// Campus Contact Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/campus-contact-sim --seed 42 --output-dir out
// ```
//
// Or trace the contacts of one student:
//
// ```console
// $ ./target/release/campus-contact-sim --seed 42 --index-student 17 --verbose
// ```

use anyhow::{Context, Result};
use campus_contact_sim::export::{self, FlatFileExporter};
use campus_contact_sim::exposure::ExposureReport;
use campus_contact_sim::simulation::{LoggingConfig, SimulationOrchestrator, SimulationStatistics};
use campus_contact_sim::types::config::CliArgs;
use campus_contact_sim::types::{SimulationConfig, StudentId};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::init_default()
    };

    let _log_guard = match logging_result {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Campus Contact Simulator");

    // Load configuration from CLI arguments and optional config file
    let dry_run = args.dry_run;
    let config = match SimulationConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    if let Err(e) = run_simulation(config) {
        error!("Simulation failed: {:#}", e);
        process::exit(1);
    }

    info!("Campus Contact Simulator completed successfully");
}

/// Generate the population, step every day, and write the results
fn run_simulation(config: SimulationConfig) -> Result<()> {
    let format = config.get_output_format().context("Invalid output format")?;

    eprintln!("Generating population...");
    let mut orchestrator =
        SimulationOrchestrator::new(config.clone()).context("Failed to initialize simulation")?;
    if let Some(seed) = orchestrator.seed() {
        eprintln!("  Seed: {}", seed);
    }

    eprintln!("Simulating {} days from {}...", config.days, config.start_date);
    let log = orchestrator.run();

    let report = config
        .index_student
        .map(|index| ExposureReport::compute(StudentId::new(index), log.events()));

    match &config.output_dir {
        Some(dir) => {
            let exporter = FlatFileExporter::new(dir, format);
            exporter
                .export_population(orchestrator.registry(), orchestrator.courses(), orchestrator.students())
                .with_context(|| format!("Failed to write population tables to {}", dir))?;
            let records = exporter
                .export_records(log.events())
                .with_context(|| format!("Failed to write records to {}", dir))?;
            eprintln!("Records written to: {}", records.display());

            if let Some(report) = &report {
                let contacts = exporter
                    .export_contacts(report)
                    .with_context(|| format!("Failed to write contacts to {}", dir))?;
                eprintln!("Contacts written to: {}", contacts.display());
            }
        }
        None => {
            // Rows go to stdout: contacts for an exposure query, records otherwise
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            let written = match &report {
                Some(report) => export::write_contacts(&mut writer, &report.contacts, format),
                None => export::write_records(&mut writer, log.events(), format),
            };
            written.context("Failed to write output to stdout")?;
            writer.flush().context("Failed to flush stdout")?;
        }
    }

    if let Some(report) = &report {
        print_exposure_summary(report);
    }
    print_final_statistics(orchestrator.statistics());
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Campus Contact Simulator");
    eprintln!("========================");
    eprintln!("Student attendance and contact-tracing simulation");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Buildings: {}", config.num_buildings);
    eprintln!("  Rooms per Building: {}", config.rooms_per_building);
    eprintln!("  Students: {}", config.num_students);
    eprintln!(
        "  Courses per Room: {} - {} (exclusive)",
        config.min_courses_per_room, config.max_courses_per_room
    );
    eprintln!(
        "  Courses per Student: {} - {}",
        config.min_courses_per_student, config.max_courses_per_student
    );
    eprintln!(
        "  Weekday Pair Courses: {:.1}%",
        config.composite_schedule_probability * 100.0
    );
    eprintln!(
        "  Start Hours: {:02}:00 - {:02}:00",
        config.earliest_start_hour, config.latest_start_hour
    );
    match config.end_date() {
        Some(end) => eprintln!("  Dates: {} - {} ({} days)", config.start_date, end, config.days),
        None => eprintln!("  Dates: from {} ({} days)", config.start_date, config.days),
    }
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(dir) = &config.output_dir {
        eprintln!("  Output Directory: {}", dir);
    }
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    if let Some(index) = config.index_student {
        eprintln!("  Index Student: {}", index);
    }

    eprintln!("\nScale:");
    eprintln!("  Total Rooms: {}", config.total_rooms());
    eprintln!(
        "  Courses: up to {}",
        config.total_rooms() * config.max_courses_per_room.saturating_sub(1)
    );
    eprintln!();
}

/// Print the outcome of an exposure query
fn print_exposure_summary(report: &ExposureReport) {
    eprintln!("\nExposure Report:");
    eprintln!("  Index Student: {}", report.index_student);
    eprintln!("  Room Slots Visited: {}", report.visited_fingerprint_count);
    eprintln!(
        "  Contacts: {} across {} students",
        report.contacts.len(),
        report.distinct_students()
    );
}

/// Print final run statistics
fn print_final_statistics(statistics: &SimulationStatistics) {
    eprintln!();
    eprintln!("{}", statistics);
    info!("{}", statistics.compact_summary());
}
