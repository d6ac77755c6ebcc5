//! `timetable` CLI — validate assignments and courses against a JSON dataset.
//!
//! ## Usage
//!
//! ```sh
//! # Check an assignment submission (stdin → verdict)
//! timetable check --data dataset.json < request.json
//!
//! # Check and persist the rows back into the dataset file
//! timetable check --data dataset.json -i request.json --commit
//!
//! # Check a proposed course's date range for group overlap
//! timetable course-check --data dataset.json -i course.json
//!
//! # Free slots for a teacher on a given Monday
//! timetable slots --data dataset.json --teacher t1 --day monday --date 2024-01-15
//!
//! # Emit the advisory-snapshot JSON for the explanation collaborator
//! timetable explain --data dataset.json -o snapshot.json
//! ```

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use timetable_engine::availability::{free_slots_for_room, free_slots_for_teacher};
use timetable_engine::explain::{build_request, default_priorities};
use timetable_engine::{
    check_course, AssignmentRequest, ClassDay, Course, MemoryStore, ScheduleData, ScheduleStore,
    TimeOfDay,
};

#[derive(Parser)]
#[command(
    name = "timetable",
    version,
    about = "Conflict checker for recurring weekly class assignments"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one assignment submission against the dataset
    Check {
        /// Dataset JSON file holding all collections
        #[arg(short, long)]
        data: String,
        /// Request JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Persist the planned rows back into the dataset file on success
        #[arg(long)]
        commit: bool,
    },
    /// Check a proposed course's date range against its group's other courses
    CourseCheck {
        /// Dataset JSON file holding all collections
        #[arg(short, long)]
        data: String,
        /// Course JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List free slots for a teacher or a room on one weekday
    Slots {
        /// Dataset JSON file holding all collections
        #[arg(short, long)]
        data: String,
        /// Teacher id to query (exactly one of --teacher / --room)
        #[arg(long)]
        teacher: Option<String>,
        /// Room id to query (exactly one of --teacher / --room)
        #[arg(long)]
        room: Option<String>,
        /// Weekday name, e.g. "monday"
        #[arg(long)]
        day: String,
        /// Concrete date used to resolve week windows (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Start of the bounding window
        #[arg(long, default_value = "07:00")]
        from: String,
        /// End of the bounding window
        #[arg(long, default_value = "21:00")]
        to: String,
    },
    /// Emit the advisory-snapshot JSON for the AI explanation collaborator
    Explain {
        /// Dataset JSON file holding all collections
        #[arg(short, long)]
        data: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            data,
            input,
            commit,
        } => {
            let dataset = load_dataset(&data)?;
            let raw = read_input(input.as_deref())?;
            let request: AssignmentRequest =
                serde_json::from_str(&raw).context("Failed to parse the assignment request")?;

            let store = MemoryStore::new(dataset);
            let warning = store
                .submit_assignment(&request)
                .context("Assignment rejected")?;

            if let Some(warning) = &warning {
                eprintln!("warning: {warning}");
            }
            println!("OK: {} row(s) planned", request.days.len());

            if commit {
                let updated = store.snapshot()?;
                let json = serde_json::to_string_pretty(&updated)?;
                std::fs::write(&data, json)
                    .with_context(|| format!("Failed to write dataset: {data}"))?;
            }
        }
        Commands::CourseCheck { data, input } => {
            let dataset = load_dataset(&data)?;
            let raw = read_input(input.as_deref())?;
            let course: Course =
                serde_json::from_str(&raw).context("Failed to parse the course")?;

            check_course(&dataset, &course).context("Course rejected")?;
            println!("OK: no overlapping offering for the group");
        }
        Commands::Slots {
            data,
            teacher,
            room,
            day,
            date,
            from,
            to,
        } => {
            let dataset = load_dataset(&data)?;
            let day = parse_day(&day)?;
            let from = TimeOfDay::parse(&from).context("Invalid --from time")?;
            let to = TimeOfDay::parse(&to).context("Invalid --to time")?;

            let slots = match (teacher, room) {
                (Some(id), None) => free_slots_for_teacher(&dataset, &id, day, date, from, to),
                (None, Some(id)) => free_slots_for_room(&dataset, &id, day, date, from, to),
                _ => bail!("Pass exactly one of --teacher or --room"),
            };

            if slots.is_empty() {
                println!("no free slots");
            }
            for slot in slots {
                println!("{}-{}  {} min", slot.start, slot.end, slot.duration_minutes);
            }
        }
        Commands::Explain { data, output } => {
            let dataset = load_dataset(&data)?;
            let request = build_request(&dataset, default_priorities());
            let json = request
                .to_json()
                .context("Failed to serialize the snapshot")?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

fn load_dataset(path: &str) -> Result<ScheduleData> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset: {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse dataset: {path}"))
}

fn parse_day(s: &str) -> Result<ClassDay> {
    let day = match s.to_lowercase().as_str() {
        "monday" => ClassDay::Monday,
        "tuesday" => ClassDay::Tuesday,
        "wednesday" => ClassDay::Wednesday,
        "thursday" => ClassDay::Thursday,
        "friday" => ClassDay::Friday,
        "saturday" => ClassDay::Saturday,
        other => bail!("Unknown weekday: '{other}' (Sunday is not a teaching day)"),
    };
    Ok(day)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
