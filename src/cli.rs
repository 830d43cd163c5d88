//! This module contains the command-line interface [`Cli`] parser for the
//! attendance tracker.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::Status;

/// The command line configuration struct, where the command-line interface parser is automatically
/// derived by [`clap::Parser`].
#[derive(Parser, Debug)]
#[command(name = "college-attendance", about = "Track course attendance against the 75% deadline and 85% safety net.")]
pub struct Cli {
    /// The different commands available for tracking attendance.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new course.
    AddCourse {
        /// The course name, which must be non-empty and unique.
        name: String,
    },

    /// List all registered courses.
    ListCourses,

    /// Record attendance for one class session.
    Mark {
        /// The name of the course to mark.
        course: String,

        /// Whether the session was attended.
        #[arg(long, value_enum)]
        status: Status,

        /// The date of the class, defaulting to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// The session number within the day, defaulting to one past the
        /// highest session already recorded for that course and date.
        #[arg(long)]
        session: Option<i32>,
    },

    /// Show the attendance progress report for one course, or all courses.
    Report {
        /// The name of a single course to report on.
        course: Option<String>,
    },

    /// List the raw attendance ledger for a course.
    Ledger {
        /// The name of the course.
        course: String,
    },

    /// Export the full ledger, joined with course names, as CSV.
    Export {
        /// Where to write the CSV file.
        path: PathBuf,
    },
}
