use anyhow::Result;
use chrono::Local;
use clap::Parser;
use college_attendance::cli::{Cli, Command};
use college_attendance::{create_default_manager, display, export};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut manager = create_default_manager()?;

    match cli.command {
        Command::AddCourse { name } => {
            let course = manager.add_course(&name)?;
            println!("Successfully added '{}'!", course.name);
        }

        Command::ListCourses => display::show_courses(&mut manager)?,

        Command::Mark {
            course,
            status,
            date,
            session,
        } => {
            let course = manager.find_course(&course)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let session = match session {
                Some(session) => session,
                None => manager.next_session(course.id, date)?,
            };

            let record = manager.record_attendance(&course, date, session, status)?;
            println!(
                "Attendance for '{}' on {} (session {}) marked as '{}'.",
                course.name, record.class_date, record.class_session, record.status
            );
        }

        Command::Report { course } => {
            let courses = match course {
                Some(name) => vec![manager.find_course(&name)?],
                None => manager.get_courses()?,
            };
            display::show_progress(&mut manager, &courses)?;
        }

        Command::Ledger { course } => {
            let course = manager.find_course(&course)?;
            display::show_ledger(&mut manager, &course)?;
        }

        Command::Export { path } => {
            let written = export::export_to_csv(&mut manager, &path)?;
            println!("Exported {written} records to {}.", path.display());
        }
    }

    Ok(())
}
