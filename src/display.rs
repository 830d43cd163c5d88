//! Terminal rendering of the course list, per-course ledgers, and the
//! progress report.

use crate::error::TrackerResult;
use crate::manager::AttendanceManager;
use crate::models::Course;
use crate::report::{CourseReport, DEADLINE_PERCENT, SAFETY_NET_PERCENT, Tier};
use tabled::{Table, Tabled, settings::Style};

/// Pretty prints every registered course.
pub fn show_courses(manager: &mut AttendanceManager) -> TrackerResult<()> {
    let courses = manager.get_courses()?;

    if courses.is_empty() {
        println!("No courses found. Please add a course first.");
        return Ok(());
    }

    let mut table = Table::new(courses);
    table.with(Style::modern());

    println!("Courses:\n{table}");

    Ok(())
}

/// Pretty prints the raw attendance ledger for one course.
pub fn show_ledger(manager: &mut AttendanceManager, course: &Course) -> TrackerResult<()> {
    let records = manager.get_course_attendance(course.id)?;

    if records.is_empty() {
        println!("No attendance records for '{}' yet.", course.name);
        return Ok(());
    }

    #[derive(Tabled)]
    struct LedgerRow {
        date: String,
        session: i32,
        status: String,
    }

    let rows: Vec<LedgerRow> = records
        .into_iter()
        .map(|record| LedgerRow {
            date: record.class_date.to_string(),
            session: record.class_session,
            status: record.status.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());

    println!("Attendance for '{}':\n{table}", course.name);

    Ok(())
}

/// Prints the full progress report for each of the given courses: counts,
/// percentage, threshold standing, recovery plan, and the bunk projection.
pub fn show_progress(manager: &mut AttendanceManager, courses: &[Course]) -> TrackerResult<()> {
    if courses.is_empty() {
        println!("No courses found. Please add a course first to view progress.");
        return Ok(());
    }

    for course in courses {
        let (total, present) = manager.course_stats(course.id)?;

        println!("=== {} ===", course.name);

        let Some(report) = CourseReport::from_counts(total, present) else {
            println!("No attendance records for this course yet.\n");
            continue;
        };

        println!("Total classes: {total} | Classes attended: {present}");
        println!("Attendance percentage: {:.2}%", report.percentage);
        println!("{}", tier_message(report.tier));

        if report.tier != Tier::Safe {
            print_recovery_plan(&report);
        }

        print_bunk_projection(&report);
        println!();
    }

    Ok(())
}

fn tier_message(tier: Tier) -> String {
    match tier {
        Tier::BelowDeadline => {
            format!("Action required! Attendance is below the {DEADLINE_PERCENT}% deadline.")
        }
        Tier::BelowSafetyNet => {
            format!("Warning! Attendance is below the {SAFETY_NET_PERCENT}% safety net.")
        }
        Tier::Safe => {
            format!("Excellent! Attendance is above the {SAFETY_NET_PERCENT}% safety net.")
        }
    }
}

fn print_recovery_plan(report: &CourseReport) {
    println!("Recovery plan:");
    if report.recovery_count > 0 {
        println!(
            "  Attend {} consecutive classes to bring your attendance above \
             the {SAFETY_NET_PERCENT}% safety net.",
            report.recovery_count
        );
    } else {
        println!(
            "  You are not far from the target. The next class you attend \
             will improve your percentage."
        );
    }
}

fn print_bunk_projection(report: &CourseReport) {
    let bunked = report.bunk_projection();

    println!(
        "If you skip the next class: {:.2}% ({})",
        bunked.percentage,
        match bunked.tier {
            Tier::BelowDeadline => format!("below the {DEADLINE_PERCENT}% deadline"),
            Tier::BelowSafetyNet => format!("below the {SAFETY_NET_PERCENT}% safety net"),
            Tier::Safe => "still safe".to_string(),
        }
    );

    if bunked.tier != Tier::Safe {
        println!(
            "  Recovering from that would take {} consecutive classes.",
            bunked.recovery_count
        );
    }
}
