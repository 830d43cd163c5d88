//! CSV export of the attendance ledger, flattened with course names.

use crate::error::TrackerResult;
use crate::manager::AttendanceManager;
use crate::models::Status;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

/// One row of the downloadable export: an attendance record joined with its
/// course name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub attendance_id: i32,
    #[serde(rename = "Course")]
    pub course: String,
    pub class_date: NaiveDate,
    pub class_session: i32,
    pub status: Status,
}

/// Writes the full ledger to a CSV file at `path`.
///
/// Returns the number of records written.
pub fn export_to_csv(manager: &mut AttendanceManager, path: &Path) -> TrackerResult<usize> {
    let rows = manager.export_rows()?;
    write_csv(path, &rows)?;
    Ok(rows.len())
}

pub fn write_csv(path: &Path, rows: &[ExportRow]) -> TrackerResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
