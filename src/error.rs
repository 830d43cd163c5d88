use chrono::NaiveDate;
use thiserror::Error;

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Everything that can go wrong while tracking attendance.
///
/// A duplicate session gets its own variant so callers can tell "already
/// recorded" apart from a genuine database failure.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("error connecting to the attendance database: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("attendance for '{course}' on {date} (session {session}) has already been recorded")]
    AlreadyRecorded {
        course: String,
        date: NaiveDate,
        session: i32,
    },

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("csv export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("course name must not be empty")]
    EmptyCourseName,

    #[error("no course named '{0}' found, add it first with `add-course`")]
    UnknownCourse(String),
}
