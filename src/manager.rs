use crate::error::{TrackerError, TrackerResult};
use crate::export::ExportRow;
use crate::models::{AttendanceRecord, Course, NewAttendanceRecord, NewCourse, Status};
use crate::schema;
use chrono::NaiveDate;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{info, warn};

/// Busy timeout applied to every connection, in milliseconds.
const BUSY_TIMEOUT_MS: u32 = 10_000;

/// The manager for registering courses, recording attendance, and retrieving
/// the aggregate counts the progress report is built from.
pub struct AttendanceManager {
    db: SqliteConnection,
}

impl AttendanceManager {
    /// Connects to the `sqlite3` database at `database_url`.
    ///
    /// A connection failure is reported to the caller; there is no retry.
    pub fn connect(database_url: &str) -> TrackerResult<Self> {
        let mut db = SqliteConnection::establish(database_url)?;

        db.batch_execute(&format!(
            "PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}; PRAGMA foreign_keys = ON;"
        ))?;

        Ok(Self { db })
    }

    /// Registers a new course. Empty and whitespace-only names are rejected
    /// before the database is touched.
    pub fn add_course(&mut self, course_name: &str) -> TrackerResult<Course> {
        let course_name = course_name.trim();
        if course_name.is_empty() {
            return Err(TrackerError::EmptyCourseName);
        }

        let course = diesel::insert_into(schema::courses::table)
            .values(NewCourse { name: course_name })
            .returning(Course::as_returning())
            .get_result(&mut self.db)?;

        info!(course = %course.name, id = course.id, "course added");

        Ok(course)
    }

    /// Retrieves all registered courses in registration order.
    pub fn get_courses(&mut self) -> TrackerResult<Vec<Course>> {
        use schema::courses::dsl::*;

        Ok(courses
            .select(Course::as_select())
            .order(id.asc())
            .load(&mut self.db)?)
    }

    /// Looks up a course by its exact name.
    pub fn find_course(&mut self, course_name: &str) -> TrackerResult<Course> {
        use schema::courses::dsl::*;

        courses
            .filter(name.eq(course_name))
            .select(Course::as_select())
            .first(&mut self.db)
            .optional()?
            .ok_or_else(|| TrackerError::UnknownCourse(course_name.to_string()))
    }

    /// The default session number for a course on a given date: one past the
    /// highest session already recorded for that pair, or 1 if none exists.
    pub fn next_session(&mut self, course: i32, date: NaiveDate) -> TrackerResult<i32> {
        use schema::attendance::dsl::*;

        let highest: Option<i32> = attendance
            .filter(course_id.eq(course).and(class_date.eq(date)))
            .select(diesel::dsl::max(class_session))
            .first(&mut self.db)?;

        Ok(highest.unwrap_or(0) + 1)
    }

    /// Records the status of one class session.
    ///
    /// Each (course, date, session) triple can be marked exactly once; a
    /// second attempt surfaces as [`TrackerError::AlreadyRecorded`] and
    /// leaves the original record intact.
    pub fn record_attendance(
        &mut self,
        course: &Course,
        date: NaiveDate,
        session: i32,
        status: Status,
    ) -> TrackerResult<AttendanceRecord> {
        let inserted = diesel::insert_into(schema::attendance::table)
            .values(NewAttendanceRecord {
                course_id: course.id,
                class_date: date,
                class_session: session,
                status,
            })
            .returning(AttendanceRecord::as_returning())
            .get_result(&mut self.db);

        match inserted {
            Ok(record) => {
                info!(
                    course = %course.name,
                    date = %date,
                    session,
                    status = %status,
                    "attendance recorded"
                );
                Ok(record)
            }
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                warn!(course = %course.name, date = %date, session, "duplicate attendance entry");
                Err(TrackerError::AlreadyRecorded {
                    course: course.name.clone(),
                    date,
                    session,
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Retrieves every record for a course, ordered by date then session.
    pub fn get_course_attendance(&mut self, course: i32) -> TrackerResult<Vec<AttendanceRecord>> {
        use schema::attendance::dsl::*;

        Ok(attendance
            .filter(course_id.eq(course))
            .select(AttendanceRecord::as_select())
            .order((class_date.asc(), class_session.asc()))
            .load(&mut self.db)?)
    }

    /// Returns `(total_sessions, present_sessions)` for a course. These two
    /// counts are derived from the ledger on every call, never stored.
    pub fn course_stats(&mut self, course: i32) -> TrackerResult<(u32, u32)> {
        use schema::attendance::dsl::*;

        let total: i64 = attendance
            .filter(course_id.eq(course))
            .count()
            .get_result(&mut self.db)?;

        let present: i64 = attendance
            .filter(course_id.eq(course).and(status.eq(Status::Present)))
            .count()
            .get_result(&mut self.db)?;

        Ok((total as u32, present as u32))
    }

    /// The flattened ledger joined with course names, ordered by course, date,
    /// and session, ready for CSV export.
    pub fn export_rows(&mut self) -> TrackerResult<Vec<ExportRow>> {
        use schema::{attendance, courses};

        let rows = attendance::table
            .inner_join(courses::table)
            .select((
                attendance::id,
                courses::name,
                attendance::class_date,
                attendance::class_session,
                attendance::status,
            ))
            .order((
                courses::name.asc(),
                attendance::class_date.asc(),
                attendance::class_session.asc(),
            ))
            .load::<(i32, String, NaiveDate, i32, Status)>(&mut self.db)?;

        Ok(rows
            .into_iter()
            .map(
                |(attendance_id, course, class_date, class_session, status)| ExportRow {
                    attendance_id,
                    course,
                    class_date,
                    class_session,
                    status,
                },
            )
            .collect())
    }
}
