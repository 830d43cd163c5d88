use crate::schema::{attendance, courses};
use chrono::NaiveDate;
use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Tabled)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Course {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = courses)]
pub struct NewCourse<'a> {
    pub name: &'a str,
}

/// Whether the student showed up to a single class session. Stored in the
/// database as lowercase text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    diesel::AsExpression,
    diesel::FromSqlRow,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Present,
    Absent,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Present => "present",
            Status::Absent => "absent",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql<Text, Sqlite> for Status {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.as_str());
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Sqlite> for Status {
    fn from_sql(bytes: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        match <String as FromSql<Text, Sqlite>>::from_sql(bytes)?.as_str() {
            "present" => Ok(Status::Present),
            "absent" => Ok(Status::Absent),
            other => Err(format!("unrecognized attendance status {other:?}").into()),
        }
    }
}

/// One recorded class session. Records are append-only: once a session has
/// been marked, there is no edit or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = attendance)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AttendanceRecord {
    pub id: i32,
    pub course_id: i32,
    pub class_date: NaiveDate,
    pub class_session: i32,
    pub status: Status,
}

#[derive(Insertable)]
#[diesel(table_name = attendance)]
pub struct NewAttendanceRecord {
    pub course_id: i32,
    pub class_date: NaiveDate,
    pub class_session: i32,
    pub status: Status,
}
