//! Attendance models and the session composite key

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Composite key identifying one attendance session: all rows a course
/// records for a given date belong to the same session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub course_id: Uuid,
    pub date: NaiveDate,
}

/// Attendance marking status, parsed case-insensitively from storage.
///
/// Unrecognized values are preserved rather than dropped; only `Present`
/// counts toward presence statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Other(String),
}

impl AttendanceStatus {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("PRESENT") {
            Self::Present
        } else if raw.eq_ignore_ascii_case("ABSENT") {
            Self::Absent
        } else if raw.eq_ignore_ascii_case("LATE") {
            Self::Late
        } else {
            Self::Other(raw.to_string())
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }
}

/// A recently marked attendance row, as consumed by the dashboard feed
#[derive(Debug, Clone)]
pub struct AttendanceMarking {
    pub course_id: Uuid,
    pub course_name: Option<String>,
    pub session_date: NaiveDate,
    pub marked_at: Option<DateTime<Utc>>,
}

impl AttendanceMarking {
    pub fn session_key(&self) -> SessionKey {
        SessionKey {
            course_id: self.course_id,
            date: self.session_date,
        }
    }
}

/// One attendance row joined with its course, class, and teacher names,
/// the unit the report aggregator consumes
#[derive(Debug, Clone)]
pub struct AttendanceRow {
    pub course_id: Uuid,
    pub course_name: String,
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub teacher_name: Option<String>,
    pub session_date: NaiveDate,
    pub status: AttendanceStatus,
}

impl AttendanceRow {
    pub fn session_key(&self) -> SessionKey {
        SessionKey {
            course_id: self.course_id,
            date: self.session_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_is_case_insensitive() {
        assert_eq!(AttendanceStatus::parse("PRESENT"), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::parse("present"), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::parse("Present"), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::parse("absent"), AttendanceStatus::Absent);
        assert_eq!(AttendanceStatus::parse("LATE"), AttendanceStatus::Late);
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status = AttendanceStatus::parse("excused");
        assert_eq!(status, AttendanceStatus::Other("excused".to_string()));
        assert!(!status.is_present());
    }

    #[test]
    fn only_present_counts_as_present() {
        assert!(AttendanceStatus::parse("present").is_present());
        assert!(!AttendanceStatus::parse("absent").is_present());
        assert!(!AttendanceStatus::parse("late").is_present());
    }
}
