//! Attendance repository: recent markings and the report scan

use anyhow::Result;
use sqlx::{PgPool, Row};

use crate::models::attendance::{AttendanceMarking, AttendanceRow, AttendanceStatus};

/// Attendance repository for database operations
#[derive(Clone)]
pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    /// Create a new attendance repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Most recently marked attendance rows, for the dashboard feed
    pub async fn find_recent_marked(&self, limit: i64) -> Result<Vec<AttendanceMarking>> {
        let rows = sqlx::query(
            r#"
            SELECT a.course_id, c.course_name, a.session_date, a.marked_at
            FROM attendance a
            JOIN courses c ON c.id = a.course_id
            ORDER BY a.marked_at DESC NULLS LAST
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let markings = rows
            .into_iter()
            .map(|row| AttendanceMarking {
                course_id: row.get("course_id"),
                course_name: row.get("course_name"),
                session_date: row.get("session_date"),
                marked_at: row.get("marked_at"),
            })
            .collect();

        Ok(markings)
    }

    /// Every attendance row with its course, class, and teacher names.
    /// Full scan; the reports view has no pagination.
    pub async fn find_report_rows(&self) -> Result<Vec<AttendanceRow>> {
        let rows = sqlx::query(
            r#"
            SELECT a.course_id, c.course_name, cl.class_name, cl.section,
                   t.name AS teacher_name, a.session_date, a.status
            FROM attendance a
            JOIN courses c ON c.id = a.course_id
            LEFT JOIN classes cl ON cl.id = c.class_id
            LEFT JOIN teachers t ON t.id = c.teacher_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let report_rows = rows
            .into_iter()
            .map(|row| {
                let raw_status: String = row.get("status");
                AttendanceRow {
                    course_id: row.get("course_id"),
                    course_name: row.get("course_name"),
                    class_name: row.get("class_name"),
                    section: row.get("section"),
                    teacher_name: row.get("teacher_name"),
                    session_date: row.get("session_date"),
                    status: AttendanceStatus::parse(&raw_status),
                }
            })
            .collect();

        Ok(report_rows)
    }
}
