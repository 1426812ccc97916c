//! Unlock request repository and the approval cascade

use anyhow::Result;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row, Transaction};
use uuid::Uuid;

use crate::models::unlock::{UnlockRequest, UnlockStatus};

/// Unlock request repository for database operations
#[derive(Clone)]
pub struct UnlockRequestRepository {
    pool: PgPool,
}

impl UnlockRequestRepository {
    /// Create a new unlock request repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All unlock requests, newest first
    pub async fn find_all(&self) -> Result<Vec<UnlockRequest>> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.teacher_id, t.name AS teacher_name,
                   r.course_id, c.course_name,
                   r.request_date, r.status, r.created_at
            FROM unlock_requests r
            LEFT JOIN teachers t ON t.id = r.teacher_id
            JOIN courses c ON c.id = r.course_id
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_request).collect()
    }

    /// Unlock requests in a given state, newest first
    pub async fn find_by_status(&self, status: UnlockStatus) -> Result<Vec<UnlockRequest>> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.teacher_id, t.name AS teacher_name,
                   r.course_id, c.course_name,
                   r.request_date, r.status, r.created_at
            FROM unlock_requests r
            LEFT JOIN teachers t ON t.id = r.teacher_id
            JOIN courses c ON c.id = r.course_id
            WHERE r.status = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_request).collect()
    }

    /// Count unlock requests in a given state
    pub async fn count_by_status(&self, status: UnlockStatus) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM unlock_requests WHERE status = $1")
                .bind(status.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Find an unlock request by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UnlockRequest>> {
        let row = sqlx::query(
            r#"
            SELECT r.id, r.teacher_id, t.name AS teacher_name,
                   r.course_id, c.course_name,
                   r.request_date, r.status, r.created_at
            FROM unlock_requests r
            LEFT JOIN teachers t ON t.id = r.teacher_id
            JOIN courses c ON c.id = r.course_id
            WHERE r.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_request).transpose()
    }

    /// Approve a pending request: unlock every attendance row for the
    /// request's course and date, stamp the approving admin, and flip the
    /// request status. Both writes commit or roll back together.
    ///
    /// Returns the number of attendance rows unlocked.
    pub async fn approve(&self, request: &UnlockRequest, admin_id: Option<Uuid>) -> Result<u64> {
        let mut tx: Transaction<'_, Postgres> = self.pool.begin().await?;

        let unlocked = sqlx::query(
            r#"
            UPDATE attendance
            SET is_locked = FALSE, unlock_approved_by = $1
            WHERE course_id = $2 AND session_date = $3
            "#,
        )
        .bind(admin_id)
        .bind(request.course_id)
        .bind(request.request_date)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        sqlx::query("UPDATE unlock_requests SET status = $1 WHERE id = $2")
            .bind(UnlockStatus::Approved.as_str())
            .bind(request.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(unlocked)
    }

    /// Reject a pending request; attendance rows stay locked
    pub async fn reject(&self, request_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE unlock_requests SET status = $1 WHERE id = $2")
            .bind(UnlockStatus::Rejected.as_str())
            .bind(request_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_request(row: PgRow) -> Result<UnlockRequest> {
    let raw_status: String = row.get("status");
    let status = UnlockStatus::parse(&raw_status)
        .ok_or_else(|| anyhow::anyhow!("Unknown unlock status: {}", raw_status))?;

    Ok(UnlockRequest {
        id: row.get("id"),
        teacher_id: row.get("teacher_id"),
        teacher_name: row.get("teacher_name"),
        course_id: row.get("course_id"),
        course_name: row.get("course_name"),
        request_date: row.get("request_date"),
        status,
        created_at: row.get("created_at"),
    })
}
