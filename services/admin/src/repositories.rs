//! Repositories for database operations

use anyhow::Result;
use sqlx::PgPool;

pub mod attendance;
pub mod unlock;

pub use attendance::AttendanceRepository;
pub use unlock::UnlockRequestRepository;

/// Entity counts backing the dashboard summary cards
#[derive(Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    /// Create a new stats repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count teachers that are currently active
    pub async fn count_active_teachers(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teachers WHERE active")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Count students that are currently active
    pub async fn count_active_students(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students WHERE active")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Count all classes
    pub async fn count_classes(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM classes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Count all courses
    pub async fn count_courses(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
