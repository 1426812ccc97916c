//! Application state shared across handlers

use sqlx::PgPool;

use crate::middleware::JwtVerifier;
use crate::repositories::{AttendanceRepository, StatsRepository, UnlockRequestRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_verifier: JwtVerifier,
    pub stats_repository: StatsRepository,
    pub unlock_repository: UnlockRequestRepository,
    pub attendance_repository: AttendanceRepository,
}
