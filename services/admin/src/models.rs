//! Request and response payloads for the admin API

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub mod attendance;
pub mod unlock;

/// Admin dashboard summary
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_teachers: i64,
    pub total_students: i64,
    pub total_classes: i64,
    pub total_courses: i64,
    pub recent_activities: Vec<ActivityEntry>,
}

/// One entry in the dashboard's recent-activity feed
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub description: String,
    pub time_label: String,
    pub icon: &'static str,
    pub severity: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate unlock-request counters
#[derive(Debug, Serialize)]
pub struct UnlockStatsResponse {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
}

/// Decision payload for processing an unlock request
#[derive(Debug, Deserialize)]
pub struct ProcessUnlockRequest {
    pub approve: bool,
}

/// One attendance session summarized for the reports view
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceReportRow {
    pub class_label: String,
    pub course_name: String,
    pub teacher_name: String,
    pub date: NaiveDate,
    pub total_students: usize,
    pub present_count: usize,
    pub absent_count: usize,
    pub percentage: f64,
    pub status_label: String,
}
