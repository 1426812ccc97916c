//! Attendance report aggregation
//!
//! Collapses raw attendance rows into one summary per session
//! (course + date) with presence statistics, newest sessions first.

use std::collections::HashMap;

use crate::models::AttendanceReportRow;
use crate::models::attendance::{AttendanceRow, SessionKey};

pub fn aggregate(rows: Vec<AttendanceRow>) -> Vec<AttendanceReportRow> {
    let mut sessions: HashMap<SessionKey, Vec<AttendanceRow>> = HashMap::new();
    for row in rows {
        sessions.entry(row.session_key()).or_default().push(row);
    }

    let mut reports: Vec<AttendanceReportRow> = sessions
        .into_values()
        .filter_map(summarize_session)
        .collect();

    reports.sort_by(|a, b| b.date.cmp(&a.date));
    reports
}

fn summarize_session(rows: Vec<AttendanceRow>) -> Option<AttendanceReportRow> {
    let first = rows.first()?;

    let total_students = rows.len();
    let present_count = rows.iter().filter(|row| row.status.is_present()).count();
    let absent_count = total_students - present_count;
    let percentage = presence_percentage(present_count, total_students);

    let class_label = first
        .class_name
        .as_ref()
        .zip(first.section.as_ref())
        .map(|(class_name, section)| format!("{} {}", class_name, section))
        .unwrap_or_else(|| "-".to_string());

    Some(AttendanceReportRow {
        class_label,
        course_name: first.course_name.clone(),
        teacher_name: first
            .teacher_name
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        date: first.session_date,
        total_students,
        present_count,
        absent_count,
        percentage,
        status_label: status_label(percentage).to_string(),
    })
}

/// Share of present rows, rounded to one decimal place.
pub fn presence_percentage(present: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = present as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Qualitative label for a session's presence percentage. Thresholds are
/// inclusive and evaluated in descending order.
pub fn status_label(percentage: f64) -> &'static str {
    if percentage >= 90.0 {
        "Excellent"
    } else if percentage >= 75.0 {
        "Good"
    } else if percentage >= 60.0 {
        "Average"
    } else {
        "Needs Attention"
    }
}
