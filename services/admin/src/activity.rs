//! Recent-activity feed for the admin dashboard
//!
//! Merges the newest unlock requests and attendance markings into one
//! feed, newest first, capped at five entries.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::ActivityEntry;
use crate::models::attendance::AttendanceMarking;
use crate::models::unlock::{UnlockRequest, UnlockStatus};
use crate::timeago;

/// How many recently marked attendance rows to scan for the feed.
pub const MARKING_SCAN_LIMIT: i64 = 5;

/// Most unlock requests shown in the feed.
const UNLOCK_LIMIT: usize = 3;
/// Upper bound on the merged feed.
const FEED_LIMIT: usize = 5;

/// Build the dashboard feed from unlock requests (ordered newest first)
/// and recent attendance markings (ordered by marking time, newest first).
pub fn build_feed(
    requests: &[UnlockRequest],
    markings: &[AttendanceMarking],
    now: DateTime<Utc>,
) -> Vec<ActivityEntry> {
    let mut entries = Vec::new();

    for request in requests.iter().take(UNLOCK_LIMIT) {
        let teacher = request.teacher_name.as_deref().unwrap_or("Teacher");
        let severity = if request.status == UnlockStatus::Pending {
            "warning"
        } else {
            "info"
        };

        entries.push(ActivityEntry {
            description: format!(
                "Unlock request {} for {}",
                request.status.as_str().to_ascii_lowercase(),
                teacher
            ),
            time_label: timeago::time_ago(Some(request.created_at), now),
            icon: "lock",
            severity,
            timestamp: request.created_at,
        });
    }

    // One feed entry per session; first seen wins.
    let mut seen_sessions = HashSet::new();
    for marking in markings {
        let Some(marked_at) = marking.marked_at else {
            continue;
        };
        if !seen_sessions.insert(marking.session_key()) {
            continue;
        }

        let course = marking.course_name.as_deref().unwrap_or("Course");
        entries.push(ActivityEntry {
            description: format!("Attendance marked for {}", course),
            time_label: timeago::time_ago(Some(marked_at), now),
            icon: "check",
            severity: "success",
            timestamp: marked_at,
        });
    }

    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries.truncate(FEED_LIMIT);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    fn request(
        status: UnlockStatus,
        teacher: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> UnlockRequest {
        UnlockRequest {
            id: Uuid::new_v4(),
            teacher_id: teacher.map(|_| Uuid::new_v4()),
            teacher_name: teacher.map(str::to_string),
            course_id: Uuid::new_v4(),
            course_name: "Algebra".to_string(),
            request_date: created_at.date_naive(),
            status,
            created_at,
        }
    }

    fn marking(course_id: Uuid, marked_at: Option<DateTime<Utc>>) -> AttendanceMarking {
        AttendanceMarking {
            course_id,
            course_name: Some("Algebra".to_string()),
            session_date: base().date_naive(),
            marked_at,
        }
    }

    #[test]
    fn feed_is_capped_at_five_and_sorted_newest_first() {
        let requests: Vec<_> = (0..3)
            .map(|i| {
                request(
                    UnlockStatus::Pending,
                    Some("R. Mensah"),
                    base() - Duration::minutes(i),
                )
            })
            .collect();
        let markings: Vec<_> = (0..4)
            .map(|i| {
                marking(
                    Uuid::new_v4(),
                    Some(base() - Duration::minutes(10 + i)),
                )
            })
            .collect();

        let feed = build_feed(&requests, &markings, base());

        assert_eq!(feed.len(), 5);
        for pair in feed.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn at_most_three_unlock_requests_are_included() {
        let requests: Vec<_> = (0..5)
            .map(|i| {
                request(
                    UnlockStatus::Pending,
                    Some("R. Mensah"),
                    base() - Duration::minutes(i),
                )
            })
            .collect();

        let feed = build_feed(&requests, &[], base());
        assert_eq!(feed.len(), 3);
    }

    #[test]
    fn duplicate_sessions_collapse_to_first_seen() {
        let course_id = Uuid::new_v4();
        let markings = vec![
            marking(course_id, Some(base() - Duration::minutes(1))),
            marking(course_id, Some(base() - Duration::minutes(2))),
        ];

        let feed = build_feed(&[], &markings, base());

        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].timestamp, base() - Duration::minutes(1));
    }

    #[test]
    fn unmarked_rows_are_skipped() {
        let markings = vec![
            marking(Uuid::new_v4(), None),
            marking(Uuid::new_v4(), Some(base() - Duration::minutes(1))),
        ];

        let feed = build_feed(&[], &markings, base());
        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn missing_teacher_falls_back_to_placeholder() {
        let requests = vec![request(UnlockStatus::Pending, None, base())];

        let feed = build_feed(&requests, &[], base());
        assert_eq!(feed[0].description, "Unlock request pending for Teacher");
    }

    #[test]
    fn unlock_entries_carry_status_severity() {
        let requests = vec![
            request(UnlockStatus::Pending, Some("R. Mensah"), base()),
            request(
                UnlockStatus::Approved,
                Some("R. Mensah"),
                base() - Duration::minutes(1),
            ),
        ];

        let feed = build_feed(&requests, &[], base());

        assert_eq!(feed[0].severity, "warning");
        assert_eq!(feed[0].icon, "lock");
        assert_eq!(feed[1].severity, "info");
        assert_eq!(feed[1].description, "Unlock request approved for R. Mensah");
    }

    #[test]
    fn attendance_entries_carry_success_severity() {
        let markings = vec![marking(Uuid::new_v4(), Some(base()))];

        let feed = build_feed(&[], &markings, base());

        assert_eq!(feed[0].severity, "success");
        assert_eq!(feed[0].icon, "check");
        assert_eq!(feed[0].description, "Attendance marked for Algebra");
    }
}
