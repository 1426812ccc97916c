//! Relative-time labels for the activity feed

use chrono::{DateTime, Utc};

/// Render a timestamp as a coarse "how long ago" label relative to `now`.
///
/// Missing timestamps collapse to "Just now", as do future instants from
/// clock skew. Buckets truncate toward zero.
pub fn time_ago(time: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(time) = time else {
        return "Just now".to_string();
    };

    let elapsed = now.signed_duration_since(time);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{} mins ago", minutes);
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{} hours ago", hours);
    }

    format!("{} days ago", elapsed.num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn missing_timestamp_reads_as_just_now() {
        assert_eq!(time_ago(None, now()), "Just now");
    }

    #[test]
    fn under_one_minute_reads_as_just_now() {
        assert_eq!(time_ago(Some(now() - Duration::seconds(59)), now()), "Just now");
    }

    #[test]
    fn minute_buckets_truncate() {
        assert_eq!(
            time_ago(Some(now() - Duration::seconds(60)), now()),
            "1 mins ago"
        );
        assert_eq!(
            time_ago(Some(now() - Duration::seconds(3599)), now()),
            "59 mins ago"
        );
    }

    #[test]
    fn hour_buckets_truncate() {
        assert_eq!(
            time_ago(Some(now() - Duration::seconds(3600)), now()),
            "1 hours ago"
        );
        assert_eq!(
            time_ago(
                Some(now() - Duration::hours(23) - Duration::minutes(59)),
                now()
            ),
            "23 hours ago"
        );
    }

    #[test]
    fn day_bucket_starts_at_twenty_four_hours() {
        assert_eq!(
            time_ago(Some(now() - Duration::hours(24)), now()),
            "1 days ago"
        );
        assert_eq!(
            time_ago(Some(now() - Duration::days(10)), now()),
            "10 days ago"
        );
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        assert_eq!(time_ago(Some(now() + Duration::minutes(5)), now()), "Just now");
    }
}
