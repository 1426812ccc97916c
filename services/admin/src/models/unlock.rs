//! Unlock request model and its status state machine

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an unlock request.
///
/// A request starts pending; approval and rejection are both terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnlockStatus {
    Pending,
    Approved,
    Rejected,
}

impl UnlockStatus {
    /// Canonical text form, as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnlockStatus::Pending => "PENDING",
            UnlockStatus::Approved => "APPROVED",
            UnlockStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "PENDING" => Some(UnlockStatus::Pending),
            "APPROVED" => Some(UnlockStatus::Approved),
            "REJECTED" => Some(UnlockStatus::Rejected),
            _ => None,
        }
    }

    /// Whether a request in this state can still be processed.
    pub fn is_pending(&self) -> bool {
        matches!(self, UnlockStatus::Pending)
    }
}

/// An unlock request row joined with its teacher and course names
#[derive(Debug, Clone, Serialize)]
pub struct UnlockRequest {
    pub id: Uuid,
    pub teacher_id: Option<Uuid>,
    pub teacher_name: Option<String>,
    pub course_id: Uuid,
    pub course_name: String,
    pub request_date: NaiveDate,
    pub status: UnlockStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_canonical_forms() {
        for status in [
            UnlockStatus::Pending,
            UnlockStatus::Approved,
            UnlockStatus::Rejected,
        ] {
            assert_eq!(UnlockStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!(UnlockStatus::parse("pending"), Some(UnlockStatus::Pending));
        assert_eq!(UnlockStatus::parse("Approved"), Some(UnlockStatus::Approved));
        assert_eq!(UnlockStatus::parse("REJECTED"), Some(UnlockStatus::Rejected));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(UnlockStatus::parse("CANCELLED"), None);
        assert_eq!(UnlockStatus::parse(""), None);
    }

    #[test]
    fn only_pending_can_be_processed() {
        assert!(UnlockStatus::Pending.is_pending());
        assert!(!UnlockStatus::Approved.is_pending());
        assert!(!UnlockStatus::Rejected.is_pending());
    }
}
