//! Notices sent to tenants

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeStatus {
    Draft,
    Sent,
}

impl NoticeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeStatus::Draft => "draft",
            NoticeStatus::Sent => "sent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(NoticeStatus::Draft),
            "sent" => Some(NoticeStatus::Sent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoticeStatus::Draft => "Draft",
            NoticeStatus::Sent => "Sent",
        }
    }
}

/// A notice to a tenant.
///
/// `points` keeps the operator's raw bullet points; `body` is the prose that
/// actually goes out (typed by hand or drafted by the AI helper).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub title: String,
    pub points: String,
    pub body: String,
    pub status: NoticeStatus,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(tenant_id: Uuid, title: String, points: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            title,
            points,
            body,
            status: NoticeStatus::Draft,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [NoticeStatus::Draft, NoticeStatus::Sent] {
            assert_eq!(NoticeStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_new_notice_starts_as_draft() {
        let notice = Notice::new(Uuid::new_v4(), "Rent".into(), "- pay".into(), "Please pay".into());
        assert_eq!(notice.status, NoticeStatus::Draft);
    }
}
