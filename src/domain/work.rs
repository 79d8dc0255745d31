//! Maintenance work items

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Progress state of a work item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    Open,
    InProgress,
    Done,
}

impl WorkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Open => "open",
            WorkStatus::InProgress => "in_progress",
            WorkStatus::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(WorkStatus::Open),
            "in_progress" | "inprogress" => Some(WorkStatus::InProgress),
            "done" => Some(WorkStatus::Done),
            _ => None,
        }
    }

    /// Label shown in the GUI
    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::Open => "Open",
            WorkStatus::InProgress => "In progress",
            WorkStatus::Done => "Done",
        }
    }

    pub const ALL: [WorkStatus; 3] = [WorkStatus::Open, WorkStatus::InProgress, WorkStatus::Done];
}

/// A maintenance work item ("work detail")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkDetail {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: WorkStatus,
    #[serde(default)]
    pub cost: Option<f64>,
    /// Tenant who reported the issue, if any
    #[serde(default)]
    pub tenant_id: Option<Uuid>,
    pub reported_on: NaiveDate,
}

impl WorkDetail {
    pub fn new(title: String, description: String, reported_on: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: WorkStatus::Open,
            cost: None,
            tenant_id: None,
            reported_on,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.status, WorkStatus::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in WorkStatus::ALL {
            assert_eq!(WorkStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(WorkStatus::from_str("nope"), None);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&WorkStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
