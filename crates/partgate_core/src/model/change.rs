//! Engineering change requests and their approval trail.

use crate::model::budget::Amount;
use crate::model::common::{Priority, Tone};
use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Stable change-request identifier.
pub type ChangeRequestId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeRequestStatus {
    Pending,
    Approved,
    Rejected,
    Implemented,
}

impl ChangeRequestStatus {
    pub const ALL: [ChangeRequestStatus; 4] = [
        ChangeRequestStatus::Pending,
        ChangeRequestStatus::Approved,
        ChangeRequestStatus::Rejected,
        ChangeRequestStatus::Implemented,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChangeRequestStatus::Pending => "Bekliyor",
            ChangeRequestStatus::Approved => "Onaylandı",
            ChangeRequestStatus::Rejected => "Reddedildi",
            ChangeRequestStatus::Implemented => "Uygulandı",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChangeRequestStatus::Pending => "pending",
            ChangeRequestStatus::Approved => "approved",
            ChangeRequestStatus::Rejected => "rejected",
            ChangeRequestStatus::Implemented => "implemented",
        }
    }

    pub fn parse(value: &str) -> Option<ChangeRequestStatus> {
        match value {
            "pending" => Some(ChangeRequestStatus::Pending),
            "approved" => Some(ChangeRequestStatus::Approved),
            "rejected" => Some(ChangeRequestStatus::Rejected),
            "implemented" => Some(ChangeRequestStatus::Implemented),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ChangeRequestStatus::Pending => Tone::Yellow,
            ChangeRequestStatus::Approved => Tone::Green,
            ChangeRequestStatus::Rejected => Tone::Red,
            ChangeRequestStatus::Implemented => Tone::Blue,
        }
    }
}

/// Estimated consequences of accepting the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub cost: Amount,
    pub timeline_days: i32,
    pub scope: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequestComment {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub timestamp: OffsetDateTime,
}

/// One customer or internal change request against a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequest {
    pub id: ChangeRequestId,
    pub project_id: ProjectId,
    pub title: String,
    pub description: String,
    pub requested_by: String,
    pub request_date: Date,
    pub status: ChangeRequestStatus,
    pub priority: Priority,
    pub impact: ImpactAssessment,
    pub approved_by: Option<String>,
    pub approval_date: Option<Date>,
    pub implementation_date: Option<Date>,
    pub comments: Vec<ChangeRequestComment>,
}
