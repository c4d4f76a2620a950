//! Quality records: PPAP, measurement and non-conformance paperwork.

use crate::model::common::Tone;
use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// Stable quality-record identifier.
pub type QualityRecordId = Uuid;

/// Kind of quality paperwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityKind {
    Ppap,
    Cmm,
    Fai,
    #[serde(rename = "8d")]
    EightD,
    NonConformance,
}

impl QualityKind {
    pub const ALL: [QualityKind; 5] = [
        QualityKind::Ppap,
        QualityKind::Cmm,
        QualityKind::Fai,
        QualityKind::EightD,
        QualityKind::NonConformance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QualityKind::Ppap => "PPAP",
            QualityKind::Cmm => "CMM Ölçüm",
            QualityKind::Fai => "FAI Raporu",
            QualityKind::EightD => "8D Raporu",
            QualityKind::NonConformance => "Uygunsuzluk",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QualityKind::Ppap => "ppap",
            QualityKind::Cmm => "cmm",
            QualityKind::Fai => "fai",
            QualityKind::EightD => "8d",
            QualityKind::NonConformance => "non-conformance",
        }
    }

    pub fn parse(value: &str) -> Option<QualityKind> {
        match value {
            "ppap" => Some(QualityKind::Ppap),
            "cmm" => Some(QualityKind::Cmm),
            "fai" => Some(QualityKind::Fai),
            "8d" => Some(QualityKind::EightD),
            "non-conformance" => Some(QualityKind::NonConformance),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            QualityKind::Ppap => Tone::Blue,
            QualityKind::Cmm => Tone::Green,
            QualityKind::Fai => Tone::Yellow,
            QualityKind::EightD => Tone::Red,
            QualityKind::NonConformance => Tone::Orange,
        }
    }
}

/// Review state of a quality record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityStatus {
    Pending,
    Approved,
    Rejected,
    InReview,
}

impl QualityStatus {
    pub const ALL: [QualityStatus; 4] = [
        QualityStatus::Pending,
        QualityStatus::Approved,
        QualityStatus::Rejected,
        QualityStatus::InReview,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QualityStatus::Pending => "Bekliyor",
            QualityStatus::Approved => "Onaylandı",
            QualityStatus::Rejected => "Reddedildi",
            QualityStatus::InReview => "İnceleniyor",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QualityStatus::Pending => "pending",
            QualityStatus::Approved => "approved",
            QualityStatus::Rejected => "rejected",
            QualityStatus::InReview => "in-review",
        }
    }

    pub fn parse(value: &str) -> Option<QualityStatus> {
        match value {
            "pending" => Some(QualityStatus::Pending),
            "approved" => Some(QualityStatus::Approved),
            "rejected" => Some(QualityStatus::Rejected),
            "in-review" => Some(QualityStatus::InReview),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            QualityStatus::Pending => Tone::Gray,
            QualityStatus::Approved => Tone::Green,
            QualityStatus::Rejected => Tone::Red,
            QualityStatus::InReview => Tone::Yellow,
        }
    }
}

/// One quality document tracked against a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityRecord {
    pub id: QualityRecordId,
    pub project_id: ProjectId,
    pub kind: QualityKind,
    pub title: String,
    pub status: QualityStatus,
    pub created_date: Date,
    pub due_date: Date,
    pub assigned_to: String,
    pub files: Vec<String>,
    pub description: String,
}
