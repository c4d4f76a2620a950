//! Engineering documents attached to projects.

use crate::model::common::Tone;
use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// Stable document identifier.
pub type DocumentId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Cad,
    Drawing,
    Report,
    Specification,
    Other,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 5] = [
        DocumentKind::Cad,
        DocumentKind::Drawing,
        DocumentKind::Report,
        DocumentKind::Specification,
        DocumentKind::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Cad => "CAD Modeli",
            DocumentKind::Drawing => "Teknik Resim",
            DocumentKind::Report => "Rapor",
            DocumentKind::Specification => "Spesifikasyon",
            DocumentKind::Other => "Diğer",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Cad => "cad",
            DocumentKind::Drawing => "drawing",
            DocumentKind::Report => "report",
            DocumentKind::Specification => "specification",
            DocumentKind::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<DocumentKind> {
        match value {
            "cad" => Some(DocumentKind::Cad),
            "drawing" => Some(DocumentKind::Drawing),
            "report" => Some(DocumentKind::Report),
            "specification" => Some(DocumentKind::Specification),
            "other" => Some(DocumentKind::Other),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            DocumentKind::Cad => Tone::Blue,
            DocumentKind::Drawing => Tone::Green,
            DocumentKind::Report => Tone::Yellow,
            DocumentKind::Specification => Tone::Purple,
            DocumentKind::Other => Tone::Gray,
        }
    }
}

/// Who may open a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
    Public,
    Internal,
    Restricted,
}

impl AccessLevel {
    pub fn label(self) -> &'static str {
        match self {
            AccessLevel::Public => "Herkese Açık",
            AccessLevel::Internal => "Dahili",
            AccessLevel::Restricted => "Kısıtlı",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Internal => "internal",
            AccessLevel::Restricted => "restricted",
        }
    }

    pub fn parse(value: &str) -> Option<AccessLevel> {
        match value {
            "public" => Some(AccessLevel::Public),
            "internal" => Some(AccessLevel::Internal),
            "restricted" => Some(AccessLevel::Restricted),
            _ => None,
        }
    }
}

/// One uploaded file record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub kind: DocumentKind,
    /// Display version string such as `V2.1`.
    pub version: String,
    pub project_id: ProjectId,
    pub uploaded_by: String,
    pub upload_date: Date,
    /// Human-readable size such as `2.4 MB`; never parsed.
    pub size: String,
    pub access_level: AccessLevel,
}
