//! Project entity and write-path validation.
//!
//! # Responsibility
//! - Define the part-development program record and its team roster.
//! - Enforce the required-field rules the new-project form applies.
//!
//! # Invariants
//! - `name` and `customer` are non-blank on every persisted project.
//! - `start_date < end_date` on every persisted project.
//! - `progress` is a percentage in `0..=100`.

use crate::model::common::{Priority, Tone};
use crate::model::phase::PhasePlan;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use time::Date;
use uuid::Uuid;

/// Stable project identifier.
pub type ProjectId = Uuid;

/// Lifecycle status, aligned with the APQP phase the program sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Concept,
    Design,
    Proto,
    Validation,
    Sop,
    AfterSales,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 6] = [
        ProjectStatus::Concept,
        ProjectStatus::Design,
        ProjectStatus::Proto,
        ProjectStatus::Validation,
        ProjectStatus::Sop,
        ProjectStatus::AfterSales,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Concept => "Konsept",
            ProjectStatus::Design => "Tasarım",
            ProjectStatus::Proto => "Prototip",
            ProjectStatus::Validation => "Doğrulama",
            ProjectStatus::Sop => "SOP",
            ProjectStatus::AfterSales => "Satış Sonrası",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Concept => "concept",
            ProjectStatus::Design => "design",
            ProjectStatus::Proto => "proto",
            ProjectStatus::Validation => "validation",
            ProjectStatus::Sop => "sop",
            ProjectStatus::AfterSales => "after-sales",
        }
    }

    pub fn parse(value: &str) -> Option<ProjectStatus> {
        match value {
            "concept" => Some(ProjectStatus::Concept),
            "design" => Some(ProjectStatus::Design),
            "proto" => Some(ProjectStatus::Proto),
            "validation" => Some(ProjectStatus::Validation),
            "sop" => Some(ProjectStatus::Sop),
            "after-sales" => Some(ProjectStatus::AfterSales),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ProjectStatus::Concept => Tone::Gray,
            ProjectStatus::Design => Tone::Blue,
            ProjectStatus::Proto => Tone::Yellow,
            ProjectStatus::Validation => Tone::Orange,
            ProjectStatus::Sop => Tone::Green,
            ProjectStatus::AfterSales => Tone::Purple,
        }
    }

    /// Phase-gate the status corresponds to; after-sales maps onto SOP,
    /// the last gate of the plan.
    pub fn as_phase(self) -> crate::model::phase::PhaseId {
        use crate::model::phase::PhaseId;
        match self {
            ProjectStatus::Concept => PhaseId::Concept,
            ProjectStatus::Design => PhaseId::Design,
            ProjectStatus::Proto => PhaseId::Proto,
            ProjectStatus::Validation => PhaseId::Validation,
            ProjectStatus::Sop | ProjectStatus::AfterSales => PhaseId::Sop,
        }
    }
}

/// Team member role on a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberRole {
    Engineer,
    Quality,
    Logistics,
    CustomerRep,
    ProjectManager,
}

impl MemberRole {
    pub fn label(self) -> &'static str {
        match self {
            MemberRole::Engineer => "Mühendis",
            MemberRole::Quality => "Kalite",
            MemberRole::Logistics => "Lojistik",
            MemberRole::CustomerRep => "Müşteri Temsilcisi",
            MemberRole::ProjectManager => "Proje Yöneticisi",
        }
    }
}

/// One person on the project roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub id: Uuid,
    pub name: String,
    pub role: MemberRole,
    pub email: String,
}

/// A part-development program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub customer: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status: ProjectStatus,
    /// Overall progress percentage, `0..=100`.
    pub progress: u8,
    pub priority: Priority,
    pub team: Vec<ProjectMember>,
    pub phase_plan: PhasePlan,
}

/// Why a project was rejected on a write path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// `name` is empty after trimming.
    BlankName,
    /// `customer` is empty after trimming.
    BlankCustomer,
    /// `end_date` is not strictly after `start_date`.
    DateRangeInverted,
    /// `progress` exceeds 100.
    ProgressOutOfRange,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "project name must not be blank"),
            Self::BlankCustomer => write!(f, "project customer must not be blank"),
            Self::DateRangeInverted => {
                write!(f, "project end date must be after its start date")
            }
            Self::ProgressOutOfRange => {
                write!(f, "project progress must be between 0 and 100")
            }
        }
    }
}

impl Error for ProjectValidationError {}

impl Project {
    /// Checks the new-project form rules.
    ///
    /// Repositories call this on every create and update; read paths never
    /// see an invalid project.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProjectValidationError::BlankName);
        }
        if self.customer.trim().is_empty() {
            return Err(ProjectValidationError::BlankCustomer);
        }
        if self.start_date >= self.end_date {
            return Err(ProjectValidationError::DateRangeInverted);
        }
        if self.progress > 100 {
            return Err(ProjectValidationError::ProgressOutOfRange);
        }
        Ok(())
    }

    /// Whether the program still counts as active on the dashboard.
    pub fn is_active(&self) -> bool {
        self.progress < 100 && self.status != ProjectStatus::AfterSales
    }
}
