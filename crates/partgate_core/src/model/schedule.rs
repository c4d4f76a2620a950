//! Gantt-chart schedule entries.
//!
//! # Invariants
//! - `dependencies` is inert metadata: nothing orders, validates or schedules
//!   from it. Keep it that way unless product requirements change.
//! - The date range is intentionally NOT validated; a task with
//!   `end_date < start_date` renders with a negative width, which is a
//!   cosmetic failure the timeline accepts.

use crate::model::phase::PhaseId;
use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// Stable schedule-entry identifier.
pub type GanttTaskId = Uuid;

/// One bar on the Gantt timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttTask {
    pub id: GanttTaskId,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    /// Done percentage, `0..=100`; drawn as an overlay inside the bar.
    pub progress: u8,
    /// Declared upstream tasks; informational only.
    pub dependencies: Vec<GanttTaskId>,
    pub assignee: String,
    pub project_id: ProjectId,
    pub phase: PhaseId,
}
