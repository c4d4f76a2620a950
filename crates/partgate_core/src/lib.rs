//! Core domain logic for the PartGate program dashboard.
//! This crate is the single source of truth for entities, derived numbers
//! and the timeline mathematics; frontends only render what it returns.

pub mod locale;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod stats;
pub mod theme;
pub mod timeline;
pub mod workspace;

pub use logging::{active_log_dir, init_logging};
pub use model::common::{Priority, Tone};
pub use model::phase::{PhaseGate, PhaseId, PhasePlan};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use model::schedule::{GanttTask, GanttTaskId};
pub use model::task::{Task, TaskId, TaskStatus};
pub use service::schedule_service::{GanttLayout, GanttRow, ScheduleService};
pub use theme::Theme;
pub use timeline::{
    ceil_days, classify_gate, phase_segments, tick_label, BarGeometry, PhaseSegment,
    PhaseStatus, TimeWindow, ViewMode, TICK_DISPLAY_LIMIT,
};
pub use workspace::Workspace;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
