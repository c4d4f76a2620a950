//! Gantt schedule use-case service and layout assembly.
//!
//! # Invariants
//! - New entries start at zero progress with no dependencies.
//! - Layout output is unclamped; see `timeline::gantt`.

use crate::model::phase::PhaseId;
use crate::model::project::{Project, ProjectId};
use crate::model::schedule::{GanttTask, GanttTaskId};
use crate::repo::schedule_repo::ScheduleRepository;
use crate::repo::RepoError;
use crate::timeline::gantt::{BarGeometry, TimeWindow, ViewMode, TICK_DISPLAY_LIMIT};
use std::error::Error;
use std::fmt::{Display, Formatter};
use time::Date;
use uuid::Uuid;

/// Error from schedule use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// A required form field was left blank.
    MissingField(&'static str),
    NotFound(GanttTaskId),
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field is blank: {field}"),
            Self::NotFound(id) => write!(f, "schedule entry not found: {id}"),
        }
    }
}

impl Error for ScheduleError {}

impl From<RepoError> for ScheduleError {
    fn from(value: RepoError) -> Self {
        let RepoError::NotFound(id) = value;
        Self::NotFound(id)
    }
}

/// Input of the new-entry form on the Gantt view.
#[derive(Debug, Clone)]
pub struct GanttTaskDraft {
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub assignee: String,
    pub phase: PhaseId,
}

/// One positioned row of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttRow {
    pub task: GanttTask,
    pub bar: BarGeometry,
}

/// Everything the Gantt view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttLayout {
    pub window: TimeWindow,
    pub mode: ViewMode,
    /// Header ticks, at most [`TICK_DISPLAY_LIMIT`] of them.
    pub ticks: Vec<Date>,
    /// Generated ticks that did not fit the header.
    pub hidden_ticks: usize,
    pub rows: Vec<GanttRow>,
}

/// Facade over the schedule repository.
pub struct ScheduleService<'a> {
    repo: &'a mut ScheduleRepository,
}

impl<'a> ScheduleService<'a> {
    pub fn new(repo: &'a mut ScheduleRepository) -> Self {
        Self { repo }
    }

    /// Adds an entry with form defaults: zero progress, no dependencies.
    ///
    /// The date range is accepted as-is, inverted or not.
    pub fn add_task(
        &mut self,
        draft: GanttTaskDraft,
        project_id: ProjectId,
    ) -> Result<GanttTaskId, ScheduleError> {
        if draft.name.trim().is_empty() {
            return Err(ScheduleError::MissingField("name"));
        }
        Ok(self.repo.create(GanttTask {
            id: Uuid::new_v4(),
            name: draft.name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            progress: 0,
            dependencies: Vec::new(),
            assignee: draft.assignee,
            project_id,
            phase: draft.phase,
        }))
    }

    pub fn rename(&mut self, id: GanttTaskId, name: impl Into<String>) -> Result<(), ScheduleError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ScheduleError::MissingField("name"));
        }
        Ok(self.repo.update(id, |task| task.name = name)?)
    }

    pub fn reschedule(
        &mut self,
        id: GanttTaskId,
        start_date: Date,
        end_date: Date,
    ) -> Result<(), ScheduleError> {
        Ok(self.repo.update(id, |task| {
            task.start_date = start_date;
            task.end_date = end_date;
        })?)
    }

    pub fn set_progress(&mut self, id: GanttTaskId, progress: u8) -> Result<(), ScheduleError> {
        Ok(self
            .repo
            .update(id, |task| task.progress = progress.min(100))?)
    }

    pub fn remove(&mut self, id: GanttTaskId) -> Result<GanttTask, ScheduleError> {
        Ok(self.repo.delete(id)?)
    }

    /// Computes the full chart for the current filter.
    ///
    /// With a project selected the window pins to its date range; otherwise
    /// the rolling today-anchored window applies and `today` matters.
    pub fn layout(
        &self,
        project: Option<&Project>,
        mode: ViewMode,
        today: Date,
    ) -> GanttLayout {
        let window = match project {
            Some(project) => TimeWindow::for_project(project),
            None => TimeWindow::rolling(today),
        };

        let mut ticks = window.ticks(mode);
        let hidden_ticks = ticks.len().saturating_sub(TICK_DISPLAY_LIMIT);
        ticks.truncate(TICK_DISPLAY_LIMIT);

        let rows = self
            .repo
            .list(project.map(|p| p.id))
            .into_iter()
            .map(|task| GanttRow {
                bar: window.bar(task.start_date, task.end_date),
                task: task.clone(),
            })
            .collect();

        GanttLayout {
            window,
            mode,
            ticks,
            hidden_ticks,
            rows,
        }
    }
}
