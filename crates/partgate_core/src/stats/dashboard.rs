//! Headline numbers and distributions for the dashboard view.

use crate::model::common::Priority;
use crate::model::project::{Project, ProjectStatus};
use crate::model::task::{Task, TaskStatus};
use time::Date;

/// Days ahead within which a due date counts as "upcoming".
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// The stat-card row at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    pub critical_tasks: usize,
    pub upcoming_deadlines: usize,
}

impl DashboardStats {
    pub fn collect(projects: &[Project], tasks: &[Task], today: Date) -> Self {
        let completed_projects = projects.iter().filter(|p| !p.is_active()).count();
        let critical_tasks = tasks
            .iter()
            .filter(|task| task.priority == Priority::Critical && task.is_open())
            .count();
        let upcoming_deadlines = tasks
            .iter()
            .filter(|task| {
                let days = (task.due_date - today).whole_days();
                task.is_open() && (0..=UPCOMING_WINDOW_DAYS).contains(&days)
            })
            .count();
        Self {
            total_projects: projects.len(),
            active_projects: projects.len() - completed_projects,
            completed_projects,
            critical_tasks,
            upcoming_deadlines,
        }
    }
}

/// One bar of the project status distribution chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusSlice {
    pub status: ProjectStatus,
    pub count: usize,
    pub percentage: f64,
}

pub fn project_status_distribution(projects: &[Project]) -> Vec<StatusSlice> {
    let total = projects.len();
    ProjectStatus::ALL
        .iter()
        .map(|&status| {
            let count = projects.iter().filter(|p| p.status == status).count();
            StatusSlice {
                status,
                count,
                percentage: share(count, total),
            }
        })
        .collect()
}

/// One slice of the task distribution donut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskSlice {
    pub status: TaskStatus,
    pub count: usize,
    pub percentage: f64,
}

pub fn task_distribution(tasks: &[Task]) -> Vec<TaskSlice> {
    let total = tasks.len();
    TaskStatus::ALL
        .iter()
        .map(|&status| {
            let count = tasks.iter().filter(|t| t.status == status).count();
            TaskSlice {
                status,
                count,
                percentage: share(count, total),
            }
        })
        .collect()
}

/// A task annotated with how many days remain until its due date.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineEntry {
    pub task: Task,
    /// Negative when the task is already late.
    pub days_until_due: i64,
}

/// Tasks sorted by closest due date first, truncated to `limit`.
pub fn upcoming_deadlines(tasks: &[Task], today: Date, limit: usize) -> Vec<DeadlineEntry> {
    let mut entries: Vec<DeadlineEntry> = tasks
        .iter()
        .map(|task| DeadlineEntry {
            task: task.clone(),
            days_until_due: (task.due_date - today).whole_days(),
        })
        .collect();
    entries.sort_by_key(|entry| entry.days_until_due);
    entries.truncate(limit);
    entries
}

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
