//! Report generation over the live workspace snapshot.
//!
//! Generation is a read: rows are derived on demand and the act of
//! "generating" is recorded as a log event, the stand-in for a real export
//! backend.

use crate::model::project::ProjectStatus;
use crate::model::quality::{QualityKind, QualityStatus};
use crate::model::task::TaskStatus;
use crate::stats::budget::{variance_rows, VarianceRow};
use crate::workspace::Workspace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// Which report the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    ProjectProgress,
    BudgetAnalysis,
    QualityMetrics,
    TeamPerformance,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::ProjectProgress,
        ReportKind::BudgetAnalysis,
        ReportKind::QualityMetrics,
        ReportKind::TeamPerformance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::ProjectProgress => "Proje İlerleme Raporu",
            ReportKind::BudgetAnalysis => "Bütçe Analizi",
            ReportKind::QualityMetrics => "Kalite Metrikleri",
            ReportKind::TeamPerformance => "Ekip Performansı",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::ProjectProgress => "project-progress",
            ReportKind::BudgetAnalysis => "budget-analysis",
            ReportKind::QualityMetrics => "quality-metrics",
            ReportKind::TeamPerformance => "team-performance",
        }
    }

    pub fn parse(value: &str) -> Option<ReportKind> {
        match value {
            "project-progress" => Some(ReportKind::ProjectProgress),
            "budget-analysis" => Some(ReportKind::BudgetAnalysis),
            "quality-metrics" => Some(ReportKind::QualityMetrics),
            "team-performance" => Some(ReportKind::TeamPerformance),
            _ => None,
        }
    }
}

/// Reporting period selector; display metadata only, rows are not
/// date-filtered (the seeded snapshot has no activity log to filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportRange {
    Last7Days,
    Last30Days,
    LastQuarter,
    LastYear,
}

impl ReportRange {
    pub fn label(self) -> &'static str {
        match self {
            ReportRange::Last7Days => "Son 7 Gün",
            ReportRange::Last30Days => "Son 30 Gün",
            ReportRange::LastQuarter => "Son Çeyrek",
            ReportRange::LastYear => "Son 1 Yıl",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportRange::Last7Days => "last-7-days",
            ReportRange::Last30Days => "last-30-days",
            ReportRange::LastQuarter => "last-quarter",
            ReportRange::LastYear => "last-year",
        }
    }

    pub fn parse(value: &str) -> Option<ReportRange> {
        match value {
            "last-7-days" => Some(ReportRange::Last7Days),
            "last-30-days" => Some(ReportRange::Last30Days),
            "last-quarter" => Some(ReportRange::LastQuarter),
            "last-year" => Some(ReportRange::LastYear),
            _ => None,
        }
    }
}

/// One line of the progress report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRow {
    pub project: String,
    pub progress: u8,
    pub status: ProjectStatus,
    pub deadline: Date,
}

/// One line of the quality-metrics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityMetricRow {
    pub kind: QualityKind,
    pub total: usize,
    pub approved: usize,
}

/// One line of the team-performance report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPerformanceRow {
    pub assignee: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
}

/// Report rows, one variant per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportBody {
    ProjectProgress(Vec<ProgressRow>),
    BudgetAnalysis(Vec<VarianceRow>),
    QualityMetrics(Vec<QualityMetricRow>),
    TeamPerformance(Vec<TeamPerformanceRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub kind: ReportKind,
    pub range: ReportRange,
    pub title: String,
    pub body: ReportBody,
}

/// Derives the requested report from the current snapshot.
pub fn generate(workspace: &Workspace, kind: ReportKind, range: ReportRange) -> Report {
    let body = match kind {
        ReportKind::ProjectProgress => ReportBody::ProjectProgress(progress_rows(workspace)),
        ReportKind::BudgetAnalysis => ReportBody::BudgetAnalysis(budget_rows(workspace)),
        ReportKind::QualityMetrics => ReportBody::QualityMetrics(quality_rows(workspace)),
        ReportKind::TeamPerformance => ReportBody::TeamPerformance(team_rows(workspace)),
    };

    log::info!(
        "event=report_generated module=reports status=ok kind={} range={}",
        kind.as_str(),
        range.as_str()
    );

    Report {
        kind,
        range,
        title: kind.label().to_string(),
        body,
    }
}

fn progress_rows(workspace: &Workspace) -> Vec<ProgressRow> {
    workspace
        .projects
        .all()
        .iter()
        .map(|project| ProgressRow {
            project: project.name.clone(),
            progress: project.progress,
            status: project.status,
            deadline: project.end_date,
        })
        .collect()
}

fn budget_rows(workspace: &Workspace) -> Vec<VarianceRow> {
    workspace
        .budgets
        .all()
        .iter()
        .flat_map(variance_rows)
        .collect()
}

fn quality_rows(workspace: &Workspace) -> Vec<QualityMetricRow> {
    let records = workspace.quality.all();
    QualityKind::ALL
        .iter()
        .map(|&kind| QualityMetricRow {
            kind,
            total: records.iter().filter(|rec| rec.kind == kind).count(),
            approved: records
                .iter()
                .filter(|rec| rec.kind == kind && rec.status == QualityStatus::Approved)
                .count(),
        })
        .collect()
}

fn team_rows(workspace: &Workspace) -> Vec<TeamPerformanceRow> {
    let mut by_assignee: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for task in workspace.tasks.all() {
        let entry = by_assignee.entry(task.assigned_to.as_str()).or_default();
        entry.0 += 1;
        if task.status == TaskStatus::Completed {
            entry.1 += 1;
        }
    }
    by_assignee
        .into_iter()
        .map(|(assignee, (total_tasks, completed_tasks))| TeamPerformanceRow {
            assignee: assignee.to_string(),
            total_tasks,
            completed_tasks,
        })
        .collect()
}
