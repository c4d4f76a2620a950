//! Project use-case service.
//!
//! # Invariants
//! - Created projects pass `Project::validate`; the repository enforces it.
//! - The generated phase plan always carries all five gates, with every
//!   gate ahead of the current phase still open.

use crate::model::common::Priority;
use crate::model::phase::{PhaseId, PhasePlan};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::repo::project_repo::{ProjectQuery, ProjectRepoError, ProjectRepository};
use time::{Date, Duration};
use uuid::Uuid;

/// Input of the new-project form.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub customer: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status: ProjectStatus,
    pub priority: Priority,
}

/// Facade over the project repository.
pub struct ProjectService<'a> {
    repo: &'a mut ProjectRepository,
}

impl<'a> ProjectService<'a> {
    pub fn new(repo: &'a mut ProjectRepository) -> Self {
        Self { repo }
    }

    /// Creates a project from form input.
    ///
    /// The phase plan spreads the five gates evenly across the project
    /// range; gates before the current phase start out completed, the way
    /// in-flight seeded programs look.
    pub fn create(&mut self, draft: NewProject) -> Result<ProjectId, ProjectRepoError> {
        let phase_plan = default_phase_plan(
            draft.status,
            draft.start_date,
            draft.end_date,
        );
        let project = Project {
            id: Uuid::new_v4(),
            name: draft.name,
            customer: draft.customer,
            start_date: draft.start_date,
            end_date: draft.end_date,
            status: draft.status,
            progress: 0,
            priority: draft.priority,
            team: Vec::new(),
            phase_plan,
        };
        self.repo.create(project)
    }

    pub fn list(&self, query: &ProjectQuery) -> Vec<&Project> {
        self.repo.list(query)
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.repo.get(id)
    }

    pub fn set_progress(&mut self, id: ProjectId, progress: u8) -> Result<(), ProjectRepoError> {
        self.repo.update(id, |project| project.progress = progress)
    }

    pub fn delete(&mut self, id: ProjectId) -> Result<Project, ProjectRepoError> {
        self.repo.delete(id)
    }
}

fn default_phase_plan(status: ProjectStatus, start: Date, end: Date) -> PhasePlan {
    let current = status.as_phase();
    let span_days = (end - start).whole_days();
    let gate_count = PhaseId::ALL.len() as i64;
    let rows = PhaseId::ALL.iter().enumerate().map(|(index, &phase)| {
        let due = if index as i64 == gate_count - 1 {
            end
        } else {
            start + Duration::days(span_days * (index as i64 + 1) / gate_count)
        };
        (phase, phase < current, due)
    });
    PhasePlan::new(current, rows)
}

#[cfg(test)]
mod tests {
    use super::default_phase_plan;
    use crate::model::phase::PhaseId;
    use crate::model::project::ProjectStatus;
    use time::macros::date;

    #[test]
    fn generated_plan_completes_gates_behind_the_current_phase() {
        let plan =
            default_phase_plan(ProjectStatus::Proto, date!(2024 - 01 - 01), date!(2024 - 12 - 31));

        assert_eq!(plan.current, PhaseId::Proto);
        assert_eq!(plan.gate_count(), 5);
        assert!(plan.gate(PhaseId::Concept).unwrap().completed);
        assert!(plan.gate(PhaseId::Design).unwrap().completed);
        assert!(!plan.gate(PhaseId::Proto).unwrap().completed);
        assert_eq!(plan.gate(PhaseId::Sop).unwrap().due_date, date!(2024 - 12 - 31));
    }
}
