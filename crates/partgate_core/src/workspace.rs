//! The single in-memory application state.
//!
//! # Responsibility
//! - Own every repository plus the global theme flag.
//! - Hand views and services `&mut` access; nothing else shares state.
//!
//! # Invariants
//! - One `Workspace` per process/session; all mutation happens through it
//!   on a single thread inside UI event handlers.
//! - State lives only for the session; nothing is persisted.

use crate::repo::budget_repo::BudgetRepository;
use crate::repo::change_repo::ChangeRequestRepository;
use crate::repo::document_repo::DocumentRepository;
use crate::repo::equipment_repo::EquipmentRepository;
use crate::repo::escalation_repo::EscalationRepository;
use crate::repo::inventory_repo::InventoryRepository;
use crate::repo::notification_repo::NotificationRepository;
use crate::repo::project_repo::ProjectRepository;
use crate::repo::quality_repo::QualityRepository;
use crate::repo::schedule_repo::ScheduleRepository;
use crate::repo::task_repo::TaskRepository;
use crate::seed;
use crate::theme::Theme;

/// Everything the dashboard session works on.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub projects: ProjectRepository,
    pub tasks: TaskRepository,
    pub schedule: ScheduleRepository,
    pub budgets: BudgetRepository,
    pub quality: QualityRepository,
    pub inventory: InventoryRepository,
    pub equipment: EquipmentRepository,
    pub documents: DocumentRepository,
    pub changes: ChangeRequestRepository,
    pub notifications: NotificationRepository,
    pub escalation: EscalationRepository,
    pub theme: Theme,
}

impl Workspace {
    /// Empty state, used by tests that build their own rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// State loaded with the demo rows every view starts from.
    pub fn seeded() -> Self {
        Self {
            projects: ProjectRepository::from_rows(seed::projects()),
            tasks: TaskRepository::from_rows(seed::tasks()),
            schedule: ScheduleRepository::from_rows(seed::gantt_tasks()),
            budgets: BudgetRepository::from_rows(seed::budgets()),
            quality: QualityRepository::from_rows(seed::quality_records()),
            inventory: InventoryRepository::from_rows(seed::inventory()),
            equipment: EquipmentRepository::from_rows(seed::equipment()),
            documents: DocumentRepository::from_rows(seed::documents()),
            changes: ChangeRequestRepository::from_rows(seed::change_requests()),
            notifications: NotificationRepository::from_rows(seed::notifications()),
            escalation: EscalationRepository::from_rows(
                seed::escalation_rules(),
                seed::delayed_actions(),
                seed::escalation_history(),
            ),
            theme: Theme::default(),
        }
    }
}
