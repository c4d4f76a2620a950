//! Escalation rules, delayed actions and the sent-mail trail.
//!
//! Email "sending" here is a stand-in: rendering a body, logging it and
//! appending a history event. No transport exists anywhere in the system.

use crate::model::common::Priority;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

pub type EscalationRuleId = Uuid;
pub type DelayedActionId = Uuid;
pub type EscalationEventId = Uuid;

/// Trigger condition an escalation rule watches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EscalationCondition {
    Overdue,
    Approaching,
    NoUpdate,
}

impl EscalationCondition {
    pub fn label(self) -> &'static str {
        match self {
            EscalationCondition::Overdue => "Gecikmiş",
            EscalationCondition::Approaching => "Yaklaşan",
            EscalationCondition::NoUpdate => "Güncelleme Yok",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EscalationCondition::Overdue => "overdue",
            EscalationCondition::Approaching => "approaching",
            EscalationCondition::NoUpdate => "no-update",
        }
    }

    pub fn parse(value: &str) -> Option<EscalationCondition> {
        match value {
            "overdue" => Some(EscalationCondition::Overdue),
            "approaching" => Some(EscalationCondition::Approaching),
            "no-update" => Some(EscalationCondition::NoUpdate),
            _ => None,
        }
    }
}

/// Configured automatic-notification rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationRule {
    pub id: EscalationRuleId,
    pub name: String,
    pub condition: EscalationCondition,
    /// Days past (or before) due date before the rule fires.
    pub threshold_days: u32,
    pub recipients: Vec<String>,
    /// Subject template with `{task_name}`-style holes.
    pub email_template: String,
    pub active: bool,
}

/// A task that blew past its due date, as listed on the escalation screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedAction {
    pub id: DelayedActionId,
    pub title: String,
    pub project_name: String,
    pub assignee: String,
    pub due_date: Date,
    pub days_overdue: u32,
    pub priority: Priority,
    pub last_update: Date,
}

/// One escalation mail recorded in the history tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationEvent {
    pub id: EscalationEventId,
    pub task_name: String,
    pub escalated_to: String,
    pub escalated_at: OffsetDateTime,
    pub reason: String,
    /// Delivery state; always `sent` for the simulated transport.
    pub status: String,
}
