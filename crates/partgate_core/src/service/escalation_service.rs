//! Escalation use-case service: simulated mail, templates and deep links.
//!
//! # Responsibility
//! - Render the escalation mail for a delayed action and "send" it, which
//!   means logging a structured event and appending a history row.
//! - Substitute `{placeholder}` holes in rule subject templates.
//! - Build the Outlook web compose deep link for the delayed-task digest.
//!
//! # Invariants
//! - No transport exists; nothing leaves the process except log lines.
//! - Unknown placeholders stay in the text untouched.

use crate::locale;
use crate::model::escalation::{
    DelayedAction, DelayedActionId, EscalationCondition, EscalationEvent, EscalationRuleId,
};
use crate::repo::escalation_repo::EscalationRepository;
use crate::repo::RepoResult;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::error::Error;
use std::fmt::{Display, Formatter};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").expect("valid placeholder regex"));

/// Compose endpoint of the Outlook web deep link.
const OUTLOOK_COMPOSE_URL: &str = "https://outlook.office.com/mail/deeplink/compose";
/// Address used when no active rule names a recipient.
const FALLBACK_RECIPIENT: &str = "manager@company.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationError {
    ActionNotFound(DelayedActionId),
}

impl Display for EscalationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ActionNotFound(id) => write!(f, "delayed action not found: {id}"),
        }
    }
}

impl Error for EscalationError {}

/// Facade over the escalation repository.
pub struct EscalationService<'a> {
    repo: &'a mut EscalationRepository,
}

impl<'a> EscalationService<'a> {
    pub fn new(repo: &'a mut EscalationRepository) -> Self {
        Self { repo }
    }

    pub fn set_rule_active(&mut self, id: EscalationRuleId, active: bool) -> RepoResult<()> {
        self.repo.set_rule_active(id, active)
    }

    /// "Sends" the escalation mail for one delayed action.
    ///
    /// The body is rendered, logged as an `escalation_email` event and the
    /// sent mail is recorded in the history store. Returns the history row.
    pub fn send(
        &mut self,
        action_id: DelayedActionId,
        now: OffsetDateTime,
    ) -> Result<EscalationEvent, EscalationError> {
        let action = self
            .repo
            .delayed_action(action_id)
            .cloned()
            .ok_or(EscalationError::ActionNotFound(action_id))?;

        let body = escalation_email_body(&action);
        let escalated_to = self.primary_recipient();

        log::info!(
            "event=escalation_email module=escalation status=sent to={} task={:?} days_overdue={} body_chars={}",
            escalated_to,
            action.title,
            action.days_overdue,
            body.chars().count()
        );

        let event = EscalationEvent {
            id: Uuid::new_v4(),
            task_name: action.title.clone(),
            escalated_to,
            escalated_at: now,
            reason: format!("Görev {} gün gecikmiş", action.days_overdue),
            status: "sent".to_string(),
        };
        self.repo.record_event(event.clone());
        Ok(event)
    }

    /// Deep link that opens Outlook web with the delayed-task digest.
    pub fn outlook_compose_url(&self) -> String {
        outlook_compose_url(self.repo.delayed_actions())
    }

    /// First recipient of the first active overdue rule.
    fn primary_recipient(&self) -> String {
        self.repo
            .rules()
            .iter()
            .filter(|rule| rule.active && rule.condition == EscalationCondition::Overdue)
            .flat_map(|rule| rule.recipients.first())
            .next()
            .cloned()
            .unwrap_or_else(|| FALLBACK_RECIPIENT.to_string())
    }
}

/// Fills `{placeholder}` holes in a rule subject template.
///
/// Known keys: `task_name`, `project_name`, `assignee`, `days_overdue`,
/// `days_left`. Anything else is left in place.
pub fn substitute_template(template: &str, action: &DelayedAction, today: Date) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
            "task_name" => action.title.clone(),
            "project_name" => action.project_name.clone(),
            "assignee" => action.assignee.clone(),
            "days_overdue" => action.days_overdue.to_string(),
            "days_left" => (action.due_date - today).whole_days().max(0).to_string(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// The full mail body for a delayed action, as the dashboard "sends" it.
pub fn escalation_email_body(action: &DelayedAction) -> String {
    format!(
        "Konu: Geciken Görev Eskalasyonu - {title}\n\
         \n\
         Merhaba,\n\
         \n\
         Aşağıdaki görev belirlenen sürede tamamlanmamıştır:\n\
         \n\
         Görev: {title}\n\
         Proje: {project}\n\
         Sorumlu: {assignee}\n\
         Teslim Tarihi: {due}\n\
         Gecikme: {overdue} gün\n\
         \n\
         Lütfen durumu kontrol ediniz ve gerekli aksiyonu alınız.\n\
         \n\
         Saygılarımla,\n\
         Proje Yönetim Sistemi\n",
        title = action.title,
        project = action.project_name,
        assignee = action.assignee,
        due = locale::format_date(action.due_date),
        overdue = action.days_overdue,
    )
}

/// Builds the Outlook compose URL for the whole delayed-task list.
pub fn outlook_compose_url(actions: &[DelayedAction]) -> String {
    let digest = actions
        .iter()
        .map(|action| {
            format!(
                "• {} ({} gün gecikmiş) - {}",
                action.title, action.days_overdue, action.assignee
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let body = format!("Geciken görevler listesi:\n\n{digest}");
    format!(
        "{OUTLOOK_COMPOSE_URL}?subject={}&body={}",
        urlencoding::encode("Geciken Görevler Raporu"),
        urlencoding::encode(&body)
    )
}
