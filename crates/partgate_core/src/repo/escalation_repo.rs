//! Escalation state: rules, the delayed-action list and the sent history.
//!
//! One repository holds all three stores because the escalation screen owns
//! them together and mutates them in one gesture (send = consume a delayed
//! action into a history event).

use crate::model::escalation::{
    DelayedAction, DelayedActionId, EscalationEvent, EscalationEventId, EscalationRule,
    EscalationRuleId,
};
use crate::repo::{Entity, MemoryStore, RepoResult};

impl Entity for EscalationRule {
    fn id(&self) -> EscalationRuleId {
        self.id
    }
}

impl Entity for DelayedAction {
    fn id(&self) -> DelayedActionId {
        self.id
    }
}

impl Entity for EscalationEvent {
    fn id(&self) -> EscalationEventId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct EscalationRepository {
    rules: MemoryStore<EscalationRule>,
    delayed: MemoryStore<DelayedAction>,
    history: MemoryStore<EscalationEvent>,
}

impl EscalationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(
        rules: Vec<EscalationRule>,
        delayed: Vec<DelayedAction>,
        history: Vec<EscalationEvent>,
    ) -> Self {
        Self {
            rules: MemoryStore::from_rows(rules),
            delayed: MemoryStore::from_rows(delayed),
            history: MemoryStore::from_rows(history),
        }
    }

    pub fn rules(&self) -> &[EscalationRule] {
        self.rules.rows()
    }

    pub fn rule(&self, id: EscalationRuleId) -> Option<&EscalationRule> {
        self.rules.get(id)
    }

    pub fn set_rule_active(&mut self, id: EscalationRuleId, active: bool) -> RepoResult<()> {
        self.rules.update(id, |rule| rule.active = active)
    }

    pub fn delayed_actions(&self) -> &[DelayedAction] {
        self.delayed.rows()
    }

    pub fn delayed_action(&self, id: DelayedActionId) -> Option<&DelayedAction> {
        self.delayed.get(id)
    }

    pub fn history(&self) -> &[EscalationEvent] {
        self.history.rows()
    }

    pub fn record_event(&mut self, event: EscalationEvent) -> EscalationEventId {
        self.history.insert(event)
    }
}
