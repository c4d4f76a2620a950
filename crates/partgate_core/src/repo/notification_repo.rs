//! Notification feed repository.

use crate::model::common::Priority;
use crate::model::notification::{Notification, NotificationId};
use crate::repo::{Entity, MemoryStore, RepoResult};

impl Entity for Notification {
    fn id(&self) -> NotificationId {
        self.id
    }
}

/// Tab filter on the notification center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Critical,
}

impl NotificationFilter {
    pub fn label(self) -> &'static str {
        match self {
            NotificationFilter::All => "Tümü",
            NotificationFilter::Unread => "Okunmamış",
            NotificationFilter::Critical => "Kritik",
        }
    }

    pub fn parse(value: &str) -> Option<NotificationFilter> {
        match value {
            "all" => Some(NotificationFilter::All),
            "unread" => Some(NotificationFilter::Unread),
            "critical" => Some(NotificationFilter::Critical),
            _ => None,
        }
    }

    fn matches(self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.read,
            NotificationFilter::Critical => notification.priority == Priority::Critical,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationRepository {
    store: MemoryStore<Notification>,
}

impl NotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Notification>) -> Self {
        Self {
            store: MemoryStore::from_rows(rows),
        }
    }

    pub fn push(&mut self, notification: Notification) -> NotificationId {
        self.store.insert(notification)
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.store.get(id)
    }

    pub fn update(
        &mut self,
        id: NotificationId,
        apply: impl FnOnce(&mut Notification),
    ) -> RepoResult<()> {
        self.store.update(id, apply)
    }

    pub fn delete(&mut self, id: NotificationId) -> RepoResult<Notification> {
        self.store.remove(id)
    }

    pub fn list(&self, filter: NotificationFilter) -> Vec<&Notification> {
        self.store
            .iter()
            .filter(|notification| filter.matches(notification))
            .collect()
    }

    pub fn all(&self) -> &[Notification] {
        self.store.rows()
    }

    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut Notification> {
        self.store.iter_mut()
    }
}
