//! In-app notification feed entries.

use crate::model::common::Priority;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Stable notification identifier.
pub type NotificationId = Uuid;

/// What triggered the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Deadline,
    Approval,
    Task,
    Budget,
    Quality,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Deadline => "Teslim Tarihi",
            NotificationKind::Approval => "Onay",
            NotificationKind::Task => "Görev",
            NotificationKind::Budget => "Bütçe",
            NotificationKind::Quality => "Kalite",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Deadline => "deadline",
            NotificationKind::Approval => "approval",
            NotificationKind::Task => "task",
            NotificationKind::Budget => "budget",
            NotificationKind::Quality => "quality",
        }
    }

    pub fn parse(value: &str) -> Option<NotificationKind> {
        match value {
            "deadline" => Some(NotificationKind::Deadline),
            "approval" => Some(NotificationKind::Approval),
            "task" => Some(NotificationKind::Task),
            "budget" => Some(NotificationKind::Budget),
            "quality" => Some(NotificationKind::Quality),
            _ => None,
        }
    }
}

/// One feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: OffsetDateTime,
    pub read: bool,
    pub priority: Priority,
}
