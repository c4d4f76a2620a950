//! Notification-center use-case service.

use crate::locale;
use crate::model::notification::{Notification, NotificationId};
use crate::repo::notification_repo::{NotificationFilter, NotificationRepository};
use crate::repo::RepoResult;
use crate::stats::records::{notification_stats, NotificationStats};
use time::OffsetDateTime;

/// Facade over the notification repository.
pub struct NotificationService<'a> {
    repo: &'a mut NotificationRepository,
}

impl<'a> NotificationService<'a> {
    pub fn new(repo: &'a mut NotificationRepository) -> Self {
        Self { repo }
    }

    pub fn list(&self, filter: NotificationFilter) -> Vec<&Notification> {
        self.repo.list(filter)
    }

    pub fn stats(&self) -> NotificationStats {
        notification_stats(self.repo.all())
    }

    pub fn mark_read(&mut self, id: NotificationId) -> RepoResult<()> {
        self.repo.update(id, |notification| notification.read = true)
    }

    pub fn mark_all_read(&mut self) {
        for notification in self.repo.all_mut() {
            notification.read = true;
        }
    }

    pub fn dismiss(&mut self, id: NotificationId) -> RepoResult<Notification> {
        self.repo.delete(id)
    }
}

/// Feed-style age text: "Az önce" under an hour, hour counts under a day,
/// the short date afterwards.
pub fn relative_time(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    let hours = (now - timestamp).whole_hours();
    if hours < 1 {
        "Az önce".to_string()
    } else if hours < 24 {
        format!("{hours} saat önce")
    } else {
        locale::format_date(timestamp.date())
    }
}

#[cfg(test)]
mod tests {
    use super::relative_time;
    use time::macros::datetime;

    #[test]
    fn age_text_scales_with_distance() {
        let now = datetime!(2024 - 03 - 10 12:00 UTC);
        assert_eq!(relative_time(datetime!(2024 - 03 - 10 11:30 UTC), now), "Az önce");
        assert_eq!(
            relative_time(datetime!(2024 - 03 - 10 07:00 UTC), now),
            "5 saat önce"
        );
        assert_eq!(
            relative_time(datetime!(2024 - 03 - 01 09:00 UTC), now),
            "01.03.2024"
        );
    }
}
