use partgate_core::repo::notification_repo::{NotificationFilter, NotificationRepository};
use partgate_core::seed;
use partgate_core::service::notification_service::NotificationService;

#[test]
fn seeded_feed_counts_unread_and_critical() {
    let mut repo = NotificationRepository::from_rows(seed::notifications());
    let service = NotificationService::new(&mut repo);

    let stats = service.stats();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.unread, 4);
    assert_eq!(stats.critical, 2);
}

#[test]
fn filters_select_the_matching_entries() {
    let repo = NotificationRepository::from_rows(seed::notifications());

    assert_eq!(repo.list(NotificationFilter::All).len(), 5);
    assert_eq!(repo.list(NotificationFilter::Unread).len(), 4);

    let critical = repo.list(NotificationFilter::Critical);
    assert_eq!(critical.len(), 2);
    assert!(critical.iter().any(|n| n.title == "Onay Bekliyor"));
}

#[test]
fn mark_read_clears_one_entry() {
    let mut repo = NotificationRepository::from_rows(seed::notifications());
    let id = repo.all()[0].id;

    NotificationService::new(&mut repo).mark_read(id).unwrap();
    assert!(repo.get(id).unwrap().read);
    assert_eq!(repo.list(NotificationFilter::Unread).len(), 3);
}

#[test]
fn mark_all_read_empties_the_unread_tab() {
    let mut repo = NotificationRepository::from_rows(seed::notifications());
    let mut service = NotificationService::new(&mut repo);

    service.mark_all_read();
    assert_eq!(service.stats().unread, 0);
    assert!(repo.list(NotificationFilter::Unread).is_empty());
    // Critical filter is priority-based, so it is unaffected.
    assert_eq!(repo.list(NotificationFilter::Critical).len(), 2);
}

#[test]
fn dismiss_removes_the_entry_entirely() {
    let mut repo = NotificationRepository::from_rows(seed::notifications());
    let id = repo.all()[2].id;

    let removed = NotificationService::new(&mut repo).dismiss(id).unwrap();
    assert_eq!(removed.title, "Görev Tamamlandı");
    assert_eq!(repo.all().len(), 4);
    assert!(repo.get(id).is_none());
}
