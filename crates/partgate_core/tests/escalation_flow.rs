use partgate_core::model::escalation::DelayedAction;
use partgate_core::repo::escalation_repo::EscalationRepository;
use partgate_core::seed;
use partgate_core::service::escalation_service::{
    escalation_email_body, outlook_compose_url, substitute_template, EscalationError,
    EscalationService,
};
use time::macros::{date, datetime};
use uuid::Uuid;

fn seeded_repo() -> EscalationRepository {
    EscalationRepository::from_rows(
        seed::escalation_rules(),
        seed::delayed_actions(),
        seed::escalation_history(),
    )
}

#[test]
fn rule_templates_substitute_known_placeholders() {
    let rules = seed::escalation_rules();
    let actions = seed::delayed_actions();
    let today = date!(2024 - 03 - 20);

    let overdue = substitute_template(&rules[0].email_template, &actions[0], today);
    assert_eq!(
        overdue,
        "Kritik görev gecikti: CAD Tasarım Tamamlama - Sorumlu: Elif Demir"
    );

    // Second action is due 2024-03-20; zero days left on the fixed day.
    let approaching = substitute_template(&rules[1].email_template, &actions[1], today);
    assert_eq!(
        approaching,
        "Teslim tarihi yaklaşıyor: PPAP Dokümanları Hazırlama - 0 gün kaldı"
    );
}

#[test]
fn unknown_placeholders_survive_untouched() {
    let actions = seed::delayed_actions();
    let rendered = substitute_template(
        "{task_name} | {no_such_key}",
        &actions[0],
        date!(2024 - 03 - 20),
    );
    assert_eq!(rendered, "CAD Tasarım Tamamlama | {no_such_key}");
}

#[test]
fn email_body_carries_the_action_fields() {
    let actions = seed::delayed_actions();
    let body = escalation_email_body(&actions[0]);

    assert!(body.starts_with("Konu: Geciken Görev Eskalasyonu - CAD Tasarım Tamamlama"));
    assert!(body.contains("Proje: BMW X5 Fren Sistemi"));
    assert!(body.contains("Sorumlu: Elif Demir"));
    assert!(body.contains("Teslim Tarihi: 15.03.2024"));
    assert!(body.contains("Gecikme: 5 gün"));
    assert!(body.contains("Proje Yönetim Sistemi"));
}

#[test]
fn send_appends_a_history_event_with_the_rule_recipient() {
    let mut repo = seeded_repo();
    let action_id = repo.delayed_actions()[0].id;
    let before = repo.history().len();

    let event = EscalationService::new(&mut repo)
        .send(action_id, datetime!(2024 - 03 - 21 09:00 UTC))
        .unwrap();

    assert_eq!(repo.history().len(), before + 1);
    assert_eq!(event.task_name, "CAD Tasarım Tamamlama");
    assert_eq!(event.escalated_to, "manager@company.com");
    assert_eq!(event.reason, "Görev 5 gün gecikmiş");
    assert_eq!(event.status, "sent");
    assert_eq!(repo.history().last().unwrap().id, event.id);
}

#[test]
fn send_for_an_unknown_action_is_an_error() {
    let mut repo = seeded_repo();
    let missing = Uuid::new_v4();

    let err = EscalationService::new(&mut repo)
        .send(missing, datetime!(2024 - 03 - 21 09:00 UTC))
        .unwrap_err();
    assert_eq!(err, EscalationError::ActionNotFound(missing));
    assert_eq!(repo.history().len(), 2);
}

#[test]
fn disabling_the_overdue_rule_falls_back_to_the_default_recipient() {
    let mut repo = seeded_repo();
    let rule_id = repo.rules()[0].id;

    let mut service = EscalationService::new(&mut repo);
    service.set_rule_active(rule_id, false).unwrap();
    let action_id = seed::delayed_actions()[0].id;
    let event = service.send(action_id, datetime!(2024 - 03 - 21 09:00 UTC)).unwrap();

    // Only the approaching-rule stays active, so the fallback applies.
    assert_eq!(event.escalated_to, "manager@company.com");
}

#[test]
fn outlook_deep_link_encodes_the_digest() {
    let actions: Vec<DelayedAction> = seed::delayed_actions();
    let url = outlook_compose_url(&actions);

    assert!(url.starts_with("https://outlook.office.com/mail/deeplink/compose?subject="));
    assert!(url.contains("&body="));
    // Bullet point and Turkish text arrive percent-encoded.
    assert!(url.contains("%E2%80%A2"));
    assert!(!url.split_once("?").unwrap().1.contains(' '));
    assert!(url.contains("5%20g%C3%BCn%20gecikmi%C5%9F"));
}
