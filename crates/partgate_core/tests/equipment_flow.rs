use partgate_core::model::equipment::{EquipmentKind, PaymentStatus, ProductionStatus};
use partgate_core::repo::equipment_repo::{EquipmentQuery, EquipmentRepository};
use partgate_core::seed;
use partgate_core::service::equipment_service::{
    EquipmentService, EquipmentServiceError, EquipmentUpdate, NewEquipment,
};
use partgate_core::stats::records::equipment_stats;
use time::macros::date;

fn draft(name: &str, supplier: &str) -> NewEquipment {
    NewEquipment {
        name: name.to_string(),
        kind: EquipmentKind::Gauge,
        project_id: seed::PROJECT_BRAKE_SYSTEM,
        supplier: supplier.to_string(),
        order_date: date!(2024 - 03 - 01),
        delivery_date: date!(2024 - 05 - 01),
        cost: 12_000,
        description: String::new(),
        specifications: String::new(),
    }
}

#[test]
fn new_equipment_starts_unbuilt_and_unpaid() {
    let mut repo = EquipmentRepository::new();
    let today = date!(2024 - 03 - 02);

    let id = EquipmentService::new(&mut repo)
        .add(draft("Çap Mastarı", "Ölçüm A.Ş."), today)
        .unwrap();

    let equipment = repo.get(id).unwrap();
    assert_eq!(equipment.production_status, ProductionStatus::NotStarted);
    assert_eq!(equipment.payment_status, PaymentStatus::NotPaid);
    assert_eq!(equipment.last_updated, today);
}

#[test]
fn blank_name_or_supplier_is_rejected() {
    let mut repo = EquipmentRepository::new();
    let mut service = EquipmentService::new(&mut repo);
    let today = date!(2024 - 03 - 02);

    assert_eq!(
        service.add(draft("", "Ölçüm A.Ş."), today),
        Err(EquipmentServiceError::MissingField("name"))
    );
    assert_eq!(
        service.add(draft("Çap Mastarı", "  "), today),
        Err(EquipmentServiceError::MissingField("supplier"))
    );
}

#[test]
fn updates_stamp_last_updated() {
    let mut repo = EquipmentRepository::from_rows(seed::equipment());
    let id = repo.all()[0].id;

    EquipmentService::new(&mut repo)
        .apply_update(
            id,
            EquipmentUpdate {
                production_status: Some(ProductionStatus::Delayed),
                cost: Some(140_000),
                ..EquipmentUpdate::default()
            },
            date!(2024 - 03 - 20),
        )
        .unwrap();

    let equipment = repo.get(id).unwrap();
    assert_eq!(equipment.production_status, ProductionStatus::Delayed);
    assert_eq!(equipment.cost, 140_000);
    assert_eq!(equipment.last_updated, date!(2024 - 03 - 20));
    // Untouched fields stay put.
    assert_eq!(equipment.payment_status, PaymentStatus::Partial);
}

#[test]
fn stats_track_counts_and_total_cost() {
    let repo = EquipmentRepository::from_rows(seed::equipment());
    let stats = equipment_stats(repo.all());

    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.delayed, 0);
    assert_eq!(stats.total_cost, 210_000);
}

#[test]
fn filters_combine_search_project_and_kind() {
    let repo = EquipmentRepository::from_rows(seed::equipment());

    let by_supplier = repo.list(&EquipmentQuery {
        search: Some("xyz".to_string()),
        ..EquipmentQuery::default()
    });
    assert_eq!(by_supplier.len(), 1);
    assert_eq!(by_supplier[0].kind, EquipmentKind::Fixture);

    let brake_molds = repo.list(&EquipmentQuery {
        project: Some(seed::PROJECT_BRAKE_SYSTEM),
        kind: Some(EquipmentKind::Mold),
        ..EquipmentQuery::default()
    });
    assert_eq!(brake_molds.len(), 1);

    let nothing = repo.list(&EquipmentQuery {
        project: Some(seed::PROJECT_BODY_PANEL),
        kind: Some(EquipmentKind::Mold),
        ..EquipmentQuery::default()
    });
    assert!(nothing.is_empty());
}

#[test]
fn removal_deletes_the_row() {
    let mut repo = EquipmentRepository::from_rows(seed::equipment());
    let id = repo.all()[1].id;

    let removed = EquipmentService::new(&mut repo).remove(id).unwrap();
    assert_eq!(removed.name, "Mercedes Sprinter Kaporta Fikstürü");
    assert_eq!(repo.all().len(), 1);
}
