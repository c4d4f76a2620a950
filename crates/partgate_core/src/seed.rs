//! Seed data: the mock rows every view starts from.
//!
//! # Responsibility
//! - Reproduce the demo content of the dashboard (Turkish labels, 2024
//!   dates, TRY amounts) as typed rows with fixed ids.
//!
//! # Invariants
//! - Seeded ids are stable `Uuid::from_u128` constants; generated rows use
//!   random v4 ids and can never collide with them in practice.
//! - Every seeded `project_id` reference points at a seeded project.

use crate::model::budget::{Budget, BudgetCategory, BudgetSubcategory};
use crate::model::change::{
    ChangeRequest, ChangeRequestComment, ChangeRequestStatus, ImpactAssessment,
};
use crate::model::common::Priority;
use crate::model::document::{AccessLevel, Document, DocumentKind};
use crate::model::equipment::{Equipment, EquipmentKind, PaymentStatus, ProductionStatus};
use crate::model::escalation::{
    DelayedAction, EscalationCondition, EscalationEvent, EscalationRule,
};
use crate::model::inventory::{InventoryItem, PartCategory, StockStatus};
use crate::model::notification::{Notification, NotificationKind};
use crate::model::phase::{PhaseId, PhasePlan};
use crate::model::project::{MemberRole, Project, ProjectId, ProjectMember, ProjectStatus};
use crate::model::quality::{QualityKind, QualityRecord, QualityStatus};
use crate::model::schedule::GanttTask;
use crate::model::task::{Task, TaskComment, TaskStatus};
use time::macros::{date, datetime};
use uuid::Uuid;

/// BMW X5 brake system program.
pub const PROJECT_BRAKE_SYSTEM: ProjectId = Uuid::from_u128(0x01);
/// Mercedes Sprinter body-panel program.
pub const PROJECT_BODY_PANEL: ProjectId = Uuid::from_u128(0x02);

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: PROJECT_BRAKE_SYSTEM,
            name: "BMW X5 Fren Sistemi".to_string(),
            customer: "BMW Group".to_string(),
            start_date: date!(2024 - 01 - 15),
            end_date: date!(2024 - 08 - 30),
            status: ProjectStatus::Design,
            progress: 45,
            priority: Priority::High,
            team: vec![
                member(0x11, "Ahmet Kaya", MemberRole::ProjectManager, "ahmet.kaya@company.com"),
                member(0x12, "Elif Demir", MemberRole::Engineer, "elif.demir@company.com"),
                member(0x13, "Mehmet Öz", MemberRole::Quality, "mehmet.oz@company.com"),
            ],
            phase_plan: PhasePlan::new(
                PhaseId::Design,
                [
                    (PhaseId::Concept, true, date!(2024 - 02 - 01)),
                    (PhaseId::Design, false, date!(2024 - 04 - 15)),
                    (PhaseId::Proto, false, date!(2024 - 06 - 01)),
                    (PhaseId::Validation, false, date!(2024 - 07 - 15)),
                    (PhaseId::Sop, false, date!(2024 - 08 - 30)),
                ],
            ),
        },
        Project {
            id: PROJECT_BODY_PANEL,
            name: "Mercedes Sprinter Kaporta".to_string(),
            customer: "Mercedes-Benz".to_string(),
            start_date: date!(2024 - 02 - 01),
            end_date: date!(2024 - 10 - 15),
            status: ProjectStatus::Proto,
            progress: 68,
            priority: Priority::Critical,
            team: vec![
                member(0x14, "Fatma Şen", MemberRole::ProjectManager, "fatma.sen@company.com"),
                member(0x15, "Ali Yılmaz", MemberRole::Engineer, "ali.yilmaz@company.com"),
            ],
            phase_plan: PhasePlan::new(
                PhaseId::Proto,
                [
                    (PhaseId::Concept, true, date!(2024 - 02 - 15)),
                    (PhaseId::Design, true, date!(2024 - 04 - 01)),
                    (PhaseId::Proto, false, date!(2024 - 07 - 01)),
                    (PhaseId::Validation, false, date!(2024 - 09 - 01)),
                    (PhaseId::Sop, false, date!(2024 - 10 - 15)),
                ],
            ),
        },
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: Uuid::from_u128(0x21),
            title: "CAD Tasarım Tamamlama".to_string(),
            description: "Fren kaliperi için CAD tasarımının tamamlanması".to_string(),
            project_id: PROJECT_BRAKE_SYSTEM,
            assigned_to: "Elif Demir".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            due_date: date!(2024 - 03 - 15),
            created_date: date!(2024 - 02 - 01),
            department: "Mühendislik".to_string(),
            files: Vec::new(),
            comments: vec![TaskComment {
                id: Uuid::from_u128(0x28),
                author: "Ahmet Kaya".to_string(),
                content: "Müşteri gereksinimlerine göre revizyon yapılması gerekiyor."
                    .to_string(),
                timestamp: datetime!(2024 - 02 - 10 10:30 UTC),
            }],
        },
        Task {
            id: Uuid::from_u128(0x22),
            title: "PPAP Dokümanları Hazırlama".to_string(),
            description: "Üretim parçası onay süreci dokümanlarının hazırlanması".to_string(),
            project_id: PROJECT_BODY_PANEL,
            assigned_to: "Mehmet Öz".to_string(),
            status: TaskStatus::Review,
            priority: Priority::Critical,
            due_date: date!(2024 - 03 - 20),
            created_date: date!(2024 - 02 - 05),
            department: "Kalite".to_string(),
            files: Vec::new(),
            comments: Vec::new(),
        },
        Task {
            id: Uuid::from_u128(0x23),
            title: "Malzeme Tedarik Planlaması".to_string(),
            description: "Prototip üretimi için malzeme tedarik planının oluşturulması"
                .to_string(),
            project_id: PROJECT_BRAKE_SYSTEM,
            assigned_to: "Ali Yılmaz".to_string(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: date!(2024 - 03 - 25),
            created_date: date!(2024 - 02 - 08),
            department: "Lojistik".to_string(),
            files: Vec::new(),
            comments: Vec::new(),
        },
    ]
}

pub fn gantt_tasks() -> Vec<GanttTask> {
    vec![
        GanttTask {
            id: Uuid::from_u128(0x31),
            name: "Konsept Geliştirme".to_string(),
            start_date: date!(2024 - 01 - 15),
            end_date: date!(2024 - 02 - 15),
            progress: 100,
            dependencies: Vec::new(),
            assignee: "Ahmet Kaya".to_string(),
            project_id: PROJECT_BRAKE_SYSTEM,
            phase: PhaseId::Concept,
        },
        GanttTask {
            id: Uuid::from_u128(0x32),
            name: "CAD Tasarım".to_string(),
            start_date: date!(2024 - 02 - 16),
            end_date: date!(2024 - 04 - 15),
            progress: 75,
            dependencies: vec![Uuid::from_u128(0x31)],
            assignee: "Elif Demir".to_string(),
            project_id: PROJECT_BRAKE_SYSTEM,
            phase: PhaseId::Design,
        },
        GanttTask {
            id: Uuid::from_u128(0x33),
            name: "Prototip Üretimi".to_string(),
            start_date: date!(2024 - 04 - 16),
            end_date: date!(2024 - 06 - 01),
            progress: 30,
            dependencies: vec![Uuid::from_u128(0x32)],
            assignee: "Ali Yılmaz".to_string(),
            project_id: PROJECT_BRAKE_SYSTEM,
            phase: PhaseId::Proto,
        },
        GanttTask {
            id: Uuid::from_u128(0x34),
            name: "Kalite Doğrulama".to_string(),
            start_date: date!(2024 - 06 - 02),
            end_date: date!(2024 - 07 - 15),
            progress: 0,
            dependencies: vec![Uuid::from_u128(0x33)],
            assignee: "Mehmet Öz".to_string(),
            project_id: PROJECT_BRAKE_SYSTEM,
            phase: PhaseId::Validation,
        },
    ]
}

pub fn budgets() -> Vec<Budget> {
    vec![Budget {
        id: Uuid::from_u128(0x41),
        project_id: PROJECT_BRAKE_SYSTEM,
        total_budget: 850_000,
        spent_amount: 382_500,
        currency: "TRY".to_string(),
        last_updated: date!(2024 - 03 - 10),
        categories: vec![
            category(
                0x42,
                "Mühendislik",
                250_000,
                112_500,
                vec![
                    subcategory(0x50, "Tasarım", 150_000, 67_500),
                    subcategory(0x51, "İşçilik", 80_000, 36_000),
                    subcategory(0x52, "Danışmanlık", 20_000, 9_000),
                ],
            ),
            category(
                0x43,
                "Malzeme",
                400_000,
                180_000,
                vec![
                    subcategory(0x53, "Proto Parçalar", 150_000, 67_500),
                    subcategory(0x54, "Seri Parçalar", 200_000, 90_000),
                    subcategory(0x55, "Kalıplar", 50_000, 22_500),
                ],
            ),
            category(
                0x44,
                "Kalite",
                150_000,
                67_500,
                vec![
                    subcategory(0x56, "Testler", 80_000, 36_000),
                    subcategory(0x57, "Ölçüm Cihazları", 50_000, 22_500),
                    subcategory(0x58, "Raporlama", 20_000, 9_000),
                ],
            ),
            category(
                0x45,
                "Diğer Giderler",
                50_000,
                22_500,
                vec![
                    subcategory(0x59, "Lisans", 20_000, 9_000),
                    subcategory(0x5A, "Yazılım", 20_000, 9_000),
                    subcategory(0x5B, "Eğitim", 10_000, 4_500),
                ],
            ),
        ],
    }]
}

pub fn quality_records() -> Vec<QualityRecord> {
    vec![
        QualityRecord {
            id: Uuid::from_u128(0x61),
            project_id: PROJECT_BRAKE_SYSTEM,
            kind: QualityKind::Ppap,
            title: "PPAP Seviye 3 Onayı".to_string(),
            status: QualityStatus::InReview,
            created_date: date!(2024 - 02 - 15),
            due_date: date!(2024 - 03 - 20),
            assigned_to: "Mehmet Öz".to_string(),
            files: vec!["ppap_report.pdf".to_string(), "measurement_data.xlsx".to_string()],
            description: "BMW X5 fren kaliperi için PPAP dokümanları hazırlandı".to_string(),
        },
        QualityRecord {
            id: Uuid::from_u128(0x62),
            project_id: PROJECT_BODY_PANEL,
            kind: QualityKind::Cmm,
            title: "CMM Ölçüm Raporu".to_string(),
            status: QualityStatus::Approved,
            created_date: date!(2024 - 02 - 20),
            due_date: date!(2024 - 03 - 01),
            assigned_to: "Fatma Şen".to_string(),
            files: vec!["cmm_report.pdf".to_string()],
            description: "Mercedes Sprinter kaporta parçası ölçüm sonuçları".to_string(),
        },
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: Uuid::from_u128(0x71),
            part_number: "BMW-FK-001".to_string(),
            part_name: "Fren Kaliperi Gövdesi".to_string(),
            category: PartCategory::Proto,
            quantity: 15,
            unit: "adet".to_string(),
            supplier: "ABC Döküm".to_string(),
            status: StockStatus::InStock,
            last_updated: date!(2024 - 03 - 10),
        },
        InventoryItem {
            id: Uuid::from_u128(0x72),
            part_number: "MB-KP-002".to_string(),
            part_name: "Kaporta Paneli".to_string(),
            category: PartCategory::Serial,
            quantity: 3,
            unit: "adet".to_string(),
            supplier: "XYZ Metal".to_string(),
            status: StockStatus::LowStock,
            last_updated: date!(2024 - 03 - 09),
        },
    ]
}

pub fn equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: Uuid::from_u128(0x81),
            name: "BMW X5 Fren Kaliperi Kalıbı".to_string(),
            kind: EquipmentKind::Mold,
            project_id: PROJECT_BRAKE_SYSTEM,
            supplier: "ABC Kalıp San.".to_string(),
            order_date: date!(2024 - 02 - 01),
            delivery_date: date!(2024 - 04 - 15),
            cost: 125_000,
            production_status: ProductionStatus::InProgress,
            payment_status: PaymentStatus::Partial,
            description: "Fren kaliperi üretimi için ana kalıp".to_string(),
            specifications: "Malzeme: P20 Çelik, Sertlik: 28-32 HRC".to_string(),
            last_updated: date!(2024 - 03 - 10),
        },
        Equipment {
            id: Uuid::from_u128(0x82),
            name: "Mercedes Sprinter Kaporta Fikstürü".to_string(),
            kind: EquipmentKind::Fixture,
            project_id: PROJECT_BODY_PANEL,
            supplier: "XYZ Fikstür Ltd.".to_string(),
            order_date: date!(2024 - 01 - 15),
            delivery_date: date!(2024 - 03 - 30),
            cost: 85_000,
            production_status: ProductionStatus::Completed,
            payment_status: PaymentStatus::Completed,
            description: "Kaporta montaj fikstürü".to_string(),
            specifications: "Alüminyum profil, Pnömatik kıskaçlar".to_string(),
            last_updated: date!(2024 - 03 - 08),
        },
    ]
}

pub fn documents() -> Vec<Document> {
    vec![
        Document {
            id: Uuid::from_u128(0x91),
            name: "BMW_X5_Brake_Caliper_Drawing.dwg".to_string(),
            kind: DocumentKind::Drawing,
            version: "V2.1".to_string(),
            project_id: PROJECT_BRAKE_SYSTEM,
            uploaded_by: "Elif Demir".to_string(),
            upload_date: date!(2024 - 02 - 28),
            size: "2.4 MB".to_string(),
            access_level: AccessLevel::Internal,
        },
        Document {
            id: Uuid::from_u128(0x92),
            name: "Mercedes_Sprinter_CAD_Model.step".to_string(),
            kind: DocumentKind::Cad,
            version: "V1.3".to_string(),
            project_id: PROJECT_BODY_PANEL,
            uploaded_by: "Ali Yılmaz".to_string(),
            upload_date: date!(2024 - 03 - 05),
            size: "15.7 MB".to_string(),
            access_level: AccessLevel::Restricted,
        },
    ]
}

pub fn change_requests() -> Vec<ChangeRequest> {
    vec![
        ChangeRequest {
            id: Uuid::from_u128(0xA1),
            project_id: PROJECT_BRAKE_SYSTEM,
            title: "Fren Kaliperi Malzeme Değişikliği".to_string(),
            description:
                "Müşteri tarafından talep edilen malzeme değişikliği - Çelik yerine alüminyum kullanımı"
                    .to_string(),
            requested_by: "BMW Müşteri Temsilcisi".to_string(),
            request_date: date!(2024 - 03 - 15),
            status: ChangeRequestStatus::Pending,
            priority: Priority::High,
            impact: ImpactAssessment {
                cost: 25_000,
                timeline_days: 14,
                scope: "Tasarım revizyonu ve test süreçleri".to_string(),
            },
            approved_by: None,
            approval_date: None,
            implementation_date: None,
            comments: vec![ChangeRequestComment {
                id: Uuid::from_u128(0xA8),
                author: "Ahmet Kaya".to_string(),
                content: "Maliyet analizi tamamlandı, müşteri onayı bekleniyor.".to_string(),
                timestamp: datetime!(2024 - 03 - 16 10:30 UTC),
            }],
        },
        ChangeRequest {
            id: Uuid::from_u128(0xA2),
            project_id: PROJECT_BODY_PANEL,
            title: "Kaporta Boyut Değişikliği".to_string(),
            description: "Montaj hattı uyumluluğu için boyut ayarlaması gerekiyor".to_string(),
            requested_by: "Mercedes Üretim Ekibi".to_string(),
            request_date: date!(2024 - 03 - 10),
            status: ChangeRequestStatus::Approved,
            priority: Priority::Medium,
            impact: ImpactAssessment {
                cost: 15_000,
                timeline_days: 7,
                scope: "CAD revizyonu ve fikstür güncellemesi".to_string(),
            },
            approved_by: Some("Fatma Şen".to_string()),
            approval_date: Some(date!(2024 - 03 - 12)),
            implementation_date: None,
            comments: Vec::new(),
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: Uuid::from_u128(0xB1),
            kind: NotificationKind::Deadline,
            title: "Yaklaşan Teslim Tarihi".to_string(),
            message: "BMW X5 Fren Sistemi projesi için CAD tasarım teslimi 3 gün içinde."
                .to_string(),
            timestamp: datetime!(2024 - 03 - 10 10:30 UTC),
            read: false,
            priority: Priority::High,
        },
        Notification {
            id: Uuid::from_u128(0xB2),
            kind: NotificationKind::Approval,
            title: "Onay Bekliyor".to_string(),
            message: "PPAP dokümanları müşteri onayı için bekliyor.".to_string(),
            timestamp: datetime!(2024 - 03 - 10 09:15 UTC),
            read: false,
            priority: Priority::Critical,
        },
        Notification {
            id: Uuid::from_u128(0xB3),
            kind: NotificationKind::Task,
            title: "Görev Tamamlandı".to_string(),
            message: "CMM ölçüm raporu Fatma Şen tarafından tamamlandı.".to_string(),
            timestamp: datetime!(2024 - 03 - 09 16:45 UTC),
            read: true,
            priority: Priority::Medium,
        },
        Notification {
            id: Uuid::from_u128(0xB4),
            kind: NotificationKind::Budget,
            title: "Bütçe Uyarısı".to_string(),
            message: "Malzeme kategorisi bütçesinin %80'i kullanıldı.".to_string(),
            timestamp: datetime!(2024 - 03 - 09 14:20 UTC),
            read: false,
            priority: Priority::Medium,
        },
        Notification {
            id: Uuid::from_u128(0xB5),
            kind: NotificationKind::Quality,
            title: "Kalite Kontrolü".to_string(),
            message: "Yeni uygunsuzluk kaydı oluşturuldu - Acil inceleme gerekli.".to_string(),
            timestamp: datetime!(2024 - 03 - 09 11:30 UTC),
            read: false,
            priority: Priority::Critical,
        },
    ]
}

pub fn escalation_rules() -> Vec<EscalationRule> {
    vec![
        EscalationRule {
            id: Uuid::from_u128(0xC1),
            name: "Geciken Kritik Görevler".to_string(),
            condition: EscalationCondition::Overdue,
            threshold_days: 1,
            recipients: vec![
                "manager@company.com".to_string(),
                "quality@company.com".to_string(),
            ],
            email_template: "Kritik görev gecikti: {task_name} - Sorumlu: {assignee}"
                .to_string(),
            active: true,
        },
        EscalationRule {
            id: Uuid::from_u128(0xC2),
            name: "Yaklaşan Teslim Tarihleri".to_string(),
            condition: EscalationCondition::Approaching,
            threshold_days: 3,
            recipients: vec!["team@company.com".to_string()],
            email_template: "Teslim tarihi yaklaşıyor: {task_name} - {days_left} gün kaldı"
                .to_string(),
            active: true,
        },
    ]
}

pub fn delayed_actions() -> Vec<DelayedAction> {
    vec![
        DelayedAction {
            id: Uuid::from_u128(0xD1),
            title: "CAD Tasarım Tamamlama".to_string(),
            project_name: "BMW X5 Fren Sistemi".to_string(),
            assignee: "Elif Demir".to_string(),
            due_date: date!(2024 - 03 - 15),
            days_overdue: 5,
            priority: Priority::Critical,
            last_update: date!(2024 - 03 - 10),
        },
        DelayedAction {
            id: Uuid::from_u128(0xD2),
            title: "PPAP Dokümanları Hazırlama".to_string(),
            project_name: "Mercedes Sprinter Kaporta".to_string(),
            assignee: "Mehmet Öz".to_string(),
            due_date: date!(2024 - 03 - 20),
            days_overdue: 2,
            priority: Priority::High,
            last_update: date!(2024 - 03 - 18),
        },
    ]
}

pub fn escalation_history() -> Vec<EscalationEvent> {
    vec![
        EscalationEvent {
            id: Uuid::from_u128(0xE1),
            task_name: "CAD Tasarım Tamamlama".to_string(),
            escalated_to: "manager@company.com".to_string(),
            escalated_at: datetime!(2024 - 03 - 20 10:30 UTC),
            reason: "Görev 5 gün gecikmiş".to_string(),
            status: "sent".to_string(),
        },
        EscalationEvent {
            id: Uuid::from_u128(0xE2),
            task_name: "PPAP Dokümanları".to_string(),
            escalated_to: "quality@company.com".to_string(),
            escalated_at: datetime!(2024 - 03 - 19 14:15 UTC),
            reason: "Görev 2 gün gecikmiş".to_string(),
            status: "sent".to_string(),
        },
    ]
}

fn member(id: u128, name: &str, role: MemberRole, email: &str) -> ProjectMember {
    ProjectMember {
        id: Uuid::from_u128(id),
        name: name.to_string(),
        role,
        email: email.to_string(),
    }
}

fn category(
    id: u128,
    name: &str,
    budgeted: i64,
    spent: i64,
    subcategories: Vec<BudgetSubcategory>,
) -> BudgetCategory {
    BudgetCategory {
        id: Uuid::from_u128(id),
        name: name.to_string(),
        budgeted_amount: budgeted,
        spent_amount: spent,
        subcategories,
    }
}

fn subcategory(id: u128, name: &str, budgeted: i64, spent: i64) -> BudgetSubcategory {
    BudgetSubcategory {
        id: Uuid::from_u128(id),
        name: name.to_string(),
        budgeted_amount: budgeted,
        spent_amount: spent,
        description: None,
    }
}
