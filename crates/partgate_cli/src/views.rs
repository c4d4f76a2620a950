//! Text renderers, one per dashboard view.
//!
//! Everything here is presentation: the numbers, filters and geometry come
//! finished from `partgate_core` and are only turned into aligned lines.

use partgate_core::locale::{format_date, format_percent, format_try};
use partgate_core::model::common::Tone;
use partgate_core::repo::change_repo::ChangeRequestQuery;
use partgate_core::repo::document_repo::DocumentQuery;
use partgate_core::repo::equipment_repo::EquipmentQuery;
use partgate_core::repo::inventory_repo::InventoryQuery;
use partgate_core::repo::notification_repo::NotificationFilter;
use partgate_core::repo::project_repo::ProjectQuery;
use partgate_core::repo::quality_repo::QualityQuery;
use partgate_core::repo::task_repo::TaskQuery;
use partgate_core::service::escalation_service::substitute_template;
use partgate_core::service::notification_service::relative_time;
use partgate_core::service::report_service::{Report, ReportBody};
use partgate_core::service::schedule_service::GanttLayout;
use partgate_core::service::task_service::board_from;
use partgate_core::stats::budget::{category_breakdown, donut_segments, summarize};
use partgate_core::stats::dashboard::{
    project_status_distribution, task_distribution, upcoming_deadlines, DashboardStats,
};
use partgate_core::stats::records::{
    change_request_stats, document_stats, equipment_stats, escalation_stats,
    notification_stats, quality_stats, stock_stats,
};
use partgate_core::timeline::{phase_segments, tick_label, PhaseStatus};
use partgate_core::model::project::ProjectId;
use partgate_core::{Theme, Workspace};
use time::{Date, OffsetDateTime};

/// Width of the drawn Gantt axis, in characters.
const GANTT_AXIS_CHARS: usize = 48;
/// Rows shown in the upcoming-deadlines panel.
const DEADLINE_PANEL_ROWS: usize = 5;

/// ANSI styling wrapper; plain passthrough when colors are off.
pub struct Style {
    theme: Theme,
    color: bool,
}

impl Style {
    pub fn new(theme: Theme, color: bool) -> Self {
        Self { theme, color }
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", self.theme.ansi_code(tone), text)
        } else {
            text.to_string()
        }
    }
}

fn heading(title: &str) {
    println!("\n== {title} ==");
}

/// Fixed-width meter like `████████░░░░` for a 0..=100 percentage.
fn meter(pct: f64, width: usize) -> String {
    let clamped = pct.clamp(0.0, 100.0);
    let filled = (clamped / 100.0 * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn dashboard(workspace: &Workspace, style: &Style, today: Date) {
    let stats = DashboardStats::collect(workspace.projects.all(), workspace.tasks.all(), today);
    heading("Dashboard");
    println!(
        "Toplam Proje: {}   Aktif: {}   Tamamlanan: {}   Kritik Görev: {}   Yaklaşan Teslim: {}",
        stats.total_projects,
        stats.active_projects,
        stats.completed_projects,
        stats.critical_tasks,
        stats.upcoming_deadlines
    );

    heading("Proje Durumu Dağılımı");
    for slice in project_status_distribution(workspace.projects.all()) {
        println!(
            "{:<14} {:>2} proje  {} {}",
            slice.status.label(),
            slice.count,
            style.paint(slice.status.tone(), &meter(slice.percentage, 20)),
            format_percent(slice.percentage)
        );
    }

    heading("Görev Dağılımı");
    for slice in task_distribution(workspace.tasks.all()) {
        println!(
            "{:<14} {:>2} görev  {} {}",
            slice.status.label(),
            slice.count,
            style.paint(slice.status.tone(), &meter(slice.percentage, 20)),
            format_percent(slice.percentage)
        );
    }

    if let Some(budget) = workspace.budgets.all().first() {
        let summary = summarize(budget);
        heading("Bütçe Özeti");
        println!(
            "Toplam: {}   Harcanan: {} ({})   Kalan: {}",
            format_try(summary.total_budget),
            format_try(summary.spent_amount),
            format_percent(summary.utilization_pct),
            format_try(summary.remaining)
        );
    }

    heading("Yaklaşan Teslim Tarihleri");
    for entry in upcoming_deadlines(workspace.tasks.all(), today, DEADLINE_PANEL_ROWS) {
        let when = if entry.days_until_due > 0 {
            format!("{} gün", entry.days_until_due)
        } else {
            "Gecikmiş".to_string()
        };
        println!(
            "{:<32} {:<14} {}",
            entry.task.title,
            entry.task.assigned_to,
            style.paint(entry.task.priority.tone(), &when)
        );
    }
}

pub fn projects(workspace: &Workspace, query: &ProjectQuery, style: &Style, today: Date) {
    heading("Projeler");
    println!(
        "{:>3}  {:<28} {:<16} {:<11} {:<10} {:<8} {:<22} İlerleme",
        "#", "Proje", "Müşteri", "Başlangıç", "Bitiş", "Öncelik", "Durum"
    );
    for (index, project) in workspace.projects.list(query).iter().enumerate() {
        println!(
            "{:>3}  {:<28} {:<16} {:<11} {:<10} {:<8} {:<22} {} %{}",
            index + 1,
            project.name,
            project.customer,
            format_date(project.start_date),
            format_date(project.end_date),
            style.paint(project.priority.tone(), project.priority.label()),
            style.paint(project.status.tone(), project.status.label()),
            meter(project.progress as f64, 12),
            project.progress
        );
    }

    heading("Faz Durumu");
    for project in workspace.projects.list(query) {
        let gates: Vec<String> = phase_segments(&project.phase_plan, today)
            .iter()
            .map(|segment| {
                let mark = status_mark(segment.status);
                style.paint(
                    segment.status.tone(),
                    &format!("{mark} {}", segment.phase.label()),
                )
            })
            .collect();
        println!("{:<28} {}", project.name, gates.join("  "));

        let team: Vec<String> = project
            .team
            .iter()
            .map(|member| format!("{} ({})", member.name, member.role.label()))
            .collect();
        if !team.is_empty() {
            println!("{:<28} Ekip: {}", "", team.join(", "));
        }
    }
}

fn status_mark(status: PhaseStatus) -> char {
    match status {
        PhaseStatus::Completed => '✓',
        PhaseStatus::Overdue => '!',
        PhaseStatus::Warning => '~',
        PhaseStatus::Normal => '·',
    }
}

pub fn task_board(workspace: &Workspace, query: &TaskQuery, style: &Style) {
    let board = board_from(workspace.tasks.list(query));

    heading("Görev Panosu");
    for status in partgate_core::TaskStatus::ALL {
        let column = board.column(status);
        println!(
            "\n{} ({})",
            style.paint(status.tone(), status.label()),
            column.len()
        );
        for task in column {
            println!(
                "  {:<32} {:<14} {:<10} {}",
                task.title,
                task.assigned_to,
                format_date(task.due_date),
                style.paint(task.priority.tone(), task.priority.label())
            );
        }
    }
}

pub fn gantt(layout: &GanttLayout, style: &Style) {
    heading("Zaman Planı");
    println!(
        "Pencere: {} - {}  ({})",
        format_date(layout.window.start),
        format_date(layout.window.end),
        layout.mode.label()
    );

    let labels: Vec<String> = layout
        .ticks
        .iter()
        .map(|tick| tick_label(*tick, layout.mode))
        .collect();
    println!("Eksen: {}", labels.join(" | "));
    if layout.hidden_ticks > 0 {
        println!("(+{} gösterilmeyen aralık)", layout.hidden_ticks);
    }

    println!("{:>3}  {:<24} {:<14} Çubuk", "#", "Görev", "Sorumlu");
    for (index, row) in layout.rows.iter().enumerate() {
        println!(
            "{:>3}  {:<24} {:<14} {} %{}",
            index + 1,
            row.task.name,
            row.task.assignee,
            style.paint(
                row.task.phase.tone(),
                &bar_line(row.bar.left_pct, row.bar.width_pct, row.task.progress)
            ),
            row.task.progress
        );
    }
}

/// Draws one Gantt bar on a fixed-width character axis.
///
/// Geometry arrives unclamped; drawing clips it to the axis and leaves a
/// zero-length bar for inverted ranges.
fn bar_line(left_pct: f64, width_pct: f64, progress: u8) -> String {
    let axis = GANTT_AXIS_CHARS as f64;
    let raw_start = (left_pct / 100.0 * axis).round() as i64;
    let raw_len = (width_pct / 100.0 * axis).round() as i64;
    let start = raw_start.clamp(0, GANTT_AXIS_CHARS as i64) as usize;
    let end = (raw_start + raw_len.max(0)).clamp(0, GANTT_AXIS_CHARS as i64) as usize;
    let len = end.saturating_sub(start);
    let done = (progress as f64 / 100.0 * len as f64).round() as usize;

    let mut line = String::with_capacity(GANTT_AXIS_CHARS + 2);
    line.push('|');
    line.push_str(&" ".repeat(start));
    line.push_str(&"█".repeat(done.min(len)));
    line.push_str(&"▒".repeat(len - done.min(len)));
    line.push_str(&" ".repeat(GANTT_AXIS_CHARS - start - len));
    line.push('|');
    line
}

pub fn phase_timeline(
    workspace: &Workspace,
    project: Option<ProjectId>,
    style: &Style,
    today: Date,
) {
    heading("Zaman Çizelgesi");
    for row in workspace.projects.all() {
        if project.is_some_and(|id| id != row.id) {
            continue;
        }
        println!(
            "\n{}  ({})   {} - {}",
            row.name,
            row.customer,
            format_date(row.start_date),
            format_date(row.end_date)
        );
        let segments = phase_segments(&row.phase_plan, today);
        let bar: Vec<String> = segments
            .iter()
            .map(|segment| {
                let cell = if segment.completed { "██████████" } else { "░░░░░░░░░░" };
                style.paint(segment.phase.tone(), cell)
            })
            .collect();
        println!("  {}", bar.join(""));
        for segment in &segments {
            println!(
                "  {} {:<12} {:<12} {}",
                status_mark(segment.status),
                segment.gate_name,
                format_date(segment.due_date),
                style.paint(segment.status.tone(), segment.status.label())
            );
        }
    }
}

pub fn quality(workspace: &Workspace, query: &QualityQuery, style: &Style) {
    let stats = quality_stats(workspace.quality.all());
    heading("Kalite Yönetimi");
    println!(
        "Toplam: {}   Onaylandı: {}   İnceleniyor: {}   Bekliyor: {}   Reddedildi: {}",
        stats.total, stats.approved, stats.in_review, stats.pending, stats.rejected
    );
    println!(
        "{:>3}  {:<26} {:<14} {:<12} {:<12} {:<14} Durum",
        "#", "Başlık", "Tür", "Oluşturma", "Teslim", "Sorumlu"
    );
    for (index, record) in workspace.quality.list(query).iter().enumerate() {
        println!(
            "{:>3}  {:<26} {:<14} {:<12} {:<12} {:<14} {}",
            index + 1,
            record.title,
            style.paint(record.kind.tone(), record.kind.label()),
            format_date(record.created_date),
            format_date(record.due_date),
            record.assigned_to,
            style.paint(record.status.tone(), record.status.label())
        );
    }
}

pub fn inventory(workspace: &Workspace, query: &InventoryQuery, style: &Style) {
    let stats = stock_stats(workspace.inventory.all());
    heading("Stok Yönetimi");
    println!(
        "Toplam: {}   Stokta: {}   Az Stok: {}   Stok Yok: {}",
        stats.total, stats.in_stock, stats.low_stock, stats.out_of_stock
    );
    println!(
        "{:>3}  {:<12} {:<24} {:<10} {:>6} {:<6} {:<14} Durum",
        "#", "Parça No", "Parça Adı", "Kategori", "Miktar", "Birim", "Tedarikçi"
    );
    for (index, item) in workspace.inventory.list(query).iter().enumerate() {
        println!(
            "{:>3}  {:<12} {:<24} {:<10} {:>6} {:<6} {:<14} {}",
            index + 1,
            item.part_number,
            item.part_name,
            style.paint(item.category.tone(), item.category.label()),
            item.quantity,
            item.unit,
            item.supplier,
            style.paint(item.status.tone(), item.status.label())
        );
    }
}

pub fn equipment(workspace: &Workspace, query: &EquipmentQuery, style: &Style) {
    let stats = equipment_stats(workspace.equipment.all());
    heading("Ekipman Yönetimi");
    println!(
        "Toplam: {}   Tamamlandı: {}   Devam Ediyor: {}   Gecikmiş: {}   Toplam Maliyet: {}",
        stats.total,
        stats.completed,
        stats.in_progress,
        stats.delayed,
        format_try(stats.total_cost)
    );
    println!(
        "{:>3}  {:<34} {:<10} {:<18} {:<12} {:>12} {:<14} Ödeme",
        "#", "Ekipman", "Tür", "Tedarikçi", "Teslimat", "Maliyet", "Üretim"
    );
    for (index, item) in workspace.equipment.list(query).iter().enumerate() {
        println!(
            "{:>3}  {:<34} {:<10} {:<18} {:<12} {:>12} {:<14} {}",
            index + 1,
            item.name,
            style.paint(item.kind.tone(), item.kind.label()),
            item.supplier,
            format_date(item.delivery_date),
            format_try(item.cost),
            style.paint(item.production_status.tone(), item.production_status.label()),
            style.paint(item.payment_status.tone(), item.payment_status.label())
        );
    }
}

pub fn documents(workspace: &Workspace, query: &DocumentQuery, style: &Style) {
    let stats = document_stats(workspace.documents.all());
    heading("Doküman Arşivi");
    println!(
        "Toplam: {}   CAD: {}   Teknik Resim: {}   Rapor: {}",
        stats.total, stats.cad, stats.drawings, stats.reports
    );
    println!(
        "{:>3}  {:<38} {:<14} {:<8} {:<14} {:<10} Erişim",
        "#", "Dosya", "Tür", "Sürüm", "Yükleyen", "Boyut"
    );
    for (index, document) in workspace.documents.list(query).iter().enumerate() {
        println!(
            "{:>3}  {:<38} {:<14} {:<8} {:<14} {:<10} {}",
            index + 1,
            document.name,
            style.paint(document.kind.tone(), document.kind.label()),
            document.version,
            document.uploaded_by,
            document.size,
            document.access_level.label()
        );
    }
}

pub fn budget(workspace: &Workspace, project_id: ProjectId, style: &Style) {
    heading("Bütçe & Finans");
    let Some(budget) = workspace.budgets.for_project(project_id) else {
        println!("Bu proje için bütçe kaydı yok.");
        return;
    };

    let summary = summarize(budget);
    println!(
        "Toplam Bütçe: {}   Harcanan: {} ({} kullanıldı)   Kalan: {} ({} kaldı)",
        format_try(summary.total_budget),
        format_try(summary.spent_amount),
        format_percent(summary.utilization_pct),
        format_try(summary.remaining),
        format_percent(100.0 - summary.utilization_pct)
    );

    heading("Bütçe Dağılımı");
    for segment in donut_segments(budget) {
        println!(
            "{:<16} {}  {} (başlangıç {})",
            segment.name,
            format_try(segment.spent_amount),
            format_percent(segment.percentage),
            format_percent(segment.offset_pct)
        );
    }

    heading("Harcama Detayı");
    for category in &budget.categories {
        let used = if category.budgeted_amount == 0 {
            0.0
        } else {
            category.spent_amount as f64 / category.budgeted_amount as f64 * 100.0
        };
        println!(
            "\n{:<16} {} / {}  {}",
            category.name,
            format_try(category.spent_amount),
            format_try(category.budgeted_amount),
            style.paint(Tone::Blue, &meter(used, 20))
        );
        for share in category_breakdown(category) {
            println!(
                "  {:<16} {} / {}  (kategori payı {})",
                share.name,
                format_try(share.spent),
                format_try(share.budgeted),
                format_percent(share.pct_of_category)
            );
        }
    }
}

pub fn report(report: &Report, style: &Style) {
    heading(&report.title);
    println!("Dönem: {}", report.range.label());
    match &report.body {
        ReportBody::ProjectProgress(rows) => {
            for row in rows {
                println!(
                    "{:<28} {} %{:<4} {:<12} {}",
                    row.project,
                    meter(row.progress as f64, 16),
                    row.progress,
                    style.paint(row.status.tone(), row.status.label()),
                    format_date(row.deadline)
                );
            }
        }
        ReportBody::BudgetAnalysis(rows) => {
            println!("{:<16} {:>12} {:>12} {:>12}", "Kategori", "Bütçe", "Harcanan", "Fark");
            for row in rows {
                println!(
                    "{:<16} {:>12} {:>12} {:>12}",
                    row.category,
                    format_try(row.budgeted),
                    format_try(row.spent),
                    format_try(row.variance)
                );
            }
        }
        ReportBody::QualityMetrics(rows) => {
            println!("{:<16} {:>7} {:>10}", "Tür", "Toplam", "Onaylanan");
            for row in rows {
                println!("{:<16} {:>7} {:>10}", row.kind.label(), row.total, row.approved);
            }
        }
        ReportBody::TeamPerformance(rows) => {
            println!("{:<18} {:>7} {:>12}", "Kişi", "Görev", "Tamamlanan");
            for row in rows {
                println!(
                    "{:<18} {:>7} {:>12}",
                    row.assignee, row.total_tasks, row.completed_tasks
                );
            }
        }
    }
}

pub fn notifications(
    workspace: &Workspace,
    filter: NotificationFilter,
    style: &Style,
    now: OffsetDateTime,
) {
    let stats = notification_stats(workspace.notifications.all());
    heading("Bildirim Merkezi");
    println!(
        "Filtre: {}   Okunmamış: {}   Kritik: {}",
        filter.label(),
        stats.unread,
        stats.critical
    );
    for (index, notification) in workspace.notifications.list(filter).iter().enumerate() {
        let marker = if notification.read { " " } else { "●" };
        println!(
            "{:>3} {} [{}] {:<24} {:<58} {}",
            index + 1,
            marker,
            style.paint(notification.priority.tone(), notification.kind.label()),
            notification.title,
            notification.message,
            relative_time(notification.timestamp, now)
        );
    }
}

pub fn escalation_delayed(workspace: &Workspace, style: &Style) {
    let stats = escalation_stats(workspace.escalation.delayed_actions());
    heading("Eskalasyon - Geciken Görevler");
    println!(
        "Kritik: {}   Toplam Gecikme: {} gün   Etkilenen Kişi: {}",
        stats.critical_delayed, stats.total_overdue_days, stats.distinct_assignees
    );
    println!(
        "{:>3}  {:<28} {:<26} {:<14} {:<12} {:>8} Öncelik",
        "#", "Görev", "Proje", "Sorumlu", "Teslim", "Gecikme"
    );
    for (index, action) in workspace.escalation.delayed_actions().iter().enumerate() {
        println!(
            "{:>3}  {:<28} {:<26} {:<14} {:<12} {:>5} gün {}",
            index + 1,
            action.title,
            action.project_name,
            action.assignee,
            format_date(action.due_date),
            action.days_overdue,
            style.paint(action.priority.tone(), action.priority.label())
        );
    }
}

pub fn escalation_rules(workspace: &Workspace, style: &Style, today: Date) {
    heading("Eskalasyon Kuralları");
    let first_action = workspace.escalation.delayed_actions().first();
    for rule in workspace.escalation.rules() {
        let state = if rule.active {
            style.paint(Tone::Green, "aktif")
        } else {
            style.paint(Tone::Gray, "pasif")
        };
        println!(
            "\n{} [{}]  koşul: {}, eşik: {} gün",
            rule.name,
            state,
            rule.condition.label(),
            rule.threshold_days
        );
        println!("  Alıcılar: {}", rule.recipients.join(", "));
        println!("  Şablon: {}", rule.email_template);
        if let Some(action) = first_action {
            println!(
                "  Örnek: {}",
                substitute_template(&rule.email_template, action, today)
            );
        }
    }
}

pub fn escalation_history(workspace: &Workspace, _style: &Style) {
    heading("Eskalasyon Geçmişi");
    for event in workspace.escalation.history() {
        println!(
            "{:<28} -> {:<24} {}  ({})",
            event.task_name,
            event.escalated_to,
            event.reason,
            event.status
        );
    }
}

pub fn change_requests(workspace: &Workspace, query: &ChangeRequestQuery, style: &Style) {
    let stats = change_request_stats(workspace.changes.all());
    heading("Değişiklik Talepleri");
    println!(
        "Toplam: {}   Bekliyor: {}   Onaylandı: {}   Uygulandı: {}",
        stats.total, stats.pending, stats.approved, stats.implemented
    );
    for (index, request) in workspace.changes.list(query).iter().enumerate() {
        println!(
            "\n{:>3}  {}  [{}] [{}]",
            index + 1,
            request.title,
            style.paint(request.status.tone(), request.status.label()),
            style.paint(request.priority.tone(), request.priority.label())
        );
        println!("     {}", request.description);
        println!(
            "     Talep: {} ({})   Etki: {} / {} gün / {}",
            request.requested_by,
            format_date(request.request_date),
            format_try(request.impact.cost),
            request.impact.timeline_days,
            request.impact.scope
        );
        if let (Some(approver), Some(date)) = (&request.approved_by, request.approval_date) {
            println!("     Onay: {} ({})", approver, format_date(date));
        }
    }
}
