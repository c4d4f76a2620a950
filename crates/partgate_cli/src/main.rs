//! PartGate terminal frontend.
//!
//! # Responsibility
//! - Map each dashboard view onto a subcommand over a freshly seeded
//!   in-memory workspace.
//! - Keep all domain behavior in `partgate_core`; this binary parses
//!   arguments, applies use-case calls and prints.

mod views;

use clap::{Args, Parser, Subcommand};
use partgate_core::model::common::Priority;
use partgate_core::model::document::{AccessLevel, DocumentKind};
use partgate_core::model::equipment::EquipmentKind;
use partgate_core::model::inventory::{PartCategory, StockStatus};
use partgate_core::model::phase::PhaseId;
use partgate_core::model::project::{Project, ProjectId, ProjectStatus};
use partgate_core::model::quality::{QualityKind, QualityStatus};
use partgate_core::model::task::TaskStatus;
use partgate_core::repo::document_repo::DocumentQuery;
use partgate_core::repo::equipment_repo::EquipmentQuery;
use partgate_core::repo::inventory_repo::InventoryQuery;
use partgate_core::repo::notification_repo::NotificationFilter;
use partgate_core::repo::project_repo::ProjectQuery;
use partgate_core::repo::quality_repo::QualityQuery;
use partgate_core::repo::task_repo::TaskQuery;
use partgate_core::service::change_service::ChangeRequestService;
use partgate_core::service::equipment_service::{EquipmentService, EquipmentUpdate, NewEquipment};
use partgate_core::service::escalation_service::EscalationService;
use partgate_core::service::notification_service::NotificationService;
use partgate_core::service::project_service::{NewProject, ProjectService};
use partgate_core::service::report_service::{self, ReportKind, ReportRange};
use partgate_core::service::schedule_service::{GanttTaskDraft, ScheduleService};
use partgate_core::service::task_service::{NewTask, TaskService};
use partgate_core::{Theme, ViewMode, Workspace};
use std::path::PathBuf;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

#[derive(Parser)]
#[command(name = "partgate", version, about = "APQP part-development program dashboard")]
struct Cli {
    /// Render with the dark-terminal palette.
    #[arg(long, global = true)]
    dark: bool,

    /// Disable ANSI colors entirely.
    #[arg(long, global = true)]
    plain: bool,

    /// Directory for rolling log files.
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Headline numbers, distributions and upcoming deadlines.
    Dashboard,
    /// Project portfolio.
    Projects {
        #[command(subcommand)]
        action: Option<ProjectsCmd>,
    },
    /// Task board.
    Tasks {
        #[command(subcommand)]
        action: Option<TasksCmd>,
    },
    /// Gantt chart over the schedule entries.
    Gantt {
        #[command(subcommand)]
        action: Option<GanttCmd>,
    },
    /// APQP phase timeline per project.
    Timeline {
        /// Limit to one project (1-based row on the project list).
        #[arg(long, value_name = "N")]
        project_row: Option<usize>,
    },
    /// Quality records.
    Quality(QualityArgs),
    /// Part stock.
    Inventory(InventoryArgs),
    /// Tooling equipment.
    Equipment {
        #[command(subcommand)]
        action: Option<EquipmentCmd>,
    },
    /// Document archive.
    Documents(DocumentsArgs),
    /// Budget and finance view.
    Budget {
        /// Project selector (1-based row on the project list).
        #[arg(long, value_name = "N", default_value_t = 1)]
        project_row: usize,
    },
    /// Derived reports.
    Reports {
        #[arg(long, value_parser = parse_report_kind, default_value = "project-progress")]
        kind: ReportKind,
        #[arg(long, value_parser = parse_report_range, default_value = "last-30-days")]
        range: ReportRange,
    },
    /// Notification center.
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationsCmd>,
    },
    /// Delayed-task escalation screen.
    Escalation {
        #[command(subcommand)]
        action: Option<EscalationCmd>,
    },
    /// Change requests.
    Changes {
        #[command(subcommand)]
        action: Option<ChangesCmd>,
    },
}

#[derive(Subcommand)]
enum ProjectsCmd {
    /// List projects (default).
    List(ProjectListArgs),
    /// Create a project.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        customer: String,
        #[arg(long, value_parser = parse_date_arg, value_name = "YYYY-MM-DD")]
        start: Date,
        #[arg(long, value_parser = parse_date_arg, value_name = "YYYY-MM-DD")]
        end: Date,
        #[arg(long, value_parser = parse_project_status, default_value = "concept")]
        status: ProjectStatus,
        #[arg(long, value_parser = parse_priority, default_value = "medium")]
        priority: Priority,
    },
    /// Delete a project by list row.
    Remove {
        #[arg(long, value_name = "N")]
        row: usize,
    },
}

#[derive(Args, Default)]
struct ProjectListArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long, value_parser = parse_project_status)]
    status: Option<ProjectStatus>,
    #[arg(long, value_parser = parse_priority)]
    priority: Option<Priority>,
}

#[derive(Subcommand)]
enum TasksCmd {
    /// Kanban board of the filtered tasks (default).
    Board(TaskListArgs),
    /// Create a task on the board.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, value_name = "N", default_value_t = 1)]
        project_row: usize,
        #[arg(long)]
        assignee: String,
        #[arg(long, value_parser = parse_priority, default_value = "medium")]
        priority: Priority,
        #[arg(long, value_parser = parse_date_arg, value_name = "YYYY-MM-DD")]
        due: Date,
        #[arg(long, default_value = "")]
        department: String,
    },
    /// Move a task to another board column.
    SetStatus {
        #[arg(long, value_name = "N")]
        row: usize,
        #[arg(long, value_parser = parse_task_status)]
        status: TaskStatus,
    },
}

#[derive(Args, Default)]
struct TaskListArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long, value_parser = parse_task_status)]
    status: Option<TaskStatus>,
    #[arg(long, value_parser = parse_priority)]
    priority: Option<Priority>,
    #[arg(long, value_name = "N")]
    project_row: Option<usize>,
}

#[derive(Subcommand)]
enum GanttCmd {
    /// Render the chart (default).
    Show(GanttShowArgs),
    /// Add a schedule entry.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = parse_date_arg, value_name = "YYYY-MM-DD")]
        start: Date,
        #[arg(long, value_parser = parse_date_arg, value_name = "YYYY-MM-DD")]
        end: Date,
        #[arg(long, default_value = "")]
        assignee: String,
        #[arg(long, value_parser = parse_phase, default_value = "concept")]
        phase: PhaseId,
        /// Target project; defaults to the first one when no row is given.
        #[arg(long, value_name = "N")]
        project_row: Option<usize>,
    },
    /// Delete a schedule entry by chart row.
    Remove {
        #[arg(long, value_name = "N")]
        row: usize,
    },
    /// Set the done percentage of an entry.
    Progress {
        #[arg(long, value_name = "N")]
        row: usize,
        #[arg(long)]
        percent: u8,
    },
}

#[derive(Args)]
struct GanttShowArgs {
    #[arg(long, value_name = "N")]
    project_row: Option<usize>,
    #[arg(long, value_parser = parse_view_mode, default_value = "weeks")]
    mode: ViewMode,
}

impl Default for GanttShowArgs {
    fn default() -> Self {
        Self {
            project_row: None,
            mode: ViewMode::Weeks,
        }
    }
}

#[derive(Args, Default)]
struct QualityArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long, value_parser = parse_quality_kind)]
    kind: Option<QualityKind>,
    #[arg(long, value_parser = parse_quality_status)]
    status: Option<QualityStatus>,
}

#[derive(Args, Default)]
struct InventoryArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long, value_parser = parse_part_category)]
    category: Option<PartCategory>,
    #[arg(long, value_parser = parse_stock_status)]
    status: Option<StockStatus>,
}

#[derive(Subcommand)]
enum EquipmentCmd {
    /// List equipment (default).
    List(EquipmentListArgs),
    /// Order new equipment.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = parse_equipment_kind, default_value = "mold")]
        kind: EquipmentKind,
        #[arg(long, value_name = "N", default_value_t = 1)]
        project_row: usize,
        #[arg(long)]
        supplier: String,
        #[arg(long, value_parser = parse_date_arg, value_name = "YYYY-MM-DD")]
        order_date: Date,
        #[arg(long, value_parser = parse_date_arg, value_name = "YYYY-MM-DD")]
        delivery_date: Date,
        #[arg(long, default_value_t = 0)]
        cost: i64,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        specifications: String,
    },
    /// Update production state of a row.
    SetStatus {
        #[arg(long, value_name = "N")]
        row: usize,
        #[arg(long, value_parser = parse_production_status)]
        status: partgate_core::model::equipment::ProductionStatus,
    },
    /// Delete a row.
    Remove {
        #[arg(long, value_name = "N")]
        row: usize,
    },
}

#[derive(Args, Default)]
struct EquipmentListArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long, value_name = "N")]
    project_row: Option<usize>,
    #[arg(long, value_parser = parse_equipment_kind)]
    kind: Option<EquipmentKind>,
}

#[derive(Args, Default)]
struct DocumentsArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long, value_parser = parse_document_kind)]
    kind: Option<DocumentKind>,
    #[arg(long, value_parser = parse_access_level)]
    access: Option<AccessLevel>,
}

#[derive(Subcommand)]
enum NotificationsCmd {
    /// List the feed (default).
    List {
        #[arg(long, value_parser = parse_notification_filter, default_value = "all")]
        filter: NotificationFilter,
    },
    /// Mark one entry read.
    Read {
        #[arg(long, value_name = "N")]
        row: usize,
    },
    /// Mark the whole feed read.
    ReadAll,
}

#[derive(Subcommand)]
enum EscalationCmd {
    /// Delayed-task list (default).
    Delayed,
    /// Configured rules.
    Rules,
    /// Sent-mail history.
    History,
    /// "Send" the escalation mail for one delayed row.
    Send {
        #[arg(long, value_name = "N")]
        row: usize,
    },
    /// Print the Outlook web compose deep link.
    Outlook,
}

#[derive(Subcommand)]
enum ChangesCmd {
    /// List change requests (default).
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Approve a request.
    Approve {
        #[arg(long, value_name = "N")]
        row: usize,
        #[arg(long, default_value = "Admin User")]
        approver: String,
    },
    /// Reject a request.
    Reject {
        #[arg(long, value_name = "N")]
        row: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = partgate_core::init_logging("info", log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let theme = if cli.dark { Theme::Dark } else { Theme::Light };
    let style = views::Style::new(theme, !cli.plain);
    let mut workspace = Workspace::seeded();
    workspace.theme = theme;
    let now = OffsetDateTime::now_utc();
    let today = now.date();

    if let Err(message) = run(cli.command, &mut workspace, &style, today, now) {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn run(
    command: Command,
    workspace: &mut Workspace,
    style: &views::Style,
    today: Date,
    now: OffsetDateTime,
) -> Result<(), String> {
    match command {
        Command::Dashboard => views::dashboard(workspace, style, today),
        Command::Projects { action } => match action.unwrap_or(ProjectsCmd::List(ProjectListArgs::default())) {
            ProjectsCmd::List(args) => {
                let query = ProjectQuery {
                    search: args.search,
                    status: args.status,
                    priority: args.priority,
                };
                views::projects(workspace, &query, style, today);
            }
            ProjectsCmd::Add {
                name,
                customer,
                start,
                end,
                status,
                priority,
            } => {
                let mut service = ProjectService::new(&mut workspace.projects);
                service
                    .create(NewProject {
                        name,
                        customer,
                        start_date: start,
                        end_date: end,
                        status,
                        priority,
                    })
                    .map_err(|err| err.to_string())?;
                views::projects(workspace, &ProjectQuery::default(), style, today);
            }
            ProjectsCmd::Remove { row } => {
                let id = project_id_by_row(workspace, row)?;
                ProjectService::new(&mut workspace.projects)
                    .delete(id)
                    .map_err(|err| err.to_string())?;
                views::projects(workspace, &ProjectQuery::default(), style, today);
            }
        },
        Command::Tasks { action } => match action.unwrap_or(TasksCmd::Board(TaskListArgs::default())) {
            TasksCmd::Board(args) => {
                let query = task_query(workspace, args)?;
                views::task_board(workspace, &query, style);
            }
            TasksCmd::Add {
                title,
                description,
                project_row,
                assignee,
                priority,
                due,
                department,
            } => {
                let project_id = project_id_by_row(workspace, project_row)?;
                TaskService::new(&mut workspace.tasks).create(
                    NewTask {
                        title,
                        description,
                        project_id,
                        assigned_to: assignee,
                        priority,
                        due_date: due,
                        department,
                    },
                    today,
                );
                views::task_board(workspace, &TaskQuery::default(), style);
            }
            TasksCmd::SetStatus { row, status } => {
                let id = row_id(workspace.tasks.all(), row, "task", |task| task.id)?;
                TaskService::new(&mut workspace.tasks)
                    .set_status(id, status)
                    .map_err(|err| err.to_string())?;
                views::task_board(workspace, &TaskQuery::default(), style);
            }
        },
        Command::Gantt { action } => match action.unwrap_or(GanttCmd::Show(GanttShowArgs::default())) {
            GanttCmd::Show(args) => {
                let project = optional_project_by_row(workspace, args.project_row)?.cloned();
                let service = ScheduleService::new(&mut workspace.schedule);
                let layout = service.layout(project.as_ref(), args.mode, today);
                views::gantt(&layout, style);
            }
            GanttCmd::Add {
                name,
                start,
                end,
                assignee,
                phase,
                project_row,
            } => {
                let project_id = match project_row {
                    Some(row) => project_id_by_row(workspace, row)?,
                    None => first_project_id(workspace)?,
                };
                ScheduleService::new(&mut workspace.schedule)
                    .add_task(
                        GanttTaskDraft {
                            name,
                            start_date: start,
                            end_date: end,
                            assignee,
                            phase,
                        },
                        project_id,
                    )
                    .map_err(|err| err.to_string())?;
                let service = ScheduleService::new(&mut workspace.schedule);
                let layout = service.layout(None, ViewMode::Weeks, today);
                views::gantt(&layout, style);
            }
            GanttCmd::Remove { row } => {
                let id = row_id(workspace.schedule.all(), row, "schedule entry", |t| t.id)?;
                ScheduleService::new(&mut workspace.schedule)
                    .remove(id)
                    .map_err(|err| err.to_string())?;
                let service = ScheduleService::new(&mut workspace.schedule);
                let layout = service.layout(None, ViewMode::Weeks, today);
                views::gantt(&layout, style);
            }
            GanttCmd::Progress { row, percent } => {
                let id = row_id(workspace.schedule.all(), row, "schedule entry", |t| t.id)?;
                ScheduleService::new(&mut workspace.schedule)
                    .set_progress(id, percent)
                    .map_err(|err| err.to_string())?;
                let service = ScheduleService::new(&mut workspace.schedule);
                let layout = service.layout(None, ViewMode::Weeks, today);
                views::gantt(&layout, style);
            }
        },
        Command::Timeline { project_row } => {
            let project = optional_project_by_row(workspace, project_row)?.map(|p| p.id);
            views::phase_timeline(workspace, project, style, today);
        }
        Command::Quality(args) => {
            let query = QualityQuery {
                search: args.search,
                kind: args.kind,
                status: args.status,
            };
            views::quality(workspace, &query, style);
        }
        Command::Inventory(args) => {
            let query = InventoryQuery {
                search: args.search,
                category: args.category,
                status: args.status,
            };
            views::inventory(workspace, &query, style);
        }
        Command::Equipment { action } => match action.unwrap_or(EquipmentCmd::List(EquipmentListArgs::default())) {
            EquipmentCmd::List(args) => {
                let project = optional_project_by_row(workspace, args.project_row)?.map(|p| p.id);
                let query = EquipmentQuery {
                    search: args.search,
                    project,
                    kind: args.kind,
                    production_status: None,
                };
                views::equipment(workspace, &query, style);
            }
            EquipmentCmd::Add {
                name,
                kind,
                project_row,
                supplier,
                order_date,
                delivery_date,
                cost,
                description,
                specifications,
            } => {
                let project_id = project_id_by_row(workspace, project_row)?;
                EquipmentService::new(&mut workspace.equipment)
                    .add(
                        NewEquipment {
                            name,
                            kind,
                            project_id,
                            supplier,
                            order_date,
                            delivery_date,
                            cost,
                            description,
                            specifications,
                        },
                        today,
                    )
                    .map_err(|err| err.to_string())?;
                views::equipment(workspace, &EquipmentQuery::default(), style);
            }
            EquipmentCmd::SetStatus { row, status } => {
                let id = row_id(workspace.equipment.all(), row, "equipment", |e| e.id)?;
                EquipmentService::new(&mut workspace.equipment)
                    .apply_update(
                        id,
                        EquipmentUpdate {
                            production_status: Some(status),
                            ..EquipmentUpdate::default()
                        },
                        today,
                    )
                    .map_err(|err| err.to_string())?;
                views::equipment(workspace, &EquipmentQuery::default(), style);
            }
            EquipmentCmd::Remove { row } => {
                let id = row_id(workspace.equipment.all(), row, "equipment", |e| e.id)?;
                EquipmentService::new(&mut workspace.equipment)
                    .remove(id)
                    .map_err(|err| err.to_string())?;
                views::equipment(workspace, &EquipmentQuery::default(), style);
            }
        },
        Command::Documents(args) => {
            let query = DocumentQuery {
                search: args.search,
                kind: args.kind,
                access_level: args.access,
            };
            views::documents(workspace, &query, style);
        }
        Command::Budget { project_row } => {
            let project_id = project_id_by_row(workspace, project_row)?;
            views::budget(workspace, project_id, style);
        }
        Command::Reports { kind, range } => {
            let report = report_service::generate(workspace, kind, range);
            views::report(&report, style);
        }
        Command::Notifications { action } => {
            match action.unwrap_or(NotificationsCmd::List {
                filter: NotificationFilter::All,
            }) {
                NotificationsCmd::List { filter } => {
                    views::notifications(workspace, filter, style, now);
                }
                NotificationsCmd::Read { row } => {
                    let id = row_id(workspace.notifications.all(), row, "notification", |n| n.id)?;
                    NotificationService::new(&mut workspace.notifications)
                        .mark_read(id)
                        .map_err(|err| err.to_string())?;
                    views::notifications(workspace, NotificationFilter::All, style, now);
                }
                NotificationsCmd::ReadAll => {
                    NotificationService::new(&mut workspace.notifications).mark_all_read();
                    views::notifications(workspace, NotificationFilter::All, style, now);
                }
            }
        }
        Command::Escalation { action } => match action.unwrap_or(EscalationCmd::Delayed) {
            EscalationCmd::Delayed => views::escalation_delayed(workspace, style),
            EscalationCmd::Rules => views::escalation_rules(workspace, style, today),
            EscalationCmd::History => views::escalation_history(workspace, style),
            EscalationCmd::Send { row } => {
                let id = row_id(workspace.escalation.delayed_actions(), row, "delayed action", |a| {
                    a.id
                })?;
                let event = EscalationService::new(&mut workspace.escalation)
                    .send(id, now)
                    .map_err(|err| err.to_string())?;
                println!("Eskalasyon e-postası gönderildi: {}", event.escalated_to);
                views::escalation_history(workspace, style);
            }
            EscalationCmd::Outlook => {
                println!(
                    "{}",
                    EscalationService::new(&mut workspace.escalation).outlook_compose_url()
                );
            }
        },
        Command::Changes { action } => match action.unwrap_or(ChangesCmd::List { search: None }) {
            ChangesCmd::List { search } => {
                let query = partgate_core::repo::change_repo::ChangeRequestQuery {
                    search,
                    status: None,
                    project: None,
                };
                views::change_requests(workspace, &query, style);
            }
            ChangesCmd::Approve { row, approver } => {
                let id = row_id(workspace.changes.all(), row, "change request", |c| c.id)?;
                ChangeRequestService::new(&mut workspace.changes)
                    .approve(id, approver, today)
                    .map_err(|err| err.to_string())?;
                let query = partgate_core::repo::change_repo::ChangeRequestQuery::default();
                views::change_requests(workspace, &query, style);
            }
            ChangesCmd::Reject { row } => {
                let id = row_id(workspace.changes.all(), row, "change request", |c| c.id)?;
                ChangeRequestService::new(&mut workspace.changes)
                    .reject(id)
                    .map_err(|err| err.to_string())?;
                let query = partgate_core::repo::change_repo::ChangeRequestQuery::default();
                views::change_requests(workspace, &query, style);
            }
        },
    }
    Ok(())
}

fn task_query(workspace: &Workspace, args: TaskListArgs) -> Result<TaskQuery, String> {
    let project = optional_project_by_row(workspace, args.project_row)?.map(|p| p.id);
    Ok(TaskQuery {
        search: args.search,
        status: args.status,
        priority: args.priority,
        project,
    })
}

/// Resolves a 1-based display row to the id of the underlying record.
fn row_id<T>(
    rows: &[T],
    row: usize,
    what: &str,
    id_of: impl Fn(&T) -> uuid::Uuid,
) -> Result<uuid::Uuid, String> {
    rows.get(row.wrapping_sub(1))
        .map(id_of)
        .ok_or_else(|| format!("no {what} at row {row} (1..={})", rows.len()))
}

fn project_id_by_row(workspace: &Workspace, row: usize) -> Result<ProjectId, String> {
    row_id(workspace.projects.all(), row, "project", |p| p.id)
}

fn optional_project_by_row(
    workspace: &Workspace,
    row: Option<usize>,
) -> Result<Option<&Project>, String> {
    match row {
        None => Ok(None),
        Some(row) => {
            let id = project_id_by_row(workspace, row)?;
            Ok(workspace.projects.get(id))
        }
    }
}

fn first_project_id(workspace: &Workspace) -> Result<ProjectId, String> {
    workspace
        .projects
        .all()
        .first()
        .map(|p| p.id)
        .ok_or_else(|| "no projects exist".to_string())
}

fn parse_date_arg(value: &str) -> Result<Date, String> {
    let description = format_description!("[year]-[month]-[day]");
    Date::parse(value, &description).map_err(|err| format!("invalid date `{value}`: {err}"))
}

fn parse_priority(value: &str) -> Result<Priority, String> {
    Priority::parse(value).ok_or_else(|| format!("unknown priority `{value}`"))
}

fn parse_project_status(value: &str) -> Result<ProjectStatus, String> {
    ProjectStatus::parse(value).ok_or_else(|| format!("unknown project status `{value}`"))
}

fn parse_task_status(value: &str) -> Result<TaskStatus, String> {
    TaskStatus::parse(value).ok_or_else(|| format!("unknown task status `{value}`"))
}

fn parse_phase(value: &str) -> Result<PhaseId, String> {
    PhaseId::parse(value).ok_or_else(|| format!("unknown phase `{value}`"))
}

fn parse_view_mode(value: &str) -> Result<ViewMode, String> {
    ViewMode::parse(value).ok_or_else(|| format!("unknown view mode `{value}`"))
}

fn parse_quality_kind(value: &str) -> Result<QualityKind, String> {
    QualityKind::parse(value).ok_or_else(|| format!("unknown quality kind `{value}`"))
}

fn parse_quality_status(value: &str) -> Result<QualityStatus, String> {
    QualityStatus::parse(value).ok_or_else(|| format!("unknown quality status `{value}`"))
}

fn parse_part_category(value: &str) -> Result<PartCategory, String> {
    PartCategory::parse(value).ok_or_else(|| format!("unknown part category `{value}`"))
}

fn parse_stock_status(value: &str) -> Result<StockStatus, String> {
    StockStatus::parse(value).ok_or_else(|| format!("unknown stock status `{value}`"))
}

fn parse_equipment_kind(value: &str) -> Result<EquipmentKind, String> {
    EquipmentKind::parse(value).ok_or_else(|| format!("unknown equipment kind `{value}`"))
}

fn parse_production_status(
    value: &str,
) -> Result<partgate_core::model::equipment::ProductionStatus, String> {
    partgate_core::model::equipment::ProductionStatus::parse(value)
        .ok_or_else(|| format!("unknown production status `{value}`"))
}

fn parse_document_kind(value: &str) -> Result<DocumentKind, String> {
    DocumentKind::parse(value).ok_or_else(|| format!("unknown document kind `{value}`"))
}

fn parse_access_level(value: &str) -> Result<AccessLevel, String> {
    AccessLevel::parse(value).ok_or_else(|| format!("unknown access level `{value}`"))
}

fn parse_notification_filter(value: &str) -> Result<NotificationFilter, String> {
    NotificationFilter::parse(value).ok_or_else(|| format!("unknown filter `{value}`"))
}

fn parse_report_kind(value: &str) -> Result<ReportKind, String> {
    ReportKind::parse(value).ok_or_else(|| format!("unknown report kind `{value}`"))
}

fn parse_report_range(value: &str) -> Result<ReportRange, String> {
    ReportRange::parse(value).ok_or_else(|| format!("unknown report range `{value}`"))
}
