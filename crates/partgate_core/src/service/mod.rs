//! Use-case services over the repositories.
//!
//! # Responsibility
//! - Carry the behavior of each mutating dashboard view: creation with
//!   defaults, status transitions, timestamp stamping and the simulated
//!   outbound actions.
//!
//! # Invariants
//! - Services never bypass repository validation.
//! - "Today"/"now" always arrives as a parameter; nothing here reads the
//!   wall clock, so every behavior is testable with fixed dates.

pub mod change_service;
pub mod equipment_service;
pub mod escalation_service;
pub mod notification_service;
pub mod project_service;
pub mod report_service;
pub mod schedule_service;
pub mod task_service;
