//! Domain model for APQP part-development programs.
//!
//! # Responsibility
//! - Define the canonical entities shared by every dashboard view.
//! - Replace stringly-typed status switches with exhaustive enums that carry
//!   their display label, wire spelling and colour tone.
//!
//! # Invariants
//! - Every entity is identified by a stable `Uuid`-backed id alias.
//! - Enum wire spellings are kebab-case and round-trip through `parse`.

pub mod budget;
pub mod change;
pub mod common;
pub mod document;
pub mod equipment;
pub mod escalation;
pub mod inventory;
pub mod notification;
pub mod phase;
pub mod project;
pub mod quality;
pub mod schedule;
pub mod task;
