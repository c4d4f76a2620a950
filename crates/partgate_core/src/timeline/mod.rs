//! Timeline mathematics shared by the Gantt and phase views.
//!
//! # Responsibility
//! - Map date ranges onto percentage offsets along a bounded axis.
//! - Classify phase gates against the wall clock.
//!
//! # Invariants
//! - All geometry is pure arithmetic over the inputs; callers pass `today`.
//! - Outputs are intentionally unclamped; a task outside the window (or with
//!   an inverted range) produces offsets outside `0..=100`.

pub mod gantt;
pub mod phase;

pub use gantt::{
    ceil_days, tick_label, BarGeometry, TimeWindow, ViewMode, TICK_DISPLAY_LIMIT,
};
pub use phase::{classify_gate, phase_segments, PhaseSegment, PhaseStatus};
