//! Phase-gate classification and segment geometry for the APQP bar.

use crate::model::common::Tone;
use crate::model::phase::{PhaseGate, PhaseId, PhasePlan};
use serde::{Deserialize, Serialize};
use time::Date;

/// Days before the due date at which a gate turns into a warning.
pub const WARNING_WINDOW_DAYS: i64 = 7;

/// Render state of one phase gate, recomputed from the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseStatus {
    Completed,
    Overdue,
    Warning,
    Normal,
}

impl PhaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            PhaseStatus::Completed => "Tamamlandı",
            PhaseStatus::Overdue => "Gecikmiş",
            PhaseStatus::Warning => "Uyarı",
            PhaseStatus::Normal => "Normal",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            PhaseStatus::Completed => Tone::Green,
            PhaseStatus::Overdue => Tone::Red,
            PhaseStatus::Warning => Tone::Yellow,
            PhaseStatus::Normal => Tone::Gray,
        }
    }
}

/// Classifies one gate against `today`.
///
/// Completion wins over any due-date state; a gate due today still counts as
/// a warning, not overdue.
pub fn classify_gate(gate: &PhaseGate, today: Date) -> PhaseStatus {
    if gate.completed {
        return PhaseStatus::Completed;
    }
    let days_until_due = (gate.due_date - today).whole_days();
    if days_until_due < 0 {
        PhaseStatus::Overdue
    } else if days_until_due <= WARNING_WINDOW_DAYS {
        PhaseStatus::Warning
    } else {
        PhaseStatus::Normal
    }
}

/// One segment of the phase progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSegment {
    pub phase: PhaseId,
    pub gate_name: String,
    pub due_date: Date,
    pub completed: bool,
    pub status: PhaseStatus,
    pub left_pct: f64,
    pub width_pct: f64,
}

/// Lays the plan's gates out as equal-width segments in APQP order.
pub fn phase_segments(plan: &PhasePlan, today: Date) -> Vec<PhaseSegment> {
    let count = plan.gate_count();
    if count == 0 {
        return Vec::new();
    }
    let width = 100.0 / count as f64;
    plan.gates()
        .enumerate()
        .map(|(index, (phase, gate))| PhaseSegment {
            phase,
            gate_name: gate.name.clone(),
            due_date: gate.due_date,
            completed: gate.completed,
            status: classify_gate(gate, today),
            left_pct: index as f64 * width,
            width_pct: width,
        })
        .collect()
}
