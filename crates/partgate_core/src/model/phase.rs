//! APQP phase-gate plan carried by every project.
//!
//! # Invariants
//! - The gate sequence is fixed: concept, design, proto, validation, sop.
//! - `PhasePlan` holds exactly one gate per phase and iterates in that order.

use crate::model::common::Tone;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// One of the five APQP phases, in process order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseId {
    Concept,
    Design,
    Proto,
    Validation,
    Sop,
}

impl PhaseId {
    pub const ALL: [PhaseId; 5] = [
        PhaseId::Concept,
        PhaseId::Design,
        PhaseId::Proto,
        PhaseId::Validation,
        PhaseId::Sop,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PhaseId::Concept => "Konsept",
            PhaseId::Design => "Tasarım",
            PhaseId::Proto => "Prototip",
            PhaseId::Validation => "Doğrulama",
            PhaseId::Sop => "SOP",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PhaseId::Concept => "concept",
            PhaseId::Design => "design",
            PhaseId::Proto => "proto",
            PhaseId::Validation => "validation",
            PhaseId::Sop => "sop",
        }
    }

    pub fn parse(value: &str) -> Option<PhaseId> {
        match value {
            "concept" => Some(PhaseId::Concept),
            "design" => Some(PhaseId::Design),
            "proto" => Some(PhaseId::Proto),
            "validation" => Some(PhaseId::Validation),
            "sop" => Some(PhaseId::Sop),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            PhaseId::Concept => Tone::Gray,
            PhaseId::Design => Tone::Blue,
            PhaseId::Proto => Tone::Yellow,
            PhaseId::Validation => Tone::Orange,
            PhaseId::Sop => Tone::Green,
        }
    }
}

/// Completion state of one phase gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseGate {
    /// Display name; matches `PhaseId::label` for seeded plans.
    pub name: String,
    pub completed: bool,
    pub due_date: Date,
}

/// The full phase-gate plan of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhasePlan {
    /// Phase the project currently sits in.
    pub current: PhaseId,
    gates: BTreeMap<PhaseId, PhaseGate>,
}

impl PhasePlan {
    /// Builds a plan from one `(phase, completed, due_date)` row per phase.
    ///
    /// Missing phases simply stay absent; seeded and generated plans always
    /// provide all five.
    pub fn new(
        current: PhaseId,
        rows: impl IntoIterator<Item = (PhaseId, bool, Date)>,
    ) -> Self {
        let gates = rows
            .into_iter()
            .map(|(phase, completed, due_date)| {
                (
                    phase,
                    PhaseGate {
                        name: phase.label().to_string(),
                        completed,
                        due_date,
                    },
                )
            })
            .collect();
        Self { current, gates }
    }

    pub fn gate(&self, phase: PhaseId) -> Option<&PhaseGate> {
        self.gates.get(&phase)
    }

    pub fn gate_mut(&mut self, phase: PhaseId) -> Option<&mut PhaseGate> {
        self.gates.get_mut(&phase)
    }

    /// Gates in fixed APQP order.
    pub fn gates(&self) -> impl Iterator<Item = (PhaseId, &PhaseGate)> {
        self.gates.iter().map(|(phase, gate)| (*phase, gate))
    }

    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    pub fn completed_count(&self) -> usize {
        self.gates.values().filter(|gate| gate.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::{PhaseId, PhasePlan};
    use time::macros::date;

    #[test]
    fn gates_iterate_in_apqp_order() {
        // Insertion order is shuffled on purpose.
        let plan = PhasePlan::new(
            PhaseId::Design,
            [
                (PhaseId::Sop, false, date!(2024 - 08 - 30)),
                (PhaseId::Concept, true, date!(2024 - 02 - 01)),
                (PhaseId::Proto, false, date!(2024 - 06 - 01)),
                (PhaseId::Design, false, date!(2024 - 04 - 15)),
                (PhaseId::Validation, false, date!(2024 - 07 - 15)),
            ],
        );

        let order: Vec<PhaseId> = plan.gates().map(|(phase, _)| phase).collect();
        assert_eq!(order, PhaseId::ALL);
        assert_eq!(plan.completed_count(), 1);
    }
}
