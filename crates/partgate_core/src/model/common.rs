//! Shared value types used across several entities.

use serde::{Deserialize, Serialize};

/// Semantic colour tone attached to statuses and priorities.
///
/// Views map a tone onto their own palette (ANSI codes in the CLI); the
/// domain layer only states which tone a value carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Gray,
    Blue,
    Yellow,
    Orange,
    Red,
    Green,
    Purple,
}

/// Urgency level shared by projects, tasks, change requests and alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Turkish display label, as rendered by the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Düşük",
            Priority::Medium => "Orta",
            Priority::High => "Yüksek",
            Priority::Critical => "Kritik",
        }
    }

    /// Stable wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    pub fn parse(value: &str) -> Option<Priority> {
        match value {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Priority::Low => Tone::Green,
            Priority::Medium => Tone::Yellow,
            Priority::High => Tone::Orange,
            Priority::Critical => Tone::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Priority;

    #[test]
    fn priority_wire_spelling_round_trips() {
        for priority in Priority::ALL {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
        }
    }

    #[test]
    fn unknown_priority_is_rejected() {
        assert_eq!(Priority::parse("urgent"), None);
    }
}
