//! Mood definitions - the companion's discrete emotional states.

use serde::{Deserialize, Serialize};

/// The five emotional states governing line selection and flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// The starting mood, before any milestone is earned.
    #[default]
    Curious,
    /// After the first milestone: the companion thinks it has the upper hand.
    Cocky,
    /// Triggered by a losing streak of wrong answers.
    Mocking,
    /// Triggered by a streak of correct answers.
    Impressed,
    /// After the final milestone. Sticky: automatic recomputation never
    /// leaves this mood; only `reset` clears it.
    ReluctantlyHelpful,
}

impl Mood {
    /// Whether this mood resists automatic recomputation.
    pub fn is_sticky(&self) -> bool {
        matches!(self, Mood::ReluctantlyHelpful)
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mood::Curious => "curious",
            Mood::Cocky => "cocky",
            Mood::Mocking => "mocking",
            Mood::Impressed => "impressed",
            Mood::ReluctantlyHelpful => "reluctantly_helpful",
        };
        write!(f, "{}", name)
    }
}
