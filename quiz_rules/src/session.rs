//! Session state - the mutable core entity, one instance per player.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::mood::Mood;

/// Current persisted-blob schema version. Blobs carrying any other
/// version are discarded wholesale on hydration, never migrated.
pub const SCHEMA_VERSION: u32 = 1;

/// Upper bound on the anti-repetition line memory.
pub const MAX_RECENT_LINES: usize = 3;

/// The companion's complete mutable state.
///
/// Serializes to the camelCase blob stored by the state store. Every
/// field carries a serde default so a partial blob merges against
/// defaults during hydration; a blob without `schemaVersion`
/// deserializes to version 0 and therefore fails the version check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub schema_version: u32,

    #[serde(default)]
    pub mood: Mood,

    /// Consecutive correct answers since the last wrong one.
    #[serde(default)]
    pub correct_streak: u32,

    /// Consecutive wrong answers since the last correct one.
    #[serde(default)]
    pub wrong_streak: u32,

    #[serde(default)]
    pub hints_used: u32,

    #[serde(default)]
    pub answered_count: u32,

    #[serde(default)]
    pub milestones_unlocked: u32,

    /// One flag per configured milestone, in threshold order. Monotonic:
    /// once true, only `reset` may clear it.
    #[serde(default)]
    pub milestones_granted: Vec<bool>,

    /// Category tag of the last interaction. Informational only.
    #[serde(default)]
    pub last_category: Option<String>,

    /// The most recent spoken lines, oldest first, at most
    /// [`MAX_RECENT_LINES`] entries.
    #[serde(default)]
    pub recent_lines: Vec<String>,
}

impl SessionState {
    /// Create the default state for the given configuration.
    pub fn fresh(config: &EngineConfig) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            mood: Mood::Curious,
            correct_streak: 0,
            wrong_streak: 0,
            hints_used: 0,
            answered_count: 0,
            milestones_unlocked: 0,
            milestones_granted: vec![false; config.milestones.len()],
            last_category: None,
            recent_lines: Vec::new(),
        }
    }

    /// Whether the first configured milestone has been earned.
    pub fn first_milestone_granted(&self) -> bool {
        self.milestones_granted.first().copied().unwrap_or(false)
    }

    /// Remember a spoken line, evicting the oldest entry beyond the cap.
    pub fn record_line(&mut self, line: impl Into<String>) {
        self.recent_lines.push(line.into());
        while self.recent_lines.len() > MAX_RECENT_LINES {
            self.recent_lines.remove(0);
        }
    }
}
