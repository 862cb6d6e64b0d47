//! Milestone tracking - one-shot detection and granting of question-index
//! thresholds.

use quiz_rules::{EngineConfig, SessionState};
use serde::{Deserialize, Serialize};

use crate::moods;

/// A newly reachable milestone, reported by [`check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneUnlock {
    /// 1-based ordinal of the milestone.
    pub milestone_number: usize,
}

/// Outcome of a grant attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantOutcome {
    /// The flag was newly set; mood side effects have been applied.
    Granted { first: bool, last: bool },
    /// The milestone was granted earlier. Nothing changed.
    AlreadyGranted,
    /// The ordinal does not refer to a configured milestone.
    OutOfRange,
}

/// Find the first ungranted milestone whose threshold equals the given
/// question index. Side-effect-free; granting happens separately.
pub fn check(
    config: &EngineConfig,
    state: &SessionState,
    question_index: u32,
) -> Option<MilestoneUnlock> {
    config
        .milestones
        .iter()
        .enumerate()
        .find(|(idx, threshold)| {
            question_index == **threshold
                && !state.milestones_granted.get(*idx).copied().unwrap_or(true)
        })
        .map(|(idx, _)| MilestoneUnlock {
            milestone_number: idx + 1,
        })
}

/// Grant a milestone by 1-based ordinal.
///
/// A fresh grant sets the flag, bumps the unlocked counter, and applies
/// the grant-time mood transition. Repeated or out-of-range grants
/// mutate nothing.
pub fn grant(state: &mut SessionState, milestone_number: usize) -> GrantOutcome {
    let Some(idx) = milestone_number.checked_sub(1) else {
        return GrantOutcome::OutOfRange;
    };
    if idx >= state.milestones_granted.len() {
        return GrantOutcome::OutOfRange;
    }
    if state.milestones_granted[idx] {
        return GrantOutcome::AlreadyGranted;
    }

    state.milestones_granted[idx] = true;
    state.milestones_unlocked += 1;

    let first = idx == 0;
    let last = idx == state.milestones_granted.len() - 1;
    state.mood = moods::on_grant(state.mood, first, last);

    GrantOutcome::Granted { first, last }
}
