//! Mood state machine - pure transition rules over session state.
//!
//! The priority order of the rules is load-bearing: earlier rules win
//! and short-circuit, and the calm-down rule runs before the standard
//! recomputation on every answer event.

use quiz_rules::{Mood, SessionState};

/// Streak length at which a mood flips to mocking or impressed.
pub const STREAK_THRESHOLD: u32 = 2;

/// Standard mood recomputation, evaluated after every answer event.
///
/// Priority order, first match wins:
/// 1. a sticky mood is left untouched
/// 2. wrong streak at threshold -> mocking
/// 3. correct streak at threshold -> impressed
/// 4. first milestone granted and mood is neither mocking nor
///    impressed -> cocky
/// 5. first milestone not granted -> curious
/// 6. otherwise unchanged
pub fn recompute(current: Mood, state: &SessionState) -> Mood {
    if current.is_sticky() {
        return current;
    }
    if state.wrong_streak >= STREAK_THRESHOLD {
        return Mood::Mocking;
    }
    if state.correct_streak >= STREAK_THRESHOLD {
        return Mood::Impressed;
    }
    let first_granted = state.first_milestone_granted();
    if first_granted && current != Mood::Mocking && current != Mood::Impressed {
        return Mood::Cocky;
    }
    if !first_granted {
        return Mood::Curious;
    }
    current
}

/// Mood after an answer event, with streak counters already updated.
///
/// A mocking companion calms down once the player strings together
/// enough correct answers: the mood is first forced to cocky (first
/// milestone granted) or curious (otherwise), and the standard rules
/// then re-evaluate from there.
pub fn after_answer(current: Mood, state: &SessionState, correct: bool) -> Mood {
    let current = if current == Mood::Mocking
        && correct
        && state.correct_streak >= STREAK_THRESHOLD
    {
        if state.first_milestone_granted() {
            Mood::Cocky
        } else {
            Mood::Curious
        }
    } else {
        current
    };
    recompute(current, state)
}

/// Mood transition applied when a milestone is granted.
///
/// The first grant turns the companion cocky unless it is busy mocking;
/// the final grant unconditionally makes it reluctantly helpful.
pub fn on_grant(current: Mood, first: bool, last: bool) -> Mood {
    let mut mood = current;
    if first && mood != Mood::Mocking {
        mood = Mood::Cocky;
    }
    if last {
        mood = Mood::ReluctantlyHelpful;
    }
    mood
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_rules::EngineConfig;

    fn state_with(correct: u32, wrong: u32, first_granted: bool) -> SessionState {
        let config = EngineConfig {
            milestones: vec![5, 10],
            ..EngineConfig::default()
        };
        let mut state = SessionState::fresh(&config);
        state.correct_streak = correct;
        state.wrong_streak = wrong;
        state.milestones_granted[0] = first_granted;
        state
    }

    #[test]
    fn test_sticky_mood_never_recomputes() {
        let state = state_with(0, 5, true);
        assert_eq!(
            recompute(Mood::ReluctantlyHelpful, &state),
            Mood::ReluctantlyHelpful
        );
    }

    #[test]
    fn test_wrong_streak_beats_correct_streak() {
        // Both rules armed; rule order puts mocking first.
        let state = state_with(2, 2, false);
        assert_eq!(recompute(Mood::Curious, &state), Mood::Mocking);
    }

    #[test]
    fn test_correct_streak_turns_impressed() {
        let state = state_with(2, 0, false);
        assert_eq!(recompute(Mood::Curious, &state), Mood::Impressed);
    }

    #[test]
    fn test_first_milestone_turns_cocky() {
        let state = state_with(1, 0, true);
        assert_eq!(recompute(Mood::Curious, &state), Mood::Cocky);
    }

    #[test]
    fn test_milestone_does_not_override_mocking_or_impressed() {
        let state = state_with(1, 1, true);
        assert_eq!(recompute(Mood::Mocking, &state), Mood::Mocking);
        assert_eq!(recompute(Mood::Impressed, &state), Mood::Impressed);
    }

    #[test]
    fn test_no_milestone_returns_to_curious() {
        let state = state_with(1, 0, false);
        assert_eq!(recompute(Mood::Cocky, &state), Mood::Curious);
    }

    #[test]
    fn test_calm_down_from_mocking_without_milestone() {
        // Two correct answers in a row while mocking; no milestone yet.
        // The calm-down forces curious, then the standard rules see the
        // correct streak and land on impressed.
        let state = state_with(2, 0, false);
        assert_eq!(after_answer(Mood::Mocking, &state, true), Mood::Impressed);
    }

    #[test]
    fn test_single_correct_answer_does_not_calm_mocking() {
        let state = state_with(1, 0, true);
        assert_eq!(after_answer(Mood::Mocking, &state, true), Mood::Mocking);
    }

    #[test]
    fn test_wrong_answer_never_calms_mocking() {
        let state = state_with(0, 1, true);
        assert_eq!(after_answer(Mood::Mocking, &state, false), Mood::Mocking);
    }

    #[test]
    fn test_first_grant_turns_cocky_unless_mocking() {
        assert_eq!(on_grant(Mood::Curious, true, false), Mood::Cocky);
        assert_eq!(on_grant(Mood::Mocking, true, false), Mood::Mocking);
    }

    #[test]
    fn test_last_grant_is_unconditional() {
        assert_eq!(on_grant(Mood::Mocking, false, true), Mood::ReluctantlyHelpful);
        assert_eq!(on_grant(Mood::Cocky, false, true), Mood::ReluctantlyHelpful);
    }

    #[test]
    fn test_sole_milestone_is_both_first_and_last() {
        assert_eq!(on_grant(Mood::Curious, true, true), Mood::ReluctantlyHelpful);
    }
}
