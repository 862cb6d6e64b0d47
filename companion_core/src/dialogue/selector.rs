//! Line selection with anti-repetition memory.

use quiz_rules::SessionState;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{default_lines, milestone_lines, mood_lines, Interaction, LAST_RESORT_LINE};

/// Pick a line for the given interaction in the session's current mood.
///
/// Lookup order: mood-specific list, then the type's default list, then
/// `fallback`, then the generic last-resort line. Lines remembered in
/// `recent_lines` are filtered out first; if the filter would leave
/// nothing, the full unfiltered pool is used instead, so the result is
/// never empty when the source list is non-empty. The chosen line is
/// recorded into the recent-lines memory.
pub fn pick_line<R: Rng + ?Sized>(
    state: &mut SessionState,
    rng: &mut R,
    interaction: Interaction,
    fallback: Option<&'static [&'static str]>,
) -> String {
    const LAST_RESORT_POOL: &[&str] = &[LAST_RESORT_LINE];

    let moody = mood_lines(interaction, state.mood);
    let defaults = match default_lines(interaction) {
        lines if !lines.is_empty() => lines,
        _ => fallback.unwrap_or(LAST_RESORT_POOL),
    };
    let pool = if moody.is_empty() { defaults } else { moody };

    let fresh: Vec<&'static str> = pool
        .iter()
        .copied()
        .filter(|line| !state.recent_lines.iter().any(|recent| recent == line))
        .collect();
    let candidates: &[&'static str] = if fresh.is_empty() { pool } else { &fresh };

    let choice = candidates.choose(rng).copied().unwrap_or(LAST_RESORT_LINE);
    state.record_line(choice);
    choice.to_string()
}

/// Pick a reward line for a 1-based milestone ordinal.
///
/// No anti-repeat filtering: milestone lines are rare and effectively
/// non-repeating. The choice is still recorded into the recent-lines
/// memory.
pub fn pick_milestone_line<R: Rng + ?Sized>(
    state: &mut SessionState,
    rng: &mut R,
    ordinal: usize,
) -> String {
    let pool = milestone_lines(ordinal);
    let choice = pool.choose(rng).copied().unwrap_or(LAST_RESORT_LINE);
    state.record_line(choice);
    choice.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_rules::{EngineConfig, Mood};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fresh_state() -> SessionState {
        SessionState::fresh(&EngineConfig::default())
    }

    #[test]
    fn test_picked_line_comes_from_mood_pool() {
        let mut state = fresh_state();
        let mut rng = StdRng::seed_from_u64(7);

        let line = pick_line(&mut state, &mut rng, Interaction::Hint, None);
        assert!(mood_lines(Interaction::Hint, Mood::Curious).contains(&line.as_str()));
    }

    #[test]
    fn test_picked_line_is_recorded() {
        let mut state = fresh_state();
        let mut rng = StdRng::seed_from_u64(7);

        let line = pick_line(&mut state, &mut rng, Interaction::Correct, None);
        assert_eq!(state.recent_lines, vec![line]);
    }

    #[test]
    fn test_recent_lines_are_avoided() {
        let mut state = fresh_state();
        let mut rng = StdRng::seed_from_u64(42);

        // Curious wrong-answer pool has three lines; remember two of them.
        let pool = mood_lines(Interaction::Wrong, Mood::Curious);
        state.record_line(pool[0]);
        state.record_line(pool[1]);

        for _ in 0..20 {
            let mut probe = state.clone();
            let line = pick_line(&mut probe, &mut rng, Interaction::Wrong, None);
            assert_eq!(line, pool[2]);
        }
    }

    #[test]
    fn test_exhausted_pool_falls_back_to_full_list() {
        let mut state = fresh_state();
        let mut rng = StdRng::seed_from_u64(1);

        let pool = mood_lines(Interaction::Start, Mood::Curious);
        for line in pool {
            state.record_line(*line);
        }

        let line = pick_line(&mut state, &mut rng, Interaction::Start, None);
        assert!(pool.contains(&line.as_str()));
    }

    #[test]
    fn test_missing_mood_entry_uses_type_default() {
        let mut state = fresh_state();
        state.mood = Mood::Mocking;
        let mut rng = StdRng::seed_from_u64(3);

        // Start has no mocking entry, only a single default line.
        let line = pick_line(&mut state, &mut rng, Interaction::Start, None);
        assert_eq!(line, "Aloitetaanhan peli.");
    }

    #[test]
    fn test_recent_lines_stay_bounded() {
        let mut state = fresh_state();
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..50 {
            pick_line(&mut state, &mut rng, Interaction::Correct, None);
            assert!(state.recent_lines.len() <= quiz_rules::MAX_RECENT_LINES);
        }
    }

    #[test]
    fn test_milestone_line_from_ordinal_table() {
        let mut state = fresh_state();
        let mut rng = StdRng::seed_from_u64(11);

        let line = pick_milestone_line(&mut state, &mut rng, 2);
        assert!(milestone_lines(2).contains(&line.as_str()));
        assert_eq!(state.recent_lines, vec![line]);
    }

    #[test]
    fn test_milestone_line_ignores_recent_filter() {
        let mut state = fresh_state();
        let mut rng = StdRng::seed_from_u64(11);

        for line in milestone_lines(1) {
            state.record_line(*line);
        }
        let line = pick_milestone_line(&mut state, &mut rng, 1);
        assert!(milestone_lines(1).contains(&line.as_str()));
    }
}
