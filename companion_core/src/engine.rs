//! Engine facade - the single entry point the quiz UI talks to.
//!
//! Every gameplay operation lazily hydrates state on first touch,
//! mutates counters, recomputes mood, selects a line, and persists
//! before returning. The random source and the state store are injected
//! so tests run deterministically against an in-memory store.

use quiz_rules::{ConfigOverrides, EngineConfig, Mood, SessionState};
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dialogue::{
    pick_line, pick_milestone_line, Interaction, UNKNOWN_MILESTONE_LINE, UNKNOWN_MILESTONE_TITLE,
};
use crate::hydrate::hydrate;
use crate::milestones::{self, GrantOutcome, MilestoneUnlock};
use crate::moods;
use crate::store::StateStore;

/// Opaque effect signal for the visual-decoration collaborator. The
/// engine never interprets or renders these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fx {
    Sparkle,
    Shake,
    Confetti,
}

/// A spoken line plus the mood it was spoken in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResponse {
    pub text: String,
    pub mood: Mood,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fx: Option<Fx>,
}

/// Response to a milestone grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneResponse {
    pub title: String,
    pub text: String,
    pub mood: Mood,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fx: Option<Fx>,
    /// True when the milestone had already been granted and nothing
    /// changed.
    #[serde(default)]
    pub already_granted: bool,
}

/// Summary returned by [`CompanionEngine::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitSummary {
    pub mood: Mood,
    pub answered_count: u32,
}

/// The stateful dialogue engine.
///
/// Generic over the state store and the random source; see
/// [`CompanionEngine::with_rng`] for deterministic construction.
pub struct CompanionEngine<S: StateStore, R: Rng = ThreadRng> {
    config: EngineConfig,
    store: S,
    rng: R,
    state: Option<SessionState>,
}

impl<S: StateStore> CompanionEngine<S, ThreadRng> {
    /// Create an engine with default configuration and the thread-local
    /// random source.
    pub fn new(store: S) -> Self {
        Self::with_rng(store, rand::thread_rng())
    }
}

impl<S: StateStore, R: Rng> CompanionEngine<S, R> {
    /// Create an engine with an explicit random source.
    pub fn with_rng(store: S, rng: R) -> Self {
        Self {
            config: EngineConfig::default(),
            store,
            rng,
            state: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply configuration overrides, hydrate state from the store, and
    /// persist the normalized result.
    pub fn init(&mut self, overrides: &ConfigOverrides) -> InitSummary {
        self.config = self.config.resolve(overrides);
        let raw = self.store.load(&self.config.storage_key);
        let state = hydrate(raw.as_deref(), &self.config);
        let summary = InitSummary {
            mood: state.mood,
            answered_count: state.answered_count,
        };
        self.state = Some(state);
        self.persist();
        summary
    }

    /// Greet the player at quiz start. Mutates no counters.
    pub fn on_quiz_start(&mut self) -> LineResponse {
        let (_, state, rng) = self.parts();
        let text = pick_line(state, rng, Interaction::Start, None);
        let response = LineResponse {
            text,
            mood: state.mood,
            fx: None,
        };
        self.persist();
        response
    }

    /// React to the player spending a hint.
    pub fn on_hint_used(&mut self, category: Option<&str>) -> LineResponse {
        let (_, state, rng) = self.parts();
        state.hints_used += 1;
        state.last_category = category.map(str::to_owned);
        let text = pick_line(state, rng, Interaction::Hint, None);
        let response = LineResponse {
            text,
            mood: state.mood,
            fx: None,
        };
        self.persist();
        response
    }

    /// React to an answered question: streak bookkeeping, mood
    /// recomputation, and a matching line with a sparkle or shake cue.
    pub fn on_answer(&mut self, category: Option<&str>, correct: bool) -> LineResponse {
        let (_, state, rng) = self.parts();
        state.answered_count += 1;
        state.last_category = category.map(str::to_owned);
        if correct {
            state.correct_streak += 1;
            state.wrong_streak = 0;
        } else {
            state.wrong_streak += 1;
            state.correct_streak = 0;
        }
        state.mood = moods::after_answer(state.mood, state, correct);

        let (interaction, fx) = if correct {
            (Interaction::Correct, Fx::Sparkle)
        } else {
            (Interaction::Wrong, Fx::Shake)
        };
        let text = pick_line(state, rng, interaction, None);
        let response = LineResponse {
            text,
            mood: state.mood,
            fx: Some(fx),
        };
        self.persist();
        response
    }

    /// Report the first ungranted milestone matching this question
    /// index, if any. Detection only; nothing is granted or persisted.
    pub fn check_milestone(&mut self, question_index: u32) -> Option<MilestoneUnlock> {
        let (config, state, _) = self.parts();
        milestones::check(config, state, question_index)
    }

    /// Grant a milestone by 1-based ordinal and hand out its reward
    /// line. Out-of-range ordinals get a safe fallback response;
    /// repeated grants change nothing and are flagged as such.
    pub fn on_milestone(&mut self, milestone_number: usize) -> MilestoneResponse {
        let (_, state, rng) = self.parts();
        let outcome = milestones::grant(state, milestone_number);

        let response = match outcome {
            GrantOutcome::OutOfRange => MilestoneResponse {
                title: UNKNOWN_MILESTONE_TITLE.to_string(),
                text: UNKNOWN_MILESTONE_LINE.to_string(),
                mood: state.mood,
                fx: None,
                already_granted: false,
            },
            GrantOutcome::AlreadyGranted => {
                let text = pick_milestone_line(state, rng, milestone_number);
                MilestoneResponse {
                    title: format!("Paketti {milestone_number}"),
                    text,
                    mood: state.mood,
                    fx: None,
                    already_granted: true,
                }
            }
            GrantOutcome::Granted { .. } => {
                let text = pick_milestone_line(state, rng, milestone_number);
                MilestoneResponse {
                    title: format!("Paketti {milestone_number}"),
                    text,
                    mood: state.mood,
                    fx: Some(Fx::Confetti),
                    already_granted: false,
                }
            }
        };
        self.persist();
        response
    }

    /// Discard the persisted blob and start over from fresh defaults.
    /// Returns a copy of the new state.
    pub fn reset(&mut self) -> SessionState {
        self.store.clear(&self.config.storage_key);
        let fresh = SessionState::fresh(&self.config);
        self.state = Some(fresh.clone());
        self.persist();
        fresh
    }

    /// Lazily hydrated state plus the pieces ops need alongside it.
    fn parts(&mut self) -> (&EngineConfig, &mut SessionState, &mut R) {
        let Self {
            config,
            store,
            rng,
            state,
        } = self;
        let state = state
            .get_or_insert_with(|| hydrate(store.load(&config.storage_key).as_deref(), config));
        (config, state, rng)
    }

    fn persist(&mut self) {
        let Some(state) = &self.state else { return };
        match serde_json::to_string(state) {
            Ok(blob) => self.store.save(&self.config.storage_key, &blob),
            Err(err) => warn!("unable to serialize companion state: {err}"),
        }
    }
}
