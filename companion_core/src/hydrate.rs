//! Hydration - reconstructing valid session state from a persisted blob.

use quiz_rules::{EngineConfig, SessionState, MAX_RECENT_LINES, SCHEMA_VERSION};
use tracing::warn;

/// Rebuild session state from a raw persisted blob.
///
/// An absent blob, a structurally invalid one, or one whose schema
/// version differs from [`SCHEMA_VERSION`] yields the exact fresh
/// default state; a version mismatch is a deliberate full reset, never
/// a migration. A valid blob is merged over defaults (persisted fields
/// win, unknown fields are ignored) and then normalized against the
/// configuration: the granted-flags array is truncated or padded to the
/// configured milestone count, and the recent-lines memory keeps only
/// its newest entries.
pub fn hydrate(raw: Option<&str>, config: &EngineConfig) -> SessionState {
    let Some(raw) = raw else {
        return SessionState::fresh(config);
    };

    let mut state: SessionState = match serde_json::from_str(raw) {
        Ok(state) => state,
        Err(err) => {
            warn!("companion state reset due to parse error: {err}");
            return SessionState::fresh(config);
        }
    };

    if state.schema_version != SCHEMA_VERSION {
        return SessionState::fresh(config);
    }

    state
        .milestones_granted
        .resize(config.milestones.len(), false);

    let excess = state.recent_lines.len().saturating_sub(MAX_RECENT_LINES);
    if excess > 0 {
        state.recent_lines.drain(..excess);
    }

    state
}
