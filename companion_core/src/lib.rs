//! # Companion Core
//!
//! The quiz companion's dialogue engine: a non-player character whose mood
//! and spoken lines react to player performance and persist across sessions.
//!
//! ## Core Components
//!
//! - **store**: Persistent state store abstraction with in-memory and file backends
//! - **hydrate**: Reconciles persisted blobs against the current schema and configuration
//! - **dialogue**: Static line tables and anti-repetition line selection
//! - **moods**: Pure mood state machine driven by streaks and milestones
//! - **milestones**: One-shot milestone detection and granting
//! - **engine**: The facade orchestrating everything per gameplay event
//!
//! ## Design Philosophy
//!
//! - **Degrade, never fail**: persistence and lookup failures fall back to defaults
//! - **State-Driven**: mood is fully determined by streak counters and milestone flags
//! - **Injectable**: the random source and the state store are dependencies, so tests
//!   run with a seeded RNG against an in-memory store

pub mod dialogue;
pub mod engine;
pub mod hydrate;
pub mod milestones;
pub mod moods;
pub mod store;

pub use dialogue::*;
pub use engine::*;
pub use hydrate::*;
pub use milestones::*;
pub use moods::*;
pub use store::*;
