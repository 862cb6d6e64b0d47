//! # Quiz Rules
//!
//! The shared vocabulary crate for the quiz companion - mood definitions,
//! the persistent session state, and the engine configuration. This crate
//! is the single source of truth for companion state and contains no
//! dialogue or selection logic.

pub mod config;
pub mod mood;
pub mod session;

pub use config::*;
pub use mood::*;
pub use session::*;
