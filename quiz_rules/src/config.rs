//! Engine configuration and the explicit override-merge layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Persistence slot used when the caller does not supply one.
pub const DEFAULT_STORAGE_KEY: &str = "christmas_quiz_elf_state_v1";

/// Errors from loading configuration overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config overrides: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Immutable per-session engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Total number of quiz questions. Informational only; never
    /// validated against the answered count.
    pub total_questions: u32,

    /// Question-index thresholds that unlock milestones, in order.
    /// Defines the length of the granted-flags array in session state.
    pub milestones: Vec<u32>,

    /// Identifies the persistence slot in the state store.
    pub storage_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            total_questions: 30,
            milestones: Vec::new(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Merge caller overrides onto this configuration.
    ///
    /// Field-by-field precedence: the caller value wins when provided and
    /// non-empty (a milestones list must be non-empty, a storage key must
    /// be a non-empty string), otherwise the existing value stays.
    pub fn resolve(&self, overrides: &ConfigOverrides) -> EngineConfig {
        EngineConfig {
            total_questions: overrides.total_questions.unwrap_or(self.total_questions),
            milestones: match &overrides.milestones {
                Some(m) if !m.is_empty() => m.clone(),
                _ => self.milestones.clone(),
            },
            storage_key: match &overrides.storage_key {
                Some(k) if !k.is_empty() => k.clone(),
                _ => self.storage_key.clone(),
            },
        }
    }
}

/// Caller-supplied partial configuration. Every field is optional;
/// merging is done by [`EngineConfig::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverrides {
    pub total_questions: Option<u32>,
    pub milestones: Option<Vec<u32>>,
    pub storage_key: Option<String>,
}

impl ConfigOverrides {
    /// Parse overrides from a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Overrides that set only the milestone thresholds.
    pub fn with_milestones(milestones: Vec<u32>) -> Self {
        Self {
            milestones: Some(milestones),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.total_questions, 30);
        assert!(config.milestones.is_empty());
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_resolve_caller_wins_when_present() {
        let base = EngineConfig::default();
        let overrides = ConfigOverrides {
            total_questions: Some(12),
            milestones: Some(vec![3, 6, 9]),
            storage_key: Some("custom_slot".to_string()),
        };

        let resolved = base.resolve(&overrides);
        assert_eq!(resolved.total_questions, 12);
        assert_eq!(resolved.milestones, vec![3, 6, 9]);
        assert_eq!(resolved.storage_key, "custom_slot");
    }

    #[test]
    fn test_resolve_empty_values_fall_back() {
        let base = EngineConfig {
            milestones: vec![5, 10],
            ..EngineConfig::default()
        };
        let overrides = ConfigOverrides {
            total_questions: None,
            milestones: Some(Vec::new()),
            storage_key: Some(String::new()),
        };

        let resolved = base.resolve(&overrides);
        assert_eq!(resolved.total_questions, 30);
        assert_eq!(resolved.milestones, vec![5, 10]);
        assert_eq!(resolved.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_overrides_from_toml() {
        let overrides = ConfigOverrides::from_toml_str(
            r#"
            total_questions = 20
            milestones = [5, 10, 15, 20]
            "#,
        )
        .unwrap();

        assert_eq!(overrides.total_questions, Some(20));
        assert_eq!(overrides.milestones, Some(vec![5, 10, 15, 20]));
        assert_eq!(overrides.storage_key, None);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(ConfigOverrides::from_toml_str("milestones = \"not a list\"").is_err());
    }
}
