//! Validator configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::contracts::ConventionRule;
use crate::errors::ConfigError;

/// Configuration for the declaration hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// How classmethod and plain signatures are reconciled.
    #[serde(default)]
    pub convention_rule: ConventionRule,
    /// Whether accepted declarations are logged at debug level.
    #[serde(default = "default_log_accepted")]
    pub log_accepted: bool,
}

fn default_log_accepted() -> bool {
    true
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            convention_rule: ConventionRule::default(),
            log_accepted: default_log_accepted(),
        }
    }
}

impl ValidatorConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the convention rule.
    #[must_use]
    pub fn with_convention_rule(mut self, rule: ConventionRule) -> Self {
        self.convention_rule = rule;
        self
    }

    /// Requires calling conventions to match exactly.
    #[must_use]
    pub fn exact(self) -> Self {
        self.with_convention_rule(ConventionRule::Exact)
    }

    /// Enables or disables logging of accepted declarations.
    #[must_use]
    pub fn with_log_accepted(mut self, enabled: bool) -> Self {
        self.log_accepted = enabled;
        self
    }

    /// Parses configuration from JSON text. Missing fields take defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::new();
        assert_eq!(config.convention_rule, ConventionRule::Unwrap);
        assert!(config.log_accepted);
    }

    #[test]
    fn test_builder() {
        let config = ValidatorConfig::new().exact().with_log_accepted(false);
        assert_eq!(config.convention_rule, ConventionRule::Exact);
        assert!(!config.log_accepted);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ValidatorConfig::from_json_str(r#"{"convention_rule": "exact"}"#).unwrap();
        assert_eq!(config.convention_rule, ConventionRule::Exact);
        assert!(config.log_accepted);

        let config = ValidatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_rule() {
        let err = ValidatorConfig::from_json_str(r#"{"convention_rule": "loose"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"convention_rule": "unwrap", "log_accepted": false}}"#).unwrap();

        let config = ValidatorConfig::from_path(file.path()).unwrap();
        assert_eq!(config.convention_rule, ConventionRule::Unwrap);
        assert!(!config.log_accepted);
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ValidatorConfig::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
