//! Configuration for scholarflow-core
//!
//! Workflow constants and display thresholds. Loaded from
//! `<config dir>/scholarflow/config.toml` when present, defaults otherwise.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// System-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScholarflowConfig {
    /// Workflow rules and constants
    pub workflow: WorkflowConfig,
    /// Display thresholds and previews
    pub display: DisplayConfig,
}

/// Workflow configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Manuscript shown when a view opens without navigation context
    pub default_manuscript_id: String,
    /// Minimum editor match confidence for automatic assignment
    pub auto_assign_threshold: u8,
    /// Size of the recommended reviewer slice
    pub top_reviewer_count: usize,
    /// Days a reviewer has to answer an invitation
    pub reviewer_response_days: u32,
    /// Days to complete a review after accepting
    pub review_completion_days: u32,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            default_manuscript_id: "MS-2024-001".to_string(),
            auto_assign_threshold: 90,
            top_reviewer_count: 5,
            reviewer_response_days: 5,
            review_completion_days: 21,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Evaluation scores at or above this are shown as high
    pub score_high_threshold: u8,
    /// Evaluation scores at or above this (and below high) are medium
    pub score_medium_threshold: u8,
    /// Summary tab selected when a review opens ("5min", "10min", "15min")
    pub default_summary: String,
    /// Authors listed before collapsing to "+N"
    pub author_preview_count: usize,
    /// Keywords listed in worklist rows
    pub keyword_preview_count: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            score_high_threshold: 90,
            score_medium_threshold: 75,
            default_summary: "5min".to_string(),
            author_preview_count: 2,
            keyword_preview_count: 3,
        }
    }
}

impl ScholarflowConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a TOML config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&text)
    }

    /// Standard config file location
    pub fn standard_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scholarflow").join("config.toml"))
    }

    /// Load from the standard location, or defaults when no file exists
    pub fn load_standard() -> Result<Self> {
        match Self::standard_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from {:?}", path);
                Self::from_path(path)
            }
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let display = &self.display;
        let workflow = &self.workflow;

        if display.score_high_threshold > 100 || display.score_medium_threshold > 100 {
            return Err(ConfigError::OutOfRange(
                "score thresholds must be between 0 and 100".to_string(),
            ));
        }

        if display.score_medium_threshold >= display.score_high_threshold {
            return Err(ConfigError::InvalidThresholds(
                "score_high_threshold must be greater than score_medium_threshold".to_string(),
            ));
        }

        if workflow.auto_assign_threshold > 100 {
            return Err(ConfigError::OutOfRange(
                "auto_assign_threshold must be between 0 and 100".to_string(),
            ));
        }

        if workflow.top_reviewer_count == 0 {
            return Err(ConfigError::OutOfRange(
                "top_reviewer_count must be positive".to_string(),
            ));
        }

        if workflow.default_manuscript_id.trim().is_empty() {
            return Err(ConfigError::MissingField(
                "default_manuscript_id".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScholarflowConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.workflow.default_manuscript_id, "MS-2024-001");
        assert_eq!(config.workflow.top_reviewer_count, 5);
    }

    #[test]
    fn test_json_serialization() {
        let config = ScholarflowConfig::default();
        let json = config.to_json().unwrap();
        let parsed = ScholarflowConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ScholarflowConfig::from_toml(
            r#"
            [workflow]
            auto_assign_threshold = 80
            "#,
        )
        .unwrap();
        assert_eq!(config.workflow.auto_assign_threshold, 80);
        assert_eq!(config.workflow.reviewer_response_days, 5);
        assert_eq!(config.display.score_high_threshold, 90);
    }

    #[test]
    fn test_invalid_thresholds() {
        let mut config = ScholarflowConfig::default();
        config.display.score_high_threshold = 70;
        config.display.score_medium_threshold = 75;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThresholds(_))
        ));
    }

    #[test]
    fn test_out_of_range() {
        let mut config = ScholarflowConfig::default();
        config.workflow.auto_assign_threshold = 150;
        assert!(config.validate().is_err());

        let mut config = ScholarflowConfig::default();
        config.workflow.top_reviewer_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_default_manuscript() {
        let mut config = ScholarflowConfig::default();
        config.workflow.default_manuscript_id = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField(_))
        ));
    }

    #[test]
    fn test_toml_parse_error_is_config_error() {
        let err = ScholarflowConfig::from_toml("workflow = 3").unwrap_err();
        assert!(matches!(
            err,
            crate::error::ScholarflowError::Config(ConfigError::Parse(_))
        ));
    }
}
