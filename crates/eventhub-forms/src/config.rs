// File: src/config.rs
// Purpose: Configuration parsing from eventhub.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormsConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Which rules run when a field loses focus
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlurChecks {
    /// Required, email and phone only
    #[default]
    Format,
    /// Same rule set as submission
    Full,
}

/// Rule parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationConfig {
    /// Id of the number field that gets the guest-count range
    #[serde(default = "default_guests_field")]
    pub guests_field: String,

    #[serde(default = "default_guests_min")]
    pub guests_min: i64,

    #[serde(default = "default_guests_max")]
    pub guests_max: i64,

    /// Minimum raw character count of a phone number
    #[serde(default = "default_phone_min_length")]
    pub phone_min_length: usize,

    #[serde(default)]
    pub blur_checks: BlurChecks,
}

/// Toast texts and timings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// How long a toast stays fully visible
    #[serde(default = "default_visible_ms")]
    pub visible_ms: u64,

    /// Length of the exit animation before removal
    #[serde(default = "default_exit_ms")]
    pub exit_ms: u64,

    #[serde(default = "default_event_success")]
    pub event_success: String,

    #[serde(default = "default_newsletter_success")]
    pub newsletter_success: String,

    #[serde(default = "default_newsletter_invalid")]
    pub newsletter_invalid: String,
}

// Default values
fn default_guests_field() -> String {
    "guests".to_string()
}

fn default_guests_min() -> i64 {
    1
}

fn default_guests_max() -> i64 {
    10_000
}

fn default_phone_min_length() -> usize {
    eventhub_validation::DEFAULT_PHONE_MIN_LENGTH
}

fn default_visible_ms() -> u64 {
    5_000
}

fn default_exit_ms() -> u64 {
    300
}

fn default_event_success() -> String {
    "Event request submitted successfully! We will contact you within 24 hours.".to_string()
}

fn default_newsletter_success() -> String {
    "Successfully subscribed to newsletter!".to_string()
}

fn default_newsletter_invalid() -> String {
    "Please enter a valid email address".to_string()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            guests_field: default_guests_field(),
            guests_min: default_guests_min(),
            guests_max: default_guests_max(),
            phone_min_length: default_phone_min_length(),
            blur_checks: BlurChecks::default(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            visible_ms: default_visible_ms(),
            exit_ms: default_exit_ms(),
            event_success: default_event_success(),
            newsletter_success: default_newsletter_success(),
            newsletter_invalid: default_newsletter_invalid(),
        }
    }
}

impl FormsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./eventhub.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("eventhub.toml")
    }

    /// Parse configuration from TOML text; blank text yields defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormsConfig = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = FormsConfig::default();
        assert_eq!(config.validation.guests_field, "guests");
        assert_eq!(config.validation.guests_min, 1);
        assert_eq!(config.validation.guests_max, 10_000);
        assert_eq!(config.validation.phone_min_length, 10);
        assert_eq!(config.validation.blur_checks, BlurChecks::Format);
        assert_eq!(config.notifications.visible_ms, 5_000);
        assert_eq!(config.notifications.exit_ms, 300);
    }

    #[test]
    fn test_empty_config() {
        let config = FormsConfig::from_toml_str("  \n").unwrap();
        assert_eq!(config, FormsConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [validation]
            guests_max = 500
            blur_checks = "full"

            [notifications]
            newsletter_success = "Successfully subscribed to event updates!"
        "#;
        let config = FormsConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.validation.guests_max, 500);
        assert_eq!(config.validation.guests_min, 1);
        assert_eq!(config.validation.blur_checks, BlurChecks::Full);
        assert_eq!(
            config.notifications.newsletter_success,
            "Successfully subscribed to event updates!"
        );
        assert_eq!(config.notifications.visible_ms, 5_000);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(FormsConfig::from_toml_str("[validation]\nblur_checks = \"sometimes\"").is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = FormsConfig::load("definitely/not/here/eventhub.toml").unwrap();
        assert_eq!(config, FormsConfig::default());
    }
}
