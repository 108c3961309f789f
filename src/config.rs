use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::core::{CompatibilityEngine, DEFAULT_MAX_FAILED_CRITERIA};
use crate::models::Tolerances;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_failed_criteria")]
    pub max_failed_criteria: usize,
    #[serde(default = "default_age_tolerance_years")]
    pub age_tolerance_years: u8,
    #[serde(default = "default_height_tolerance_steps")]
    pub height_tolerance_steps: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_failed_criteria: default_max_failed_criteria(),
            age_tolerance_years: default_age_tolerance_years(),
            height_tolerance_steps: default_height_tolerance_steps(),
        }
    }
}

fn default_max_failed_criteria() -> usize { DEFAULT_MAX_FAILED_CRITERIA }
fn default_age_tolerance_years() -> u8 { 1 }
fn default_height_tolerance_steps() -> u8 { 2 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with COMPAT_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., COMPAT__MATCHING__MAX_FAILED_CRITERIA -> matching.max_failed_criteria
            .add_source(
                Environment::with_prefix("COMPAT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn tolerances(&self) -> Tolerances {
        Tolerances {
            age_years: self.matching.age_tolerance_years,
            height_steps: self.matching.height_tolerance_steps,
        }
    }

    /// Build an engine from the matching settings
    pub fn engine(&self) -> CompatibilityEngine {
        CompatibilityEngine::new(self.tolerances(), self.matching.max_failed_criteria)
    }
}
