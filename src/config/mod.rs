#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_min, validate_one_of, Validate, LOG_LEVELS};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_MAX_BOUND: i64 = 10_000_000;

/// Effective settings after merging command-line flags over the TOML file
/// over the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub format: OutputFormat,
    pub max_bound: i64,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            max_bound: DEFAULT_MAX_BOUND,
            log_level: None,
        }
    }
}

/// Flag values that override the file. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub max_bound: Option<i64>,
}

impl Settings {
    pub fn resolve(file: Option<&TomlConfig>, overrides: &Overrides) -> Result<Self> {
        let defaults = Settings::default();

        let settings = Settings {
            format: overrides
                .format
                .or_else(|| file.and_then(TomlConfig::format))
                .unwrap_or(defaults.format),
            max_bound: overrides
                .max_bound
                .or_else(|| file.and_then(TomlConfig::max_bound))
                .unwrap_or(defaults.max_bound),
            log_level: file.and_then(|f| f.log_level()).map(str::to_string),
        };

        settings.validate()?;
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_min("max_bound", self.max_bound, 2)?;
        if let Some(level) = &self.log_level {
            validate_one_of("log_level", level, LOG_LEVELS)?;
        }
        Ok(())
    }
}
