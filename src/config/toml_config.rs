use crate::domain::model::OutputFormat;
use crate::utils::error::{PrimesError, Result};
use crate::utils::validation::{validate_min, validate_one_of, Validate, LOG_LEVELS};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub limits: Option<LimitsConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    pub max_bound: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PrimesError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn max_bound(&self) -> Option<i64> {
        self.limits.as_ref().and_then(|l| l.max_bound)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max_bound) = self.max_bound() {
            validate_min("limits.max_bound", max_bound, 2)?;
        }
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[output]
format = "json"

[limits]
max_bound = 5000

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(config.format(), Some(OutputFormat::Json));
        assert_eq!(config.max_bound(), Some(5000));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_is_case_insensitive() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"JSON\"\n").unwrap();
        assert_eq!(config.format(), Some(OutputFormat::Json));

        let config = TomlConfig::from_toml_str("[output]\nformat = \"Text\"\n").unwrap();
        assert_eq!(config.format(), Some(OutputFormat::Text));

        let err = TomlConfig::from_toml_str("[output]\nformat = \"yaml\"\n").unwrap_err();
        assert!(matches!(err, PrimesError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = TomlConfig::from_toml_str("[limits]\nmax = 3\n").unwrap_err();
        assert!(matches!(err, PrimesError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_validation_failures() {
        let low = TomlConfig::from_toml_str("[limits]\nmax_bound = 1\n").unwrap();
        assert!(low.validate().is_err());

        let level = TomlConfig::from_toml_str("[logging]\nlevel = \"chatty\"\n").unwrap();
        assert!(level.validate().is_err());
    }
}
