use crate::utils::error::{PrimesError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Parses a command-line operand into an `i64`.
///
/// Accepts an optional sign and surrounding whitespace. Anything else,
/// including decimals and values outside the `i64` range, is rejected as
/// `InvalidInputType`.
pub fn parse_integer(field_name: &str, raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PrimesError::InvalidInputType {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "value is empty".to_string(),
        });
    }

    trimmed
        .parse::<i64>()
        .map_err(|e| PrimesError::InvalidInputType {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

pub fn validate_min(field_name: &str, value: i64, min_value: i64) -> Result<()> {
    if value < min_value {
        return Err(PrimesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value.to_ascii_lowercase().as_str()) {
        return Err(PrimesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
