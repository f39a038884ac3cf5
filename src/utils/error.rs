use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimesError {
    #[error("Invalid input for '{field}': '{value}' ({reason})")]
    InvalidInputType {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Bound {bound} exceeds the configured maximum of {max}")]
    BoundExceeded { bound: i64, max: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Limit,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PrimesError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PrimesError::InvalidInputType { .. } => ErrorCategory::Input,
            PrimesError::BoundExceeded { .. } => ErrorCategory::Limit,
            PrimesError::ConfigValidationError { .. }
            | PrimesError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PrimesError::IoError(_) | PrimesError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Limit => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PrimesError::InvalidInputType { field, .. } => {
                format!("Pass a whole number in the signed 64-bit range for '{}'", field)
            }
            PrimesError::BoundExceeded { max, .. } => format!(
                "Use a bound of at most {}, or raise it with --max-bound or [limits] max_bound",
                max
            ),
            PrimesError::ConfigValidationError { .. } => {
                "Check that the configuration file is valid TOML".to_string()
            }
            PrimesError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            PrimesError::IoError(_) => {
                "Check that the configuration file exists and is readable".to_string()
            }
            PrimesError::SerializationError(_) => {
                "Retry with --format text".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PrimesError::InvalidInputType { field, value, .. } => {
                format!("'{}' is not a valid integer for {}", value, field)
            }
            PrimesError::BoundExceeded { bound, max } => {
                format!("Refusing to enumerate primes up to {} (limit {})", bound, max)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrimesError>;
