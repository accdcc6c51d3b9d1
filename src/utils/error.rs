use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown topic: '{name}'")]
    UnknownTopicError { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Serialization,
    Usage,
}

impl TourError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TourError::IoError(_) => ErrorSeverity::Critical,
            TourError::SerializationError(_) => ErrorSeverity::High,
            TourError::ConfigValidationError { .. }
            | TourError::InvalidConfigValueError { .. }
            | TourError::MissingConfigError { .. } => ErrorSeverity::High,
            TourError::UnknownTopicError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TourError::IoError(_) => ErrorCategory::Io,
            TourError::SerializationError(_) => ErrorCategory::Serialization,
            TourError::ConfigValidationError { .. }
            | TourError::InvalidConfigValueError { .. }
            | TourError::MissingConfigError { .. } => ErrorCategory::Config,
            TourError::UnknownTopicError { .. } => ErrorCategory::Usage,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TourError::IoError(_) => {
                "Check that the terminal or output target is writable".to_string()
            }
            TourError::SerializationError(_) => {
                "This is a bug in a lesson; please report it".to_string()
            }
            TourError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' section of the configuration file", field)
            }
            TourError::InvalidConfigValueError { field, .. } => {
                format!("Adjust the value of '{}' and try again", field)
            }
            TourError::MissingConfigError { field } => {
                format!("Add the required field '{}' to the configuration", field)
            }
            TourError::UnknownTopicError { .. } => {
                "Run with --list to see available topic names".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TourError::IoError(e) => format!("Could not write tour output: {}", e),
            TourError::SerializationError(e) => format!("A lesson failed to render: {}", e),
            TourError::ConfigValidationError { field, message } => {
                format!("The configuration file is invalid ({}): {}", field, message)
            }
            TourError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {} ({})", value, field, reason),
            TourError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            TourError::UnknownTopicError { name } => {
                format!("There is no topic named '{}'", name)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_topic_is_usage_error() {
        let err = TourError::UnknownTopicError {
            name: "pointers".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Usage);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("--list"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = TourError::InvalidConfigValueError {
            field: "rule_width".to_string(),
            value: "5".to_string(),
            reason: "too narrow".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(err.user_friendly_message().contains("rule_width"));
    }
}
