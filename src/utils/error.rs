use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Invalid argument '{field}' = '{value}': {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, GreeterError>;

impl GreeterError {
    pub fn invalid_argument(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, reason, .. } => {
                format!("The value given for '{}' was rejected: {}", field, reason)
            }
            Self::IoError(e) => format!("Could not read or write: {}", e),
            Self::SerializationError(e) => format!("Could not render output: {}", e),
            Self::ConfigError { message } => format!("The configuration is invalid: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "Check the argument values and try again",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) => "Re-run without --json to see plain output",
            Self::ConfigError { .. } => "Make sure the file is valid TOML and lists at least one person",
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 2,
            Self::ConfigError { .. } => 1,
            Self::IoError(_) | Self::SerializationError(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = GreeterError::invalid_argument("age", -1, "Value must be at least 0");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'age' = '-1': Value must be at least 0"
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GreeterError = io.into();
        assert!(matches!(err, GreeterError::IoError(_)));
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().contains("missing"));
    }
}
