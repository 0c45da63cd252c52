//! Error handling for the pre-flight verifier

use thiserror::Error;

/// Custom error types for the pre-flight verifier
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration source is absent or unreadable
    #[error("Configuration file not found: {0}")]
    ConfigMissing(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network, DNS, TLS and socket errors
    #[error("Transport error: {0}")]
    Transport(String),

    /// HTTP responses outside the expected status
    #[error("HTTP {status} {reason}")]
    Protocol { status: u16, reason: String },

    /// Response bodies that do not match the expected shape
    #[error("Unexpected response format: {0}")]
    Format(String),

    /// Operations that exceeded their deadline
    #[error("Timeout: {0}")]
    Timeout(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (URLs, numbers, etc.)
    #[error("Parsing error: {0}")]
    Parse(String),
}

impl AppError {
    /// Create a new missing-configuration error
    pub fn config_missing<S: Into<String>>(path: S) -> Self {
        Self::ConfigMissing(path.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    /// Create a new protocol error from an HTTP status
    pub fn protocol<S: Into<String>>(status: u16, reason: S) -> Self {
        Self::Protocol {
            status,
            reason: reason.into(),
        }
    }

    /// Create a new response-format error
    pub fn bad_format<S: Into<String>>(message: S) -> Self {
        Self::Format(message.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::ConfigMissing(_) | Self::Config(_) => "CONFIG",
            Self::Transport(_) => "NETWORK",
            Self::Protocol { .. } => "HTTP",
            Self::Format(_) => "FORMAT",
            Self::Timeout(_) => "TIMEOUT",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(error: url::ParseError) -> Self {
        Self::parse(format!("URL parse error: {}", error))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::bad_format(format!("JSON parse error: {}", error))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::timeout(error.to_string())
        } else if error.is_decode() {
            Self::bad_format(error.to_string())
        } else {
            Self::transport(error.to_string())
        }
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::protocol(401, "Unauthorized");
        assert_eq!(error.to_string(), "HTTP 401 Unauthorized");

        let error = AppError::config_missing("src/config.h");
        assert_eq!(
            error.to_string(),
            "Configuration file not found: src/config.h"
        );

        let error = AppError::bad_format("missing utc_offset_seconds");
        assert_eq!(
            error.to_string(),
            "Unexpected response format: missing utc_offset_seconds"
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(AppError::config_missing("x").category(), "CONFIG");
        assert_eq!(AppError::config("x").category(), "CONFIG");
        assert_eq!(AppError::transport("x").category(), "NETWORK");
        assert_eq!(AppError::protocol(500, "x").category(), "HTTP");
        assert_eq!(AppError::bad_format("x").category(), "FORMAT");
        assert_eq!(AppError::timeout("x").category(), "TIMEOUT");
        assert_eq!(AppError::io("x").category(), "IO");
        assert_eq!(AppError::parse("x").category(), "PARSE");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: AppError = io_error.into();
        assert!(matches!(error, AppError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: AppError = json_error.into();
        assert_eq!(error.category(), "FORMAT");
    }
}
