use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("{message}")]
    ValidationError { field: String, message: String },

    #[error("{message}")]
    ApiError { status: u16, message: String },

    #[error("{label} {id} not found")]
    NotFound { label: String, id: i64 },

    #[error("{message}")]
    Conflict { message: String },

    #[error("Expected JSON response but received: {content_type}")]
    UnexpectedContentType { content_type: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Validation,
    Configuration,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 可重試（網路或伺服器暫時性錯誤）
    Medium,
    /// 輸入或請求本身有問題
    High,
    /// 本機環境錯誤
    Critical,
}

impl FleetError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        FleetError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FleetError::HttpError(_) => ErrorCategory::Network,
            FleetError::ApiError { .. }
            | FleetError::NotFound { .. }
            | FleetError::Conflict { .. }
            | FleetError::UnexpectedContentType { .. } => ErrorCategory::Api,
            FleetError::ValidationError { .. } => ErrorCategory::Validation,
            FleetError::ConfigError { .. }
            | FleetError::InvalidConfigValueError { .. }
            | FleetError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FleetError::IoError(_) | FleetError::ZipError(_) => ErrorCategory::Storage,
            FleetError::SerializationError(_) | FleetError::CsvError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FleetError::HttpError(e) if e.is_timeout() || e.is_connect() => ErrorSeverity::Medium,
            FleetError::ApiError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            FleetError::IoError(_) | FleetError::ZipError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FleetError::HttpError(e) if e.is_timeout() => {
                "The drone API did not answer in time".to_string()
            }
            FleetError::HttpError(e) if e.is_connect() => {
                "Could not connect to the drone API".to_string()
            }
            FleetError::HttpError(e) => format!("Request to the drone API failed: {}", e),
            FleetError::ApiError { status, message } => {
                format!("The drone API rejected the request ({}): {}", status, message)
            }
            FleetError::SerializationError(_) => {
                "The drone API returned data in an unexpected shape".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the API base URL and your network connection, then retry",
            ErrorCategory::Api => "Check the record id and the API logs; the server owns all business rules",
            ErrorCategory::Validation => "Correct the highlighted field and submit again",
            ErrorCategory::Configuration => "Check the command-line flags and the TOML configuration file",
            ErrorCategory::Storage => "Check that the output directory exists and is writable",
            ErrorCategory::Data => "Verify that the API version matches this client",
        }
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        let err = FleetError::ApiError {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Api);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = FleetError::ApiError {
            status: 400,
            message: "Missing required fields: status".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("Missing required fields"));
    }

    #[test]
    fn test_validation_error_displays_message_only() {
        let err = FleetError::validation("naam", "Zone name is required.");
        assert_eq!(err.to_string(), "Zone name is required.");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
