use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("Missing API credential: set {variable} in the environment, a .env file or the settings file")]
    MissingCredential { variable: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    ApiStatus { status: u16, message: String },

    #[error("Malformed API response: {message}")]
    MalformedResponse { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown language: {input}")]
    UnknownLanguage { input: String },

    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Api,
    Data,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TranslatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredential { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ApiError(_) => ErrorCategory::Network,
            Self::ApiStatus { .. } => ErrorCategory::Api,
            Self::MalformedResponse { .. } | Self::SerializationError(_) => ErrorCategory::Data,
            Self::UnknownLanguage { .. } | Self::InvalidCommand { .. } => ErrorCategory::Input,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownLanguage { .. } | Self::InvalidCommand { .. } => ErrorSeverity::Low,
            Self::ApiError(_) | Self::ApiStatus { .. } | Self::MalformedResponse { .. } => {
                ErrorSeverity::Medium
            }
            Self::MissingCredential { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingCredential { variable } => {
                format!("No API key configured ({} is not set)", variable)
            }
            Self::ApiError(e) if e.is_connect() => {
                "Could not reach the translation service".to_string()
            }
            Self::ApiError(_) => "The request to the translation service failed".to_string(),
            Self::ApiStatus { status, message } => {
                format!("The translation service rejected the request ({}): {}", status, message)
            }
            Self::MalformedResponse { .. } | Self::SerializationError(_) => {
                "The translation service returned an unexpected response".to_string()
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            Self::UnknownLanguage { input } => format!(
                "'{}' is not one of English (en), Latin (la) or Classical Chinese (lzh)",
                input
            ),
            Self::InvalidCommand { message } => message.clone(),
            Self::IoError(e) => format!("File or terminal error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Add OPENAI_API_KEY=your_api_key_here to a .env file or to translator.toml, then try again"
            }
            ErrorCategory::Network => "Check your network connection and resubmit",
            ErrorCategory::Api => "Check the API key, model name and account quota, then resubmit",
            ErrorCategory::Data => "Resubmit; if this keeps happening, check the configured endpoint",
            ErrorCategory::Input => "Type 'help' to see the available commands",
            ErrorCategory::System => "Check file permissions and that the terminal is still attached",
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_is_configuration_error() {
        let err = TranslatorError::MissingCredential {
            variable: "OPENAI_API_KEY".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_api_status_is_retryable_by_user() {
        let err = TranslatorError::ApiStatus {
            status: 429,
            message: "Rate limit reached".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Api);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "API returned status 429: Rate limit reached");
    }

    #[test]
    fn test_input_errors_are_low_severity() {
        let err = TranslatorError::UnknownLanguage {
            input: "klingon".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("klingon"));
    }
}
