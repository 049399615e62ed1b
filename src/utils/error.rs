use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl PrimeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PrimeError::IoError(_) => ErrorCategory::Io,
            PrimeError::SerializationError(_) => ErrorCategory::Serialization,
            PrimeError::ConfigError { .. }
            | PrimeError::ConfigValidationError { .. }
            | PrimeError::InvalidConfigValueError { .. }
            | PrimeError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PrimeError::InputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Serialization => ErrorSeverity::Critical,
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
        }
    }

    /// 根據錯誤類型提供修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PrimeError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            PrimeError::SerializationError(_) => "Report this as a bug: prime output failed to encode",
            PrimeError::ConfigError { .. } | PrimeError::ConfigValidationError { .. } => {
                "Check the configuration file syntax and values"
            }
            PrimeError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value and run again"
            }
            PrimeError::MissingConfigError { .. } => {
                "Provide the missing value via flag, config file or prompt"
            }
            PrimeError::InputError { .. } => "Enter a whole number such as 10",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PrimeError::IoError(e) => format!("Could not read or write a file: {}", e),
            PrimeError::SerializationError(e) => format!("Could not encode primes as JSON: {}", e),
            PrimeError::ConfigError { message } => format!("Configuration problem: {}", message),
            PrimeError::ConfigValidationError { field, message } => {
                format!("Configuration '{}' is invalid: {}", field, message)
            }
            PrimeError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            PrimeError::MissingConfigError { field } => {
                format!("No value given for {}", field)
            }
            PrimeError::InputError { message } => format!("Invalid input: {}", message),
        }
    }

    /// 依嚴重程度決定的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PrimeError>;
