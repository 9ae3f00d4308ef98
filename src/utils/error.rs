use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Field '{field}' has the wrong type: expected {expected}")]
    InvalidFieldType { field: String, expected: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input is not valid UTF-8: {0}")]
    EncodingError(#[from] std::str::Utf8Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::MissingField { .. }
            | RosterError::InvalidFieldType { .. }
            | RosterError::SerializationError(_)
            | RosterError::EncodingError(_)
            | RosterError::CsvError(_) => ErrorCategory::Data,
            RosterError::IoError(_) => ErrorCategory::Io,
            RosterError::TomlError(_)
            | RosterError::ConfigError { .. }
            | RosterError::InvalidConfigValueError { .. }
            | RosterError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RosterError::IoError(_) => ErrorSeverity::Critical,
            RosterError::CsvError(_) | RosterError::SerializationError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::MissingField { field } => {
                format!("The team record has no '{}' field", field)
            }
            RosterError::InvalidFieldType { field, expected } => {
                format!("The team record field '{}' must be {}", field, expected)
            }
            RosterError::IoError(e) => format!("Could not access a file: {}", e),
            RosterError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            RosterError::EncodingError(e) => format!("Input file is not UTF-8 text: {}", e),
            RosterError::TomlError(e) => format!("Input is not valid TOML: {}", e),
            RosterError::CsvError(e) => format!("Could not write CSV output: {}", e),
            RosterError::ConfigError { message } => message.clone(),
            RosterError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {} ({})", value, field, reason)
            }
            RosterError::MissingConfigError { field } => {
                format!("The setting '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Data => {
                "Make sure the record has size, department, lead, manager and engineer fields"
            }
            ErrorCategory::Io => "Check that the file exists and the path is readable/writable",
            ErrorCategory::Configuration => "Review the command line flags and the config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
