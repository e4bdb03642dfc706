use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Source format error: {message}")]
    SourceFormat { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Country not found: {country}")]
    CountryNotFound { country: String },

    #[error("Price not found for {query}")]
    PriceNotFound { query: String },

    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },
}

impl From<csv::Error> for EtlError {
    fn from(err: csv::Error) -> Self {
        EtlError::SourceFormat {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Config,
    Output,
    Query,
}

impl EtlError {
    pub fn source_format(message: impl Into<String>) -> Self {
        EtlError::SourceFormat {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::SourceFormat { .. } => ErrorCategory::Source,
            EtlError::IoError(_) | EtlError::SerializationError(_) => ErrorCategory::Output,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            EtlError::CountryNotFound { .. }
            | EtlError::PriceNotFound { .. }
            | EtlError::InvalidQuery { .. } => ErrorCategory::Query,
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 1,
            ErrorCategory::Source => 2,
            ErrorCategory::Output => 3,
            ErrorCategory::Query => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::SourceFormat { message } => {
                format!("The pricebook source could not be read as a table: {}", message)
            }
            EtlError::IoError(e) => format!("File access failed: {}", e),
            EtlError::SerializationError(e) => {
                format!("The pricebook document is malformed: {}", e)
            }
            EtlError::CountryNotFound { country } => {
                format!("No pricing for country '{}'", country)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Source => {
                "Export the sheet as delimited text with the full column layout and its header rows"
            }
            ErrorCategory::Config => "Check the command line flags and the TOML configuration file",
            ErrorCategory::Output => "Check that the destination directory exists and is writable",
            ErrorCategory::Query => "List available countries with the 'countries' command",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
