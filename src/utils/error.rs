use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapperError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON config error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML config error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Code generation error: {message}")]
    GenerationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Generation,
}

impl ScrapperError {
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfigValueError {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::JsonError(_)
            | Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::GenerationError { .. } => ErrorCategory::Generation,
        }
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Generation => 1,
            ErrorCategory::Io => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => {
                "Check that the input file exists and the output directories are writable".to_string()
            }
            Self::JsonError(_) => "Fix the JSON syntax of the config file".to_string(),
            Self::TomlError(_) => "Fix the TOML syntax of the config file".to_string(),
            Self::ConfigError { .. } => "Review the config file structure".to_string(),
            Self::MissingConfigError { field } => format!("Add the '{}' field to the config", field),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the config", field)
            }
            Self::GenerationError { .. } => {
                "Adjust the template types or suffix-mapping so every wrapper gets a distinct C name"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write a file: {}", self),
            ErrorCategory::Configuration => format!("The wrapper config is invalid: {}", self),
            ErrorCategory::Generation => format!("Could not generate wrappers: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapperError>;
