use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown student id: {id}")]
    UnknownStudent { id: i32 },

    #[error("Unknown course: {name}")]
    UnknownCourse { name: String },

    #[error("Student id {id} is already registered")]
    DuplicateStudent { id: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Lookup,
}

impl RegistrarError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Io,
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::DuplicateStudent { .. } => ErrorCategory::Configuration,
            Self::UnknownStudent { .. } | Self::UnknownCourse { .. } => ErrorCategory::Lookup,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write a file: {}", self),
            ErrorCategory::Configuration => {
                format!("The registration script is invalid: {}", self)
            }
            ErrorCategory::Lookup => format!("A request refers to something undefined: {}", self),
        }
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Lookup => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
