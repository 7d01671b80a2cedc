use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeymapError {
    #[error("Usage: {program} <csv_file_path>")]
    UsageError { program: String },

    #[error("Error reading CSV file {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KeymapError {
    pub fn usage(program: impl Into<String>) -> Self {
        Self::UsageError {
            program: program.into(),
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UsageError { .. } => ErrorCategory::Usage,
            Self::ReadError { .. } => ErrorCategory::Input,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Output,
            Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UsageError { .. } | Self::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            Self::ReadError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UsageError { .. } | Self::ReadError { .. } => self.to_string(),
            Self::IoError(e) => format!("Failed to write output file: {}", e),
            Self::SerializationError(e) => format!("Failed to encode mapping as JSON: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Usage => "Pass exactly one argument: the path of the CSV file to convert",
            ErrorCategory::Input => "Check that the file exists, is readable and is UTF-8 encoded CSV",
            ErrorCategory::Output => "Check write permission and free space in the current directory",
            ErrorCategory::Configuration => "Fix the argument value and run again",
        }
    }

    // 所有錯誤都是致命的，統一以 1 結束
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, KeymapError>;
