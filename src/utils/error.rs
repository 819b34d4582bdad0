use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {path}: {reason}")]
    Source { path: String, reason: String },

    #[error("no valid receiver remains for at least one participant")]
    MatchingExhausted,

    #[error("cannot write {path}: {reason}")]
    Output { path: String, reason: String },

    #[error("invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SantaError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Source,
    Matching,
    Output,
    System,
}

impl SantaError {
    pub fn source(path: impl Into<String>, reason: impl Display) -> Self {
        Self::Source {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn output(path: impl Into<String>, reason: impl Display) -> Self {
        Self::Output {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfigValue { .. } => ErrorCategory::Config,
            Self::Source { .. } => ErrorCategory::Source,
            Self::MatchingExhausted => ErrorCategory::Matching,
            Self::Output { .. } => ErrorCategory::Output,
            Self::Csv(_) | Self::Io(_) => ErrorCategory::System,
        }
    }

    /// Drives the process exit code: Medium failures are retryable, High are
    /// caller mistakes, Critical are environment problems.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MatchingExhausted => ErrorSeverity::Medium,
            Self::InvalidConfigValue { .. } | Self::Source { .. } => ErrorSeverity::High,
            Self::Output { .. } | Self::Csv(_) | Self::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MatchingExhausted => {
                "No valid assignment could be drawn this attempt.".to_string()
            }
            Self::Source { path, .. } => format!("Could not load participant data from {path}."),
            Self::Output { path, .. } => format!("Could not save the assignments to {path}."),
            Self::InvalidConfigValue { field, .. } => {
                format!("Configuration problem with '{field}'.")
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MatchingExhausted => {
                "Re-run for a fresh shuffle, or raise --attempts to retry automatically."
            }
            Self::Source { .. } | Self::Csv(_) => {
                "Check the input file exists and carries the expected column headers."
            }
            Self::Output { .. } | Self::Io(_) => {
                "Check the output location is writable and has free space."
            }
            Self::InvalidConfigValue { .. } => {
                "Run with --help to see the expected configuration values."
            }
        }
    }
}
