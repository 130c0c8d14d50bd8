use crate::domain::model::AnswerIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed survey answers: {} issue(s), first: {}", .issues.len(), first_issue(.issues))]
    MalformedAnswers { issues: Vec<AnswerIssue> },

    #[error("Profile schema mismatch: {left} vs {right}")]
    SchemaMismatch { left: String, right: String },

    #[error("Unsupported profile schema version: {version}")]
    UnsupportedSchema { version: String },

    #[error("Unknown scoring preset: {name}")]
    UnknownPreset { name: String },
}

fn first_issue(issues: &[AnswerIssue]) -> String {
    issues
        .first()
        .map(|issue| issue.to_string())
        .unwrap_or_else(|| "none".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Schema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EngineError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EngineError::IoError(_) => ErrorCategory::Io,
            EngineError::SerializationError(_) | EngineError::MalformedAnswers { .. } => {
                ErrorCategory::Input
            }
            EngineError::TomlError(_)
            | EngineError::ConfigValidationError { .. }
            | EngineError::InvalidConfigValueError { .. }
            | EngineError::UnknownPreset { .. } => ErrorCategory::Configuration,
            EngineError::SchemaMismatch { .. } | EngineError::UnsupportedSchema { .. } => {
                ErrorCategory::Schema
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Schema | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EngineError::IoError(_) => "Check that the file exists and is readable",
            EngineError::SerializationError(_) => {
                "Make sure the document is valid JSON in the expected layout"
            }
            EngineError::TomlError(_) => "Make sure the config file is valid TOML",
            EngineError::ConfigValidationError { .. }
            | EngineError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration field and try again"
            }
            EngineError::MalformedAnswers { .. } => {
                "Reject the submission and ask the respondent to answer every question"
            }
            EngineError::SchemaMismatch { .. } => {
                "Re-derive both profiles with the same engine version before scoring"
            }
            EngineError::UnsupportedSchema { .. } => {
                "Re-derive the profile from its raw answers with this engine version"
            }
            EngineError::UnknownPreset { .. } => "Use one of the presets: v0.4, v0.5",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EngineError::IoError(e) => format!("Could not read or write a file: {}", e),
            EngineError::SerializationError(e) => format!("Could not parse document: {}", e),
            EngineError::TomlError(e) => format!("Could not parse config file: {}", e),
            EngineError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            EngineError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration ({}): {}", field, reason)
            }
            EngineError::MalformedAnswers { issues } => {
                format!("The survey submission has {} invalid answer(s)", issues.len())
            }
            EngineError::SchemaMismatch { left, right } => format!(
                "These profiles were built by different versions ({} and {}) and cannot be compared",
                left, right
            ),
            EngineError::UnsupportedSchema { version } => {
                format!("Profile version {} is not supported", version)
            }
            EngineError::UnknownPreset { name } => format!("No scoring preset named '{}'", name),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
