//! Error handling for PopCommand
//!
//! This module defines the main error types used throughout the plugin
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the PopCommand plugin
#[derive(Error, Debug)]
pub enum PopCommandError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Translation key '{key}' not found in any language")]
    MissingTranslation { key: String },

    #[error("Placeholder {{{index}}} in '{key}' is out of range ({supplied} values supplied)")]
    PlaceholderOutOfRange { key: String, index: usize, supplied: usize },

    #[error("Invalid translation file for '{locale}': {reason}")]
    InvalidTranslationFile { locale: String, reason: String },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for PopCommand operations
pub type Result<T> = std::result::Result<T, PopCommandError>;

impl PopCommandError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            PopCommandError::Config(_) => false,
            PopCommandError::MissingTranslation { .. } => false,
            PopCommandError::PlaceholderOutOfRange { .. } => false,
            PopCommandError::InvalidTranslationFile { .. } => false,
            PopCommandError::PermissionDenied(_) => false,
            PopCommandError::UnknownCommand(_) => true,
            PopCommandError::Serialization(_) => false,
            PopCommandError::Io(_) => true,
            PopCommandError::Logging(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PopCommandError::Config(_) => ErrorSeverity::Critical,
            PopCommandError::MissingTranslation { .. } => ErrorSeverity::Critical,
            PopCommandError::InvalidTranslationFile { .. } => ErrorSeverity::Critical,
            PopCommandError::PermissionDenied(_) => ErrorSeverity::Warning,
            PopCommandError::UnknownCommand(_) => ErrorSeverity::Info,
            PopCommandError::Logging(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
