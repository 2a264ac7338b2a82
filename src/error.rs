//! Error types for filetimegen

use thiserror::Error;

/// Main error type for filetimegen
#[derive(Debug, Error)]
pub enum RotateError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("spec does not match input: {0}")]
    TemplateMismatch(String),

    #[error("in input '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl RotateError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RotateError::Config(_) | RotateError::TomlDeserialize(_) => 2,
            RotateError::Io(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RotateError::InvalidArgument(msg) if msg.contains("{now}") => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Put {{now}} where the timestamp belongs (e.g., 'backup-{{now}}.tar')\n\
                    • Quote the template so the shell keeps the braces",
                    self
                )
            }
            RotateError::InvalidArgument(msg) if msg.contains("--keep") => {
                format!(
                    "{}\n\n\
                    Example: filetimegen 'backup-{{now}}' --prune --keep-daily 7 --keep-weekly 4",
                    self
                )
            }
            RotateError::TomlDeserialize(_) => {
                format!(
                    "{}\n\n\
                    Valid keys: keep_minutely, keep_hourly, keep_daily, keep_weekly, keep_monthly, newline\n\
                    Keep values must be integers >= 1",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RotateError
pub type Result<T> = std::result::Result<T, RotateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_placeholder_suggestion() {
        let err = RotateError::InvalidArgument("<spec> must contain {now} somewhere".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Suggestions"));
        assert!(msg.contains("backup-{now}.tar"));
    }

    #[test]
    fn test_keep_value_example() {
        let err = RotateError::InvalidArgument("All --keep arguments must be >= 1".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("--keep-daily 7"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(RotateError::InvalidArgument("x".to_string()).exit_code(), 1);
        assert_eq!(RotateError::Config("x".to_string()).exit_code(), 2);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(RotateError::Io(io).exit_code(), 3);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = RotateError::Config("Failed to read config".to_string());
        assert_eq!(
            err.display_with_suggestions(),
            "Configuration error: Failed to read config"
        );
    }
}
