//! Core error types for bidi-lint and cross-module error handling
//!
//! Provides the main `CoreError` enum shared by configuration loading and the
//! reporter. Stylesheet parsing never fails as a whole; see
//! [`crate::parser::ParseIssue`] for recoverable syntax problems.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling
//! - Nothing in this crate aborts a lint run: errors surface per declaration
//!   or per configuration load and the caller decides what to do with them

use thiserror::Error;

/// Main error type for bidi-lint core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Caller options could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// A finding was produced for a declaration that carries no source
    /// position, so no line number can be reported
    #[error("Missing source position for `{property}: {value}`")]
    MissingPosition {
        /// Property name of the offending declaration
        property: String,
        /// Raw value of the offending declaration
        value: String,
    },
}

impl CoreError {
    /// Create configuration error from message
    pub fn config<T: core::fmt::Display>(message: T) -> Self {
        Self::Config(message.to_string())
    }

    /// Create missing position error for a declaration
    pub fn missing_position(property: &str, value: &str) -> Self {
        Self::MissingPosition {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    /// Get suggested action for this error
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check option names and value types against the defaults"),
            Self::MissingPosition { .. } => {
                Some("Build declarations with a source position so findings can be located")
            }
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_position_display() {
        let err = CoreError::missing_position("float", "left");
        assert_eq!(
            err.to_string(),
            "Missing source position for `float: left`"
        );
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn config_error_from_message() {
        let err = CoreError::config("expected a boolean");
        assert_eq!(err, CoreError::Config("expected a boolean".to_string()));
        assert_eq!(err.to_string(), "Configuration error: expected a boolean");
    }
}
