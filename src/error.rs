//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by command handlers.
///
/// Their display text is what the user sees in place of a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Fewer positional arguments than the command needs
    #[error("Not enough arguments for '{command}'. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// No contact with this name
    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("No phone number '{phone}' found for {name}.")]
    PhoneNotFound { name: String, phone: String },

    /// A value failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
