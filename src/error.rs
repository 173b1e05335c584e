//! Error types for the contact manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ContactField;
use thiserror::Error;

/// Errors raised by [`ContactManager`](crate::ContactManager) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A required field was absent when adding a contact
    #[error("Invalid argument: {field} is required")]
    InvalidArgument { field: ContactField },
}

impl ContactError {
    /// The field that caused the rejection.
    pub fn field(&self) -> ContactField {
        match self {
            Self::InvalidArgument { field } => *field,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors that can occur while importing contact rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// The row could not be split into contact fields
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// The row parsed but the manager refused it
    #[error("Row at line {line} rejected: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: ContactError,
    },
}

impl IntakeError {
    /// The 1-based input line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedRow { line, .. } | Self::Rejected { line, .. } => *line,
        }
    }
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with IntakeError
pub type IntakeResult<T> = Result<T, IntakeError>;
