//! Error types for Cairn operations.
//!
//! This module defines [`CairnError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CairnError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CairnError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users
//!
//! Option parse errors are deliberately not part of this enum: they
//! accumulate per invocation instead of propagating one at a time. See
//! [`crate::cli::OptionError`].

use thiserror::Error;

/// Core error type for Cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// Requested command id is not present in the registry.
    #[error("The command '{id}' does not exist")]
    UnknownCommand { id: String },

    /// A command with the same id is already registered.
    #[error("Command '{id}' is already registered")]
    DuplicateCommand { id: String },

    /// Option parsing produced one or more validation errors.
    #[error("Failed to execute command '{command}': {message}")]
    InvalidOptions { command: String, message: String },

    /// Command execution reported a failure, or panicked and was recovered
    /// at the dispatch boundary.
    #[error("Failed to execute command '{command}': {message}")]
    ExecutionFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;
