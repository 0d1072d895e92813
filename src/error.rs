//! Error types for the cli-config CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for config operations.
///
/// Each variant maps to a specific exit code. Nothing in the core swallows
/// these; they propagate to `main`, which prints them and exits.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// User provided invalid arguments or asked for a key that is not set.
    #[error("{0}")]
    UserError(String),

    /// No config file exists for the requested scope within the installation boundary.
    #[error("{0}")]
    NotFound(String),

    /// A directory could not be created because its parent is not writable.
    #[error("Insufficient permission to create directory '{}'.", .0.display())]
    PermissionDenied(PathBuf),

    /// Filesystem failure; carries the underlying system error text.
    #[error("{0}")]
    IoFailure(String),

    /// Existing file content is not a valid YAML mapping.
    #[error("failed to parse config YAML: {0}")]
    DecodeFailure(String),

    /// The mapping could not be serialized.
    #[error("failed to serialize config to YAML: {0}")]
    EncodeFailure(String),
}

impl ConfigError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::UserError(_) => exit_codes::USER_ERROR,
            ConfigError::NotFound(_) => exit_codes::NOT_FOUND,
            ConfigError::PermissionDenied(_) => exit_codes::PERMISSION_DENIED,
            ConfigError::IoFailure(_) => exit_codes::IO_FAILURE,
            ConfigError::DecodeFailure(_) | ConfigError::EncodeFailure(_) => {
                exit_codes::YAML_FAILURE
            }
        }
    }
}

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
