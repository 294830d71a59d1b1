//! Core error types for recipebot-core.
//!
//! Validation errors never leave a flow -- they are answered with a
//! corrective prompt in the same state. Collaborator errors reach the
//! user as a short generic notice and reset the session. No error here
//! is fatal to the process.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for recipebot-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors talking to an external collaborator
    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),
}

/// Free-text input rejected by a validator.
///
/// Always recovered locally: the flow re-prompts and stays in the
/// same state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Ingredient line did not split into a name and a quantity
    #[error("ingredient line must be 'name quantity'")]
    InvalidFormat,

    /// Expected digits or the literal 'нет'
    #[error("expected a non-negative number or 'нет'")]
    InvalidNumber,

    /// Text matched the denylist
    #[error("text contains forbidden content")]
    ForbiddenContent,
}

/// Failure of an external collaborator call.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    /// Transport-level failure (connect, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Collaborator answered with a non-success status
    #[error("'{service}' returned HTTP {status}")]
    Status { service: &'static str, status: u16 },

    /// Collaborator answered 2xx but the payload is not usable
    #[error("malformed response from '{service}': {message}")]
    Malformed {
        service: &'static str,
        message: String,
    },
}

/// Configuration loading errors. Startup only.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Missing required config value: {0}")]
    Missing(&'static str),
}
