//! Error types for buildenv operations.
//!
//! This module defines [`BuildEnvError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `BuildEnvError` for domain-specific errors that callers may want
//!   to recover from (unknown project, selection before registration)
//! - Use `anyhow::Error` (via `BuildEnvError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use thiserror::Error;

/// Core error type for buildenv operations.
#[derive(Debug, Error)]
pub enum BuildEnvError {
    /// Project identifier does not name a known environment.
    #[error("Unknown project {project:?}. Known projects are: {}", .known.join(", "))]
    UnknownProject {
        project: String,
        known: Vec<&'static str>,
    },

    /// Flag-based selection requested before the staging flag was registered.
    #[error("Environment requested from flags before flag registration")]
    FlagsNotRegistered,

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for buildenv operations.
pub type Result<T> = std::result::Result<T, BuildEnvError>;
