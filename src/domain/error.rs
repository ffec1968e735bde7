//! Error types for the Launchpad plugin.
//!
//! This module defines the centralized error type [`LauncherError`] and a type alias
//! [`Result`] used throughout the plugin. Load-cycle failures (`NetworkFailure`,
//! `MalformedResponse`) never escape the fetch orchestrator; they are turned into an
//! error status plus fallback data. `MalformedEntry` is reported per entry and the
//! entry is skipped.

use thiserror::Error;

/// The main error type for Launchpad operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The catalog request could not complete or returned a non-success status.
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The catalog body could not be parsed as a JSON object of entries.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A single catalog entry is missing required fields.
    ///
    /// Never aborts a load; the entry is skipped and the error is logged.
    #[error("Malformed entry '{key}': {reason}")]
    MalformedEntry {
        /// Wire key (hostname) of the offending entry.
        key: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Preference storage failed to read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A built-in or configured theme could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid (e.g. an unreadable fallback file).
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Launchpad operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
