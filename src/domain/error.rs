//! Error types for the job-board core.
//!
//! This module defines the centralized error type [`JobdeckError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for job-board core operations.
///
/// This enum consolidates all error conditions that can occur during a browsing
/// session, from remote fetch failures to invalid favourites indices. None of
/// them is fatal: every error is recoverable by retrying the triggering user
/// action.
#[derive(Debug, Error)]
pub enum JobdeckError {
    /// The remote job/application API could not be reached.
    ///
    /// Produced by [`JobFetcher`](crate::remote::JobFetcher) and
    /// [`ApplicationSubmitter`](crate::remote::ApplicationSubmitter)
    /// implementations when a fetch or submit fails at the transport level.
    /// The string contains a description of what went wrong.
    #[error("Network error: {0}")]
    Network(String),

    /// A remote response could not be decoded.
    ///
    /// Wraps JSON deserialization failures from malformed API payloads.
    /// Automatically converts from `serde_json::Error` using the `#[from]`
    /// attribute.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// No job record matches the requested identifier.
    ///
    /// The string contains the identifier that was looked up.
    #[error("Job not found: {0}")]
    NotFound(String),

    /// A favourites removal index was outside the collection bounds.
    ///
    /// Removal by index fails explicitly instead of silently ignoring the
    /// request, so a stale index in the caller surfaces immediately.
    #[error("Favorite index {index} out of range for {len} entries")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of entries in the collection at the time of the call.
        len: usize,
    },

    /// An application draft failed basic field validation.
    ///
    /// The string describes the first field that was rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be read or parsed. The string
    /// describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for job-board core operations.
///
/// This is a type alias for `std::result::Result<T, JobdeckError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, JobdeckError>;
