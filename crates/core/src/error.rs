//! Error types for command marshalling.
//!
//! Every failure of the marshalling core is represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Bindings can marshal them to JSON and back
//! - **Final**: Nothing is retried inside the core
//!
//! Invalid input is rejected before any allocation or dispatch happens.
//! `ResourceExhausted` is raised only after the allocations made so far
//! have been released.

use serde::{Deserialize, Serialize};

/// Marshalling errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Validation | `InvalidArgument` | Bad input, rejected before dispatch |
/// | Resources | `ResourceExhausted` | Allocation failed, partial work released |
/// | Decoding | `DecodeError` | Wire type incompatible with the requested shape |
/// | Dispatch | `CommandFailed` | Native client reported an error |
/// | System | `Io`, `Serialization` | File-backed configuration loading |
///
/// # Example
///
/// ```ignore
/// use glide_bridge::{Command, Error, Executor};
///
/// match executor.execute(cmd) {
///     Ok(output) => { /* hand back to the host */ }
///     Err(Error::InvalidArgument { reason }) => {
///         println!("rejected: {}", reason);
///     }
///     Err(e) => println!("error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation Errors ====================
    /// Caller-supplied arguments are malformed
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // ==================== Resource Errors ====================
    /// An allocation could not be satisfied
    #[error("resource exhausted: {reason}")]
    ResourceExhausted { reason: String },

    // ==================== Decoding Errors ====================
    /// The response type does not fit the requested output shape
    #[error("decode error: expected {expected}, got {actual}")]
    DecodeError { expected: String, actual: String },

    // ==================== Dispatch Errors ====================
    /// The native client reported failure for the command
    #[error("command failed: {reason}")]
    CommandFailed { reason: String },

    // ==================== System Errors ====================
    /// I/O error
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// Serialization error
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`Error::DecodeError`].
    pub fn decode(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Error::DecodeError {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// True for errors raised before anything reached the native client.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. } | Error::ResourceExhausted { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io {
            reason: e.to_string(),
        }
    }
}

/// Result type for marshalling operations
pub type Result<T> = std::result::Result<T, Error>;
