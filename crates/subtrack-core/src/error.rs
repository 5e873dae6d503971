//! Error types for the subtrack core library.

/// Errors that can occur across the subtrack crates.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Form input failed validation (missing field, unparsable value)
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation, if attributable to one
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// A record id referenced by edit/update/delete is no longer present
    #[error("Subscription not found: {id}")]
    NotFound {
        /// The id that was not found
        id: i64,
    },

    /// I/O error (durable storage read/write)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for subtrack operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error should be surfaced to the user as a
    /// blocking message rather than propagated.
    ///
    /// Validation failures are the user's to fix and terminate only the
    /// triggering action. Everything else (missing ids, storage failures,
    /// bad configuration) propagates to the caller.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error attributed to a field.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new not-found error for the given record id.
    pub fn not_found(id: crate::types::SubscriptionId) -> Self {
        Error::NotFound { id: id.as_i64() }
    }
}
