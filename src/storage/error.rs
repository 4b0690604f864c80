use thiserror::Error;

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage failures are returned as values rather than panicking so
/// callers can chain fallbacks without exception plumbing.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The key has no stored object. Legitimate absence, not a fault.
    #[error("object not found: {0}")]
    NotFound(String),

    /// The remote API answered with a non-success status.
    #[error("storage request failed: {status} {message}")]
    Http { status: u16, message: String },

    /// Transport-level failure (connect, TLS, body read).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Stored body could not be (de)serialized.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    /// The backing store cannot take requests at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}
