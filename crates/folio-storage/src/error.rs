use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read slot {key}: {message}")]
    Read { key: String, message: String },

    #[error("failed to write slot {key}: {message}")]
    Write { key: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A serialized record handed in for resuming could not be parsed.
#[derive(Debug, Error)]
pub enum HydrationError {
    #[error("saved document is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("saved document is not an object")]
    NotAnObject,
}
