//! Error Types
//!
//! Storage errors are recovered silently; fetch errors become page state.

/// Failure talking to browser local storage
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No `window.localStorage` (private mode, non-browser host)
    #[error("local storage unavailable")]
    Unavailable,

    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("deserialize error: {0}")]
    Deserialize(String),

    /// Exception thrown by the storage API (quota exceeded, etc.)
    #[error("storage error: {0}")]
    Js(String),
}

/// Failure loading the post collection
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    /// Non-success HTTP status
    #[error("Failed to fetch posts")]
    Status(u16),

    /// Transport failure; carries the underlying message
    #[error("{0}")]
    Network(String),

    /// Response body was not a post collection
    #[error("{0}")]
    Decode(String),
}

/// Shown when a failure carries no usable message
pub const GENERIC_ERROR: &str = "An error occurred";

impl FetchError {
    /// Human-readable message for the error view
    pub fn user_message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            GENERIC_ERROR.to_string()
        } else {
            msg
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
