use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("No document available for cookie access")]
    NoDocument,

    #[error("Cookie write failed: {0}")]
    Write(String),
}

#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<SessionError> for String {
    fn from(err: SessionError) -> Self {
        err.to_string()
    }
}

impl From<StorageError> for String {
    fn from(err: StorageError) -> Self {
        err.to_string()
    }
}
