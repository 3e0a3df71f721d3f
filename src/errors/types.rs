use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TriageError {
    /// Process exit code used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TriageError::Config(_) => 2,
            TriageError::Storage(_) => 3,
            TriageError::Network(_) => 4,
            _ => 1,
        }
    }
}
