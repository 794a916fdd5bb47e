//! Error types for provider operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors a provider can report. The reducer stores their display string.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Not logged in to {provider}")]
    NotLoggedIn { provider: String },

    #[error("{provider} does not support file upload")]
    Unsupported { provider: String },

    #[error("Failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize map data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Free-form failure reported by a provider backend.
    #[error("{0}")]
    Message(String),
}

impl ProviderError {
    pub fn message(message: impl Into<String>) -> Self {
        ProviderError::Message(message.into())
    }
}
