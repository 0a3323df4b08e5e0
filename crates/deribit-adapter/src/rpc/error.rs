/*
[INPUT]:  Error sources (WebSocket transport, JSON-RPC, serialization, auth)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Main error type for the Deribit adapter
#[derive(Error, Debug)]
pub enum DeribitError {
    /// WebSocket connect/send/receive failed
    #[error("WebSocket transport error: {0}")]
    Transport(#[from] tungstenite::Error),

    /// The round trip did not complete within the configured timeout
    #[error("Connection timeout after {duration}s")]
    Timeout { duration: u64 },

    /// The server returned a JSON-RPC error object
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// Authentication failed
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Signing the auth payload failed
    #[error("Signature error: {0}")]
    Signature(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The server sent a frame the adapter cannot interpret
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DeribitError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DeribitError::Transport(_)
                | DeribitError::Timeout { .. }
                | DeribitError::InvalidResponse(_)
        )
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            DeribitError::Authentication { .. } | DeribitError::Signature(_) => true,
            // 13004: invalid_credentials, 13009: unauthorized (expired/revoked token)
            DeribitError::Api { code, .. } => matches!(code, 13004 | 13009),
            _ => false,
        }
    }
}

/// Result type alias for Deribit operations
pub type Result<T> = std::result::Result<T, DeribitError>;
