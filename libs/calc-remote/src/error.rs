//! Error types for the remote evaluation path.

use thiserror::Error;

/// Failures of the remote evaluation attempt.
///
/// All of these are recovered by falling back to local evaluation; none of
/// them crosses the engine's contract or reaches the user as an error.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response payload: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, RemoteError>;
