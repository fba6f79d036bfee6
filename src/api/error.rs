use thiserror::Error;

/// Failures talking to the pipeline backend.
///
/// The board treats every variant the same way (rollback plus error
/// notice); the distinction exists for logs and for the page-level
/// load error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned HTTP {status}: {reason}")]
    Status { status: u16, reason: String },
}
