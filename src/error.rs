//! Error Handling
//!
//! Error taxonomy for the analysis pipeline. Only admission failures and
//! transport/backend failures are ever surfaced to the caller; malformed
//! model output is recovered inside the pipeline and never becomes an error
//! (see [`crate::extract`]).

use thiserror::Error;

/// Errors that can escape the analysis pipeline.
#[derive(Error, Debug)]
pub enum ScamLensError {
    /// The upload is not an image, or its bytes could not be decoded.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The upload exceeds the admission size limit.
    #[error("Payload too large: {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    /// The inference backend could not be reached (connection refused,
    /// DNS failure, timeout, or a failed connectivity probe).
    #[error("Inference backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The inference backend was reached but answered with a non-success
    /// HTTP status.
    #[error("Inference backend error: HTTP {status}")]
    BackendError { status: u16 },
}

impl ScamLensError {
    /// Whether the caller may reasonably retry after backoff.
    ///
    /// Only reachability failures are retryable; admission failures and
    /// explicit backend error statuses are not retried automatically.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::BackendUnavailable(_))
    }

    /// Whether the failure was caused by the caller's input.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::PayloadTooLarge { .. })
    }
}

impl From<reqwest::Error> for ScamLensError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::BackendUnavailable(format!("request timed out: {err}"))
        } else if err.is_connect() {
            Self::BackendUnavailable(format!("connection failed: {err}"))
        } else {
            Self::BackendUnavailable(err.to_string())
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, ScamLensError>;
