//! Error taxonomy for panel API calls.

use thiserror::Error;

/// Failure of one API round trip.
///
/// Every call site catches at its own boundary: errors are logged and shown
/// in the status line, never retried and never propagated across rows or
/// batches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure or non-2xx HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// Body that could not be decoded as the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Application status embedded in an otherwise-200 response.
    #[error("server status {code}: {message}")]
    Status { code: i32, message: String },
}
