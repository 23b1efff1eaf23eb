//! Failures of the REST API gateway.

/// Anything that went wrong between issuing a request and getting a 2xx back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("network error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },

    /// A 2xx response whose body could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The owning component went away and cancelled the request.
    #[error("request cancelled")]
    Aborted,
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}
