use thiserror::Error;

/// Errors surfaced by a [`Classifier`](crate::Classifier).
///
/// A rejected input is not an error: it is reported as
/// [`Classification::Failed`](crate::Classification::Failed).
#[derive(Debug, Clone, Error)]
pub enum DetectionError {
    /// Configuration is inconsistent (e.g., empty endpoint URL).
    #[error("invalid detection config: {0}")]
    InvalidConfig(String),
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The service answered with a non-success status other than 400.
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },
    /// The service answered 2xx but the body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for DetectionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DetectionError::MalformedResponse(err.to_string())
        } else {
            DetectionError::Transport(err.to_string())
        }
    }
}
