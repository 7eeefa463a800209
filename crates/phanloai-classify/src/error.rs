use thiserror::Error;

/// Failures reaching or understanding the classification service.
///
/// Every variant means the same thing to callers: the service was
/// unavailable for this turn. The distinction only matters for logs.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("classification service returned HTTP {0}")]
    Status(u16),

    #[error("malformed classification response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
