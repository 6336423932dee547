//! Error types for emotion classification.
//!
//! [`ClassifyError`] is the only error a caller of
//! [`EmotionClassifier::classify`](crate::EmotionClassifier::classify) sees.
//! Transport failures never reach the caller: they are absorbed by the
//! keyword fallback.

/// Remote-side anomalies surfaced to the caller instead of a score set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// The emotion service answered with a status other than 200 or 400.
    #[error("Error: Received status code {0}")]
    UnexpectedStatus(u16),

    /// The response body was not valid JSON.
    #[error("Error: Invalid response format")]
    InvalidResponseFormat,

    /// The response was JSON but none of the five emotion scores could be located.
    #[error("Error: Unexpected response format")]
    UnexpectedResponseFormat,
}

/// Outcome of a failed call to the remote emotion service.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Connection, DNS, timeout or body read failure.
    #[error("emotion service unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Invalid classifier configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Invalid(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}
