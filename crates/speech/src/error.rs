//! Error types for speech synthesis operations

use thiserror::Error;

/// Errors that can occur during speech synthesis
#[derive(Error, Debug)]
pub enum SpeechError {
    /// Failed to connect to the synthesis service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The HTTP request failed after a connection was established
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The service refused or could not synthesize the text
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// The service answered but the response was unusable
    #[error("Invalid response from service: {0}")]
    InvalidResponse(String),

    /// The service does not speak the requested language
    #[error("Unsupported synthesis language: {0}")]
    UnsupportedLanguage(String),

    /// The service throttled us
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The provider configuration is invalid
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
