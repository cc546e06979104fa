//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Lesson could not be loaded
    #[error("Lesson load failed: {0}")]
    LessonLoad(String),

    /// Speech synthesis error
    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    /// Audio playback error
    #[error("Audio playback failed: {0}")]
    Playback(String),

    /// Console I/O error
    #[error("Console I/O failed: {0}")]
    Console(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_converts_transparently() {
        let domain_err = DomainError::MissingLanguage;
        let app_err: ApplicationError = domain_err.into();
        assert_eq!(
            app_err.to_string(),
            "Source and target language codes are required"
        );
    }

    #[test]
    fn lesson_load_message() {
        let err = ApplicationError::LessonLoad("no such file".to_string());
        assert_eq!(err.to_string(), "Lesson load failed: no such file");
    }

    #[test]
    fn synthesis_message() {
        let err = ApplicationError::Synthesis("endpoint unreachable".to_string());
        assert_eq!(
            err.to_string(),
            "Speech synthesis failed: endpoint unreachable"
        );
    }

    #[test]
    fn playback_message() {
        let err = ApplicationError::Playback("no output device".to_string());
        assert_eq!(err.to_string(), "Audio playback failed: no output device");
    }

    #[test]
    fn console_message() {
        let err = ApplicationError::Console("broken pipe".to_string());
        assert_eq!(err.to_string(), "Console I/O failed: broken pipe");
    }

    #[test]
    fn rate_limited_message() {
        assert_eq!(
            ApplicationError::RateLimited.to_string(),
            "Rate limit exceeded"
        );
    }
}
